use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    create_tour_guide, get_tour_guide, get_tour_guide_by_name, get_tour_guides,
};

pub fn init_tour_guides_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/tourGuide", get(get_tour_guides))
        .route("/tourGuide/{id}", get(get_tour_guide))
        .route("/tourGuide/new/{name}", get(get_tour_guide_by_name));

    let admin = Router::new()
        .route("/tourGuide", post(create_tour_guide))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    public.merge(admin)
}
