use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{create_package, get_package, get_packages};

pub fn init_packages_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/packages", get(get_packages))
        .route("/packages/{id}", get(get_package));

    let admin = Router::new()
        .route("/packages", post(create_package))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    public.merge(admin)
}
