use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    check_admin, check_tour_guide, create_user, get_users, make_admin, make_tour_guide,
};

pub fn init_users_router(state: &AppState) -> Router<AppState> {
    let public = Router::new().route("/users", post(create_user));

    // The admin check takes an email in the segment the promotion route uses
    // for a document id; both share one path pattern.
    let authenticated = Router::new()
        .route("/users/admin/{id}", get(check_admin))
        .route("/users/tourGuide/{email}", get(check_tour_guide))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let admin = Router::new()
        .route("/users", get(get_users))
        .route("/users/admin/{id}", patch(make_admin))
        .route("/users/guide/{id}", patch(make_tour_guide))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    public.merge(authenticated).merge(admin)
}
