use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::state::AppState;

use super::controller::{create_review, get_review, get_reviews};

pub fn init_reviews_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/review", get(get_reviews))
        .route("/review/{id}", get(get_review));

    let authenticated = Router::new()
        .route("/review", post(create_review))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    public.merge(authenticated)
}
