use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{
    add_to_wishlist, delete_wishlist_entry, get_user_wishlist, get_wishlist, get_wishlist_entry,
};

pub fn init_wishlist_router(state: &AppState) -> Router<AppState> {
    // GET reads the segment as an owner email, DELETE as an entry id.
    let authenticated = Router::new()
        .route("/addToWishlist", post(add_to_wishlist))
        .route(
            "/wishlist/{id}",
            get(get_user_wishlist).delete(delete_wishlist_entry),
        )
        .route("/wishlist/new/{id}", get(get_wishlist_entry))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let admin = Router::new()
        .route("/wishlist", get(get_wishlist))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    authenticated.merge(admin)
}
