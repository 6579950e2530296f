use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::{require_admin, require_tour_guide};
use crate::state::AppState;

use super::controller::{
    accept_booking, create_booking, get_bookings, get_guide_bookings, get_tourist_bookings,
    reject_booking,
};

pub fn init_bookings_router(state: &AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/booking", post(create_booking))
        .route("/booking/{tourist_email}", get(get_tourist_bookings))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let admin = Router::new()
        .route("/booking", get(get_bookings))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let tour_guide = Router::new()
        .route("/booking/new/{selected_guide}", get(get_guide_bookings))
        .route("/booking/accept/{id}", patch(accept_booking))
        .route("/booking/reject/{id}", patch(reject_booking))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_tour_guide,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    authenticated.merge(admin).merge(tour_guide)
}
