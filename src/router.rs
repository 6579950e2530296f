use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use travol_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::init_auth_router;
use crate::modules::bookings::init_bookings_router;
use crate::modules::packages::init_packages_router;
use crate::modules::reviews::init_reviews_router;
use crate::modules::tour_guides::init_tour_guides_router;
use crate::modules::users::init_users_router;
use crate::modules::wishlist::init_wishlist_router;
use crate::state::AppState;

async fn root() -> &'static str {
    "Hello World!"
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root))
        .merge(init_auth_router())
        .merge(init_users_router(&state))
        .merge(init_bookings_router(&state))
        .merge(init_packages_router(&state))
        .merge(init_wishlist_router(&state))
        .merge(init_tour_guides_router(&state))
        .merge(init_reviews_router(&state))
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
