//! Role guards.
//!
//! Roles are not carried in tokens. Each guarded request loads the caller's
//! user document and compares its `role` field, so promotions apply to the
//! very next request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use travol_auth::RequestIdentity;
use travol_core::AppError;
use travol_db::Document;
use travol_models::UserRole;

use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Permits `user` only when it exists and holds exactly `required`.
pub fn check_role(user: Option<&Document>, required: UserRole) -> Result<(), AppError> {
    match user.and_then(UserRole::of) {
        Some(role) if role == required => Ok(()),
        _ => Err(AppError::forbidden()),
    }
}

/// Loads the caller's user document and checks it against `required`.
///
/// Expects [`crate::middleware::auth::authenticate`] to have run first; a
/// request without an identity is treated as unauthenticated.
pub async fn require_role(
    state: &AppState,
    req: Request,
    next: Next,
    required: UserRole,
) -> Result<Response, AppError> {
    let identity = req
        .extensions()
        .get::<RequestIdentity>()
        .cloned()
        .ok_or_else(AppError::unauthenticated)?;

    let user = UserService::find_by_email(state.store.as_ref(), &identity.email).await?;

    check_role(user.as_ref(), required).inspect_err(|_| {
        warn!(email = %identity.email, required = %required, "Role check failed");
    })?;

    Ok(next.run(req).await)
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(&state, req, next, UserRole::Admin).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

pub async fn require_tour_guide(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_role(&state, req, next, UserRole::TourGuide).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
