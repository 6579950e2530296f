use axum::{Json, extract::State};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse};
use travol_models::{TokenRequest, TokenResponse};

use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue an access token
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed token, valid for one hour", body = TokenResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Signing failed", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::issue_token(request, &state.jwt_config)?;
    Ok(Json(response))
}
