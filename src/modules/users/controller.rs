use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse, parse_document_id};
use travol_db::{Document, UpdateResult};
use travol_models::{
    AdminCheckResponse, CreateUserDto, CreateUserResponse, TourGuideCheckResponse, UserRole,
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a user
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created, or already registered", body = CreateUserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let response = UserService::create_user(state.store.as_ref(), dto).await?;
    Ok(Json(response))
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<Document>),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let users = UserService::get_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

/// Check whether the caller is an admin
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(
        ("email" = String, Path, description = "Caller's own email")
    ),
    responses(
        (status = 200, description = "Admin flag", body = AdminCheckResponse),
        (status = 401, description = "Missing token or another user's email", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn check_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    auth_user.ensure_self(&email)?;
    let admin = UserService::has_role(state.store.as_ref(), &email, UserRole::Admin).await?;
    Ok(Json(AdminCheckResponse { admin }))
}

/// Check whether the caller is a tour guide
#[utoipa::path(
    get,
    path = "/users/tourGuide/{email}",
    params(
        ("email" = String, Path, description = "Caller's own email")
    ),
    responses(
        (status = 200, description = "Tour guide flag", body = TourGuideCheckResponse),
        (status = 401, description = "Missing token or another user's email", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn check_tour_guide(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<TourGuideCheckResponse>, AppError> {
    auth_user.ensure_self(&email)?;
    let tour_guide =
        UserService::has_role(state.store.as_ref(), &email, UserRole::TourGuide).await?;
    Ok(Json(TourGuideCheckResponse { tour_guide }))
}

/// Promote a user to admin (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(
        ("id" = String, Path, description = "User document id")
    ),
    responses(
        (status = 200, description = "Write result", body = UpdateResult),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn make_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = parse_document_id(&id)?;
    let result = UserService::set_role(state.store.as_ref(), id, UserRole::Admin).await?;
    Ok(Json(result))
}

/// Promote a user to tour guide (admin only)
#[utoipa::path(
    patch,
    path = "/users/guide/{id}",
    params(
        ("id" = String, Path, description = "User document id")
    ),
    responses(
        (status = 200, description = "Write result", body = UpdateResult),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn make_tour_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = parse_document_id(&id)?;
    let result = UserService::set_role(state.store.as_ref(), id, UserRole::TourGuide).await?;
    Ok(Json(result))
}
