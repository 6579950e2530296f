use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse, parse_document_id};
use travol_db::{DeleteResult, Document, InsertOneResult};
use travol_models::CreateWishlistEntryDto;

use crate::middleware::auth::AuthUser;
use crate::modules::wishlist::service::WishlistService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Add a package to a wishlist
#[utoipa::path(
    post,
    path = "/addToWishlist",
    request_body = CreateWishlistEntryDto,
    responses(
        (status = 200, description = "Insert result", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Wishlist",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateWishlistEntryDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = WishlistService::add_entry(state.store.as_ref(), dto).await?;
    Ok(Json(result))
}

/// List every wishlist entry (admin only)
#[utoipa::path(
    get,
    path = "/wishlist",
    responses(
        (status = 200, description = "All wishlist entries", body = Vec<Document>),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Wishlist",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_wishlist(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let entries = WishlistService::get_entries(state.store.as_ref()).await?;
    Ok(Json(entries))
}

/// List the caller's own wishlist
#[utoipa::path(
    get,
    path = "/wishlist/{email}",
    params(
        ("email" = String, Path, description = "Caller's own email")
    ),
    responses(
        (status = 200, description = "The caller's wishlist entries", body = Vec<Document>),
        (status = 401, description = "Missing token or another user's email", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Wishlist",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_user_wishlist(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    auth_user.ensure_self(&email)?;
    let entries = WishlistService::get_entries_for(state.store.as_ref(), &email).await?;
    Ok(Json(entries))
}

/// Get a wishlist entry
#[utoipa::path(
    get,
    path = "/wishlist/new/{id}",
    params(
        ("id" = String, Path, description = "Wishlist entry document id")
    ),
    responses(
        (status = 200, description = "The entry, or null when absent", body = Option<Document>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Wishlist",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_wishlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let id = parse_document_id(&id)?;
    let entry = WishlistService::get_entry(state.store.as_ref(), id).await?;
    Ok(Json(entry))
}

/// Remove a wishlist entry
#[utoipa::path(
    delete,
    path = "/wishlist/{id}",
    params(
        ("id" = String, Path, description = "Wishlist entry document id")
    ),
    responses(
        (status = 200, description = "Delete result", body = DeleteResult),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Wishlist",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_wishlist_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let id = parse_document_id(&id)?;
    let result = WishlistService::delete_entry(state.store.as_ref(), id).await?;
    Ok(Json(result))
}
