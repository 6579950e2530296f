use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse, parse_document_id};
use travol_db::{Document, InsertOneResult};
use travol_models::CreatePackageDto;

use crate::modules::packages::service::PackageService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List all tour packages
#[utoipa::path(
    get,
    path = "/packages",
    responses(
        (status = 200, description = "All packages", body = Vec<Document>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Packages"
)]
#[instrument(skip(state))]
pub async fn get_packages(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let packages = PackageService::get_packages(state.store.as_ref()).await?;
    Ok(Json(packages))
}

/// Get a tour package
#[utoipa::path(
    get,
    path = "/packages/{id}",
    params(
        ("id" = String, Path, description = "Package document id")
    ),
    responses(
        (status = 200, description = "The package, or null when absent", body = Option<Document>),
        (status = 400, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "Packages"
)]
#[instrument(skip(state))]
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let id = parse_document_id(&id)?;
    let package = PackageService::get_package(state.store.as_ref(), id).await?;
    Ok(Json(package))
}

/// Publish a tour package (admin only)
#[utoipa::path(
    post,
    path = "/packages",
    request_body = CreatePackageDto,
    responses(
        (status = 200, description = "Insert result", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Packages",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_package(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePackageDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = PackageService::create_package(state.store.as_ref(), dto).await?;
    Ok(Json(result))
}
