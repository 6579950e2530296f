use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse, parse_document_id};
use travol_db::{Document, InsertOneResult};
use travol_models::CreateTourGuideDto;

use crate::modules::tour_guides::service::TourGuideService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/tourGuide",
    responses(
        (status = 200, description = "All tour guide profiles", body = Vec<Document>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tour Guides"
)]
#[instrument(skip(state))]
pub async fn get_tour_guides(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let guides = TourGuideService::get_tour_guides(state.store.as_ref()).await?;
    Ok(Json(guides))
}

#[utoipa::path(
    get,
    path = "/tourGuide/{id}",
    params(
        ("id" = String, Path, description = "Tour guide document id")
    ),
    responses(
        (status = 200, description = "The profile, or null when absent", body = Option<Document>),
        (status = 400, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "Tour Guides"
)]
#[instrument(skip(state))]
pub async fn get_tour_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let id = parse_document_id(&id)?;
    let guide = TourGuideService::get_tour_guide(state.store.as_ref(), id).await?;
    Ok(Json(guide))
}

/// Look up a tour guide by name
#[utoipa::path(
    get,
    path = "/tourGuide/new/{name}",
    params(
        ("name" = String, Path, description = "Exact guide name")
    ),
    responses(
        (status = 200, description = "The profile, or null when absent", body = Option<Document>)
    ),
    tag = "Tour Guides"
)]
#[instrument(skip(state))]
pub async fn get_tour_guide_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let guide = TourGuideService::find_by_name(state.store.as_ref(), &name).await?;
    Ok(Json(guide))
}

/// Publish a tour guide profile (admin only)
#[utoipa::path(
    post,
    path = "/tourGuide",
    request_body = CreateTourGuideDto,
    responses(
        (status = 200, description = "Insert result", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Tour Guides",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_tour_guide(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTourGuideDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = TourGuideService::create_tour_guide(state.store.as_ref(), dto).await?;
    Ok(Json(result))
}
