use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse, parse_document_id};
use travol_db::{Document, InsertOneResult};
use travol_models::CreateReviewDto;

use crate::modules::reviews::service::ReviewService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/review",
    responses(
        (status = 200, description = "All reviews", body = Vec<Document>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state))]
pub async fn get_reviews(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let reviews = ReviewService::get_reviews(state.store.as_ref()).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    get,
    path = "/review/{id}",
    params(
        ("id" = String, Path, description = "Review document id")
    ),
    responses(
        (status = 200, description = "The review, or null when absent", body = Option<Document>),
        (status = 400, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state))]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let id = parse_document_id(&id)?;
    let review = ReviewService::get_review(state.store.as_ref(), id).await?;
    Ok(Json(review))
}

/// Post a review
#[utoipa::path(
    post,
    path = "/review",
    request_body = CreateReviewDto,
    responses(
        (status = 200, description = "Insert result", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Reviews",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateReviewDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = ReviewService::create_review(state.store.as_ref(), dto).await?;
    Ok(Json(result))
}
