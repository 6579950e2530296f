use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use travol_core::{AppError, ErrorResponse, parse_document_id};
use travol_db::{Document, InsertOneResult, UpdateResult};
use travol_models::{BookingStatus, CreateBookingDto};

use crate::middleware::auth::AuthUser;
use crate::modules::bookings::service::BookingService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List all bookings (admin only)
#[utoipa::path(
    get,
    path = "/booking",
    responses(
        (status = 200, description = "All bookings", body = Vec<Document>),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Bookings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_bookings(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let bookings = BookingService::get_bookings(state.store.as_ref()).await?;
    Ok(Json(bookings))
}

/// Book a tour guide
///
/// New bookings are always `Pending`.
#[utoipa::path(
    post,
    path = "/booking",
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Insert result", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Bookings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateBookingDto>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = BookingService::create_booking(state.store.as_ref(), dto).await?;
    Ok(Json(result))
}

/// List the caller's own bookings
#[utoipa::path(
    get,
    path = "/booking/{touristEmail}",
    params(
        ("touristEmail" = String, Path, description = "Caller's own email")
    ),
    responses(
        (status = 200, description = "Bookings made by the caller", body = Vec<Document>),
        (status = 401, description = "Missing token or another user's email", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Bookings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_tourist_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(tourist_email): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    auth_user.ensure_self(&tourist_email)?;
    let bookings =
        BookingService::get_bookings_for_tourist(state.store.as_ref(), &tourist_email).await?;
    Ok(Json(bookings))
}

/// List bookings addressed to a guide (tour guides only)
///
/// Scoped by role, not by identity: any tour guide may list the bookings of
/// any guide name.
#[utoipa::path(
    get,
    path = "/booking/new/{selectedGuide}",
    params(
        ("selectedGuide" = String, Path, description = "Guide name the bookings were made with")
    ),
    responses(
        (status = 200, description = "Bookings for the guide", body = Vec<Document>),
        (status = 401, description = "Missing token or not a tour guide", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Bookings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_guide_bookings(
    State(state): State<AppState>,
    Path(selected_guide): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let bookings =
        BookingService::get_bookings_for_guide(state.store.as_ref(), &selected_guide).await?;
    Ok(Json(bookings))
}

/// Accept a booking (tour guides only)
///
/// Any tour guide may decide any booking; the caller is not matched against
/// `selectedGuide`.
#[utoipa::path(
    patch,
    path = "/booking/accept/{id}",
    params(
        ("id" = String, Path, description = "Booking document id")
    ),
    responses(
        (status = 200, description = "Write result", body = UpdateResult),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing token or not a tour guide", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 409, description = "Transition not allowed by the booking policy", body = ErrorResponse)
    ),
    tag = "Bookings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn accept_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = parse_document_id(&id)?;
    let result = BookingService::set_status(
        state.store.as_ref(),
        id,
        BookingStatus::Approved,
        state.booking_policy,
    )
    .await?;
    Ok(Json(result))
}

/// Reject a booking (tour guides only)
#[utoipa::path(
    patch,
    path = "/booking/reject/{id}",
    params(
        ("id" = String, Path, description = "Booking document id")
    ),
    responses(
        (status = 200, description = "Write result", body = UpdateResult),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing token or not a tour guide", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
        (status = 409, description = "Transition not allowed by the booking policy", body = ErrorResponse)
    ),
    tag = "Bookings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn reject_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = parse_document_id(&id)?;
    let result = BookingService::set_status(
        state.store.as_ref(),
        id,
        BookingStatus::Rejected,
        state.booking_policy,
    )
    .await?;
    Ok(Json(result))
}
