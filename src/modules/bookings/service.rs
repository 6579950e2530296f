use anyhow::{Context, anyhow};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use travol_config::BookingPolicy;
use travol_core::AppError;
use travol_db::{Collection, Document, DocumentStore, Filter, InsertOneResult, UpdateResult};
use travol_models::{BookingStatus, CreateBookingDto, IntoFields};

/// Decides whether a booking in `current` may be moved to `target`.
///
/// `current` is `None` when the stored status is not a known value.
pub fn check_transition(
    policy: BookingPolicy,
    current: Option<BookingStatus>,
    target: BookingStatus,
) -> Result<(), AppError> {
    match (policy, current) {
        (BookingPolicy::Unrestricted, _) => Ok(()),
        (BookingPolicy::PendingOnly, Some(BookingStatus::Pending)) => Ok(()),
        (BookingPolicy::PendingOnly, Some(status)) if status == target => Ok(()),
        (BookingPolicy::PendingOnly, Some(status)) => Err(AppError::conflict(anyhow!(
            "Booking is already {}; it cannot be changed to {}",
            status,
            target
        ))),
        (BookingPolicy::PendingOnly, None) => Err(AppError::conflict(anyhow!(
            "Booking has an unknown status; it cannot be changed to {}",
            target
        ))),
    }
}

const MAX_TRANSITION_ATTEMPTS: usize = 3;

pub struct BookingService;

impl BookingService {
    #[instrument(skip(store))]
    pub async fn get_bookings(store: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
        store
            .find(Collection::Bookings, &Filter::all())
            .await
            .context("Failed to fetch bookings")
            .map_err(AppError::database)
    }

    #[instrument(skip(store, dto), fields(tourist = %dto.tourist_email, guide = %dto.selected_guide))]
    pub async fn create_booking(
        store: &dyn DocumentStore,
        dto: CreateBookingDto,
    ) -> Result<InsertOneResult, AppError> {
        let result = store
            .insert_one(Collection::Bookings, dto.into_fields())
            .await
            .context("Failed to create booking")
            .map_err(AppError::database)?;

        info!(id = %result.inserted_id, "Booking created");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn get_bookings_for_tourist(
        store: &dyn DocumentStore,
        tourist_email: &str,
    ) -> Result<Vec<Document>, AppError> {
        store
            .find(
                Collection::Bookings,
                &Filter::eq("touristEmail", tourist_email),
            )
            .await
            .context("Failed to fetch bookings")
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_bookings_for_guide(
        store: &dyn DocumentStore,
        selected_guide: &str,
    ) -> Result<Vec<Document>, AppError> {
        store
            .find(
                Collection::Bookings,
                &Filter::eq("selectedGuide", selected_guide),
            )
            .await
            .context("Failed to fetch bookings")
            .map_err(AppError::database)
    }

    /// Moves booking `id` to `target`, subject to `policy`.
    ///
    /// A missing booking reports zero counts under either policy. Under
    /// `PendingOnly` the write only lands if the status is still the one the
    /// policy was checked against; a concurrent decision is re-read and
    /// answered by the policy.
    #[instrument(skip(store))]
    pub async fn set_status(
        store: &dyn DocumentStore,
        id: Uuid,
        target: BookingStatus,
        policy: BookingPolicy,
    ) -> Result<UpdateResult, AppError> {
        if policy == BookingPolicy::Unrestricted {
            return Self::write_status(store, Filter::by_id(id), id, target).await;
        }

        for _ in 0..MAX_TRANSITION_ATTEMPTS {
            let booking = store
                .find_one(Collection::Bookings, &Filter::by_id(id))
                .await
                .context("Failed to fetch booking")
                .map_err(AppError::database)?;

            let Some(booking) = booking else {
                return Ok(UpdateResult::new(0, 0));
            };

            check_transition(policy, BookingStatus::of(&booking), target).inspect_err(|e| {
                warn!(%id, error = %e.message(), "Booking transition refused");
            })?;

            let guard = match booking.get(BookingStatus::FIELD) {
                None | Some(Value::Null) => Filter::by_id(id).and_missing(BookingStatus::FIELD),
                Some(observed) => Filter::by_id(id).and_eq(BookingStatus::FIELD, observed.clone()),
            };

            let result = Self::write_status(store, guard, id, target).await?;
            if result.matched_count > 0 {
                return Ok(result);
            }
            debug!(%id, "Booking status changed before the write; re-reading");
        }

        Err(AppError::conflict(anyhow!(
            "Booking is being updated concurrently; try again"
        )))
    }

    async fn write_status(
        store: &dyn DocumentStore,
        filter: Filter,
        id: Uuid,
        target: BookingStatus,
    ) -> Result<UpdateResult, AppError> {
        let result = store
            .update_one(Collection::Bookings, &filter, target.as_patch())
            .await
            .context("Failed to update booking status")
            .map_err(AppError::database)?;

        if result.modified_count > 0 {
            info!(%id, status = %target, "Booking status updated");
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_unrestricted_allows_everything() {
        for current in [
            Some(BookingStatus::Pending),
            Some(BookingStatus::Approved),
            Some(BookingStatus::Rejected),
            None,
        ] {
            assert!(
                check_transition(BookingPolicy::Unrestricted, current, BookingStatus::Rejected)
                    .is_ok()
            );
        }
    }

    #[test]
    fn test_pending_only_allows_leaving_pending() {
        assert!(
            check_transition(
                BookingPolicy::PendingOnly,
                Some(BookingStatus::Pending),
                BookingStatus::Approved
            )
            .is_ok()
        );
    }

    #[test]
    fn test_pending_only_allows_repeating_a_decision() {
        assert!(
            check_transition(
                BookingPolicy::PendingOnly,
                Some(BookingStatus::Approved),
                BookingStatus::Approved
            )
            .is_ok()
        );
    }

    #[test]
    fn test_pending_only_refuses_reversal() {
        let err = check_transition(
            BookingPolicy::PendingOnly,
            Some(BookingStatus::Approved),
            BookingStatus::Rejected,
        )
        .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(
            err.message(),
            "Booking is already Approved; it cannot be changed to Rejected"
        );
    }

    #[test]
    fn test_pending_only_refuses_unknown_status() {
        let err =
            check_transition(BookingPolicy::PendingOnly, None, BookingStatus::Approved).unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);
    }
}
