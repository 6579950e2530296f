//! # Travol Models
//!
//! Request schemas, response bodies and domain enums for the Travol API.
//!
//! Each create schema validates the handful of fields the API relies on and
//! collects everything else into an `extra` map that is stored unchanged.
//!
//! - [`auth`]: Token request/response
//! - [`users`]: User registration, roles and role checks
//! - [`packages`]: Tour packages
//! - [`wishlist`]: Wishlist entries
//! - [`tour_guides`]: Tour guide profiles
//! - [`reviews`]: Reviews
//! - [`bookings`]: Bookings and their status
//!
//! # Example
//!
//! ```ignore
//! use travol_models::{CreatePackageDto, IntoFields};
//!
//! let fields = dto.into_fields();
//! store.insert_one(Collection::Packages, fields).await?;
//! ```

use serde::Serialize;
use serde_json::{Number, Value};
use travol_db::Fields;
use validator::ValidationError;

pub mod auth;
pub mod bookings;
pub mod packages;
pub mod reviews;
pub mod tour_guides;
pub mod users;
pub mod wishlist;

// Re-export commonly used types at crate root
pub use auth::{TokenRequest, TokenResponse};
pub use bookings::{BookingStatus, CreateBookingDto};
pub use packages::CreatePackageDto;
pub use reviews::CreateReviewDto;
pub use tour_guides::CreateTourGuideDto;
pub use users::{
    AdminCheckResponse, CreateUserDto, CreateUserResponse, TourGuideCheckResponse, UserRole,
};
pub use wishlist::CreateWishlistEntryDto;

/// Conversion of a validated request body into the fields to store.
pub trait IntoFields {
    fn into_fields(self) -> Fields;
}

/// Serializes `value` as a flat field map, dropping `reserved` keys.
pub(crate) fn to_fields<T: Serialize>(value: &T, reserved: &[&str]) -> Fields {
    let mut fields: Fields = match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map.into_iter().collect(),
        _ => Fields::new(),
    };
    for key in reserved {
        fields.remove(*key);
    }
    fields
}

/// Accepts any JSON number that is not negative. Prices are kept as
/// [`Number`] so an integer price is stored as an integer.
pub(crate) fn non_negative_price(price: &Number) -> Result<(), ValidationError> {
    if price.as_f64().is_some_and(|value| value >= 0.0) {
        Ok(())
    } else {
        Err(ValidationError::new("range").with_message("price must not be negative".into()))
    }
}
