//! Bookings and their status lifecycle.
//!
//! A booking is created `Pending` and moved to `Approved` or `Rejected` by the
//! selected tour guide.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use travol_db::{Document, Fields};
use utoipa::ToSchema;
use validator::Validate;

use crate::{IntoFields, to_fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub const FIELD: &'static str = "status";

    pub const fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
        }
    }

    /// Status stored on a booking document. A booking without one is pending.
    ///
    /// Returns `None` for a status value that is not one of the known three.
    pub fn of(booking: &Document) -> Option<Self> {
        match booking.get(Self::FIELD) {
            None | Some(Value::Null) => Some(BookingStatus::Pending),
            Some(value) => serde_json::from_value(value.clone()).ok(),
        }
    }

    pub fn as_patch(self) -> Fields {
        Fields::from([(Self::FIELD.to_string(), Value::from(self.as_str()))])
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /booking`.
///
/// The status of a new booking is always `Pending`; a client-sent `status`
/// is discarded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    #[validate(email(message = "touristEmail must be a valid email address"))]
    pub tourist_email: String,
    #[validate(length(min = 1, message = "selectedGuide must not be empty"))]
    pub selected_guide: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::non_negative_price"))]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_date: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IntoFields for CreateBookingDto {
    fn into_fields(self) -> Fields {
        let mut fields = to_fields(&self, &["_id", BookingStatus::FIELD]);
        fields.extend(BookingStatus::Pending.as_patch());
        fields
    }
}
