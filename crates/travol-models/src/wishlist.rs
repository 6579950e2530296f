use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use travol_db::Fields;
use utoipa::ToSchema;
use validator::Validate;

use crate::{IntoFields, to_fields};

/// Body of `POST /addToWishlist`.
///
/// Entries usually carry a copy of the package they point to, so besides the
/// owner email everything is stored as sent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistEntryDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IntoFields for CreateWishlistEntryDto {
    fn into_fields(self) -> Fields {
        to_fields(&self, &["_id"])
    }
}
