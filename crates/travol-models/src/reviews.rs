use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use travol_db::Fields;
use utoipa::ToSchema;
use validator::Validate;

use crate::{IntoFields, to_fields};

/// Body of `POST /review`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "reviewerEmail must be a valid email address"))]
    pub reviewer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IntoFields for CreateReviewDto {
    fn into_fields(self) -> Fields {
        to_fields(&self, &["_id"])
    }
}
