use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use travol_db::Fields;
use utoipa::ToSchema;
use validator::Validate;

use crate::{IntoFields, to_fields};

/// Body of `POST /tourGuide`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTourGuideDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IntoFields for CreateTourGuideDto {
    fn into_fields(self) -> Fields {
        to_fields(&self, &["_id"])
    }
}
