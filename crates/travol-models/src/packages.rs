use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use travol_db::Fields;
use utoipa::ToSchema;
use validator::Validate;

use crate::{IntoFields, to_fields};

/// Body of `POST /packages`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageDto {
    #[validate(length(min = 1, message = "tripTitle must not be empty"))]
    pub trip_title: String,
    #[validate(length(min = 1, message = "tourType must not be empty"))]
    pub tour_type: String,
    #[validate(custom(function = "crate::non_negative_price"))]
    #[schema(value_type = f64)]
    pub price: Number,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IntoFields for CreatePackageDto {
    fn into_fields(self) -> Fields {
        to_fields(&self, &["_id"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_keeps_gallery_and_plan() {
        let dto: CreatePackageDto = serde_json::from_value(json!({
            "tripTitle": "Sundarbans Explorer",
            "tourType": "Wildlife",
            "price": 250,
            "gallery": ["a.jpg", "b.jpg"],
            "tourPlan": [{"day": 1, "title": "Khulna"}]
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let fields = dto.into_fields();
        assert_eq!(fields["tripTitle"], "Sundarbans Explorer");
        assert_eq!(fields["price"], json!(250));
        assert!(fields["price"].is_u64());
        assert_eq!(fields["gallery"], json!(["a.jpg", "b.jpg"]));
        assert_eq!(fields["tourPlan"][0]["title"], "Khulna");
    }

    #[test]
    fn test_package_rejects_negative_price() {
        let dto: CreatePackageDto = serde_json::from_value(json!({
            "tripTitle": "Cox's Bazar",
            "tourType": "Beach",
            "price": -1
        }))
        .unwrap();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_package_rejects_empty_title() {
        let dto: CreatePackageDto = serde_json::from_value(json!({
            "tripTitle": "",
            "tourType": "Beach",
            "price": 10
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
