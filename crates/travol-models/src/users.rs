//! User registration and role types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use travol_db::{Document, Fields};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{IntoFields, to_fields};

/// Roles a user can be promoted to. A user without a role is a traveller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Tour Guide")]
    TourGuide,
}

impl UserRole {
    pub const FIELD: &'static str = "role";

    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::TourGuide => "Tour Guide",
        }
    }

    /// Role stored on a user document. Missing or unrecognised values read as no role.
    pub fn of(user: &Document) -> Option<Self> {
        user.get_str(Self::FIELD).and_then(|role| role.parse().ok())
    }

    /// The `$set` patch that assigns this role.
    pub fn as_patch(self) -> Fields {
        Fields::from([(Self::FIELD.to_string(), Value::from(self.as_str()))])
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(UserRole::Admin),
            "Tour Guide" => Ok(UserRole::TourGuide),
            _ => Err(()),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /users`.
///
/// Roles are granted only through promotion, so a `role` in the body is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "photo must be a valid URL"))]
    pub photo: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IntoFields for CreateUserDto {
    fn into_fields(self) -> Fields {
        to_fields(&self, &["_id", UserRole::FIELD])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub message: String,
    pub inserted_id: Option<Uuid>,
}

impl CreateUserResponse {
    pub fn created(id: Uuid) -> Self {
        Self {
            message: "User created successfully".to_string(),
            inserted_id: Some(id),
        }
    }

    pub fn already_exists() -> Self {
        Self {
            message: "User already exist".to_string(),
            inserted_id: None,
        }
    }
}

/// Response of `GET /users/admin/{email}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminCheckResponse {
    #[serde(rename = "Admin")]
    pub admin: bool,
}

/// Response of `GET /users/tourGuide/{email}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TourGuideCheckResponse {
    #[serde(rename = "tourGuide")]
    pub tour_guide: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_with(body: Value) -> Document {
        serde_json::from_value(json!({"_id": Uuid::new_v4()}))
            .map(|mut doc: Document| {
                if let Value::Object(map) = body {
                    doc.body.extend(map);
                }
                doc
            })
            .unwrap()
    }

    #[test]
    fn test_role_round_trip_strings() {
        assert_eq!("Admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("Tour Guide".parse::<UserRole>(), Ok(UserRole::TourGuide));
        assert!("admin".parse::<UserRole>().is_err());
        assert_eq!(
            serde_json::to_value(UserRole::TourGuide).unwrap(),
            json!("Tour Guide")
        );
    }

    #[test]
    fn test_role_of_document() {
        assert_eq!(
            UserRole::of(&user_with(json!({"role": "Admin"}))),
            Some(UserRole::Admin)
        );
        assert_eq!(UserRole::of(&user_with(json!({}))), None);
        assert_eq!(UserRole::of(&user_with(json!({"role": "Owner"}))), None);
    }

    #[test]
    fn test_role_patch() {
        let patch = UserRole::TourGuide.as_patch();
        assert_eq!(patch.get("role"), Some(&json!("Tour Guide")));
        assert_eq!(patch.len(), 1);
    }

    #[test]
    fn test_create_user_drops_role_and_id() {
        let dto: CreateUserDto = serde_json::from_value(json!({
            "email": "a@example.com",
            "name": "Ayesha",
            "role": "Admin",
            "_id": "forged",
            "phone": "+880"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let fields = dto.into_fields();
        assert_eq!(fields.get("email"), Some(&json!("a@example.com")));
        assert_eq!(fields.get("name"), Some(&json!("Ayesha")));
        assert_eq!(fields.get("phone"), Some(&json!("+880")));
        assert!(!fields.contains_key("role"));
        assert!(!fields.contains_key("_id"));
        assert!(!fields.contains_key("photo"));
    }

    #[test]
    fn test_create_user_requires_valid_email() {
        let dto: CreateUserDto = serde_json::from_value(json!({"email": "not-an-email"})).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_check_response_field_names() {
        assert_eq!(
            serde_json::to_value(AdminCheckResponse { admin: true }).unwrap(),
            json!({"Admin": true})
        );
        assert_eq!(
            serde_json::to_value(TourGuideCheckResponse { tour_guide: false }).unwrap(),
            json!({"tourGuide": false})
        );
    }

    #[test]
    fn test_create_user_response_shape() {
        assert_eq!(
            serde_json::to_value(CreateUserResponse::already_exists()).unwrap(),
            json!({"message": "User already exist", "insertedId": null})
        );
    }
}
