use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// Body of `POST /jwt`.
///
/// Only the email is signed into the token; other fields are accepted for
/// compatibility with clients that post their whole profile.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_request_accepts_profile_fields() {
        let request: TokenRequest =
            serde_json::from_value(json!({"email": "a@example.com", "name": "Ayesha"})).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.extra["name"], "Ayesha");
    }

    #[test]
    fn test_token_request_rejects_bad_email() {
        let request: TokenRequest = serde_json::from_value(json!({"email": "nope"})).unwrap();
        assert!(request.validate().is_err());
    }
}
