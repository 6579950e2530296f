use anyhow::anyhow;
use uuid::Uuid;

use crate::errors::AppError;

/// Parses a document identifier taken from a path segment.
pub fn parse_document_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::bad_request(anyhow!("Invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_valid_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_document_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = parse_document_id("65a1f0c2e4b0a1b2c3d4e5f6").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid id: 65a1f0c2e4b0a1b2c3d4e5f6");
    }
}
