use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use travol_auth::{RequestIdentity, verify_token};
use travol_config::JwtConfig;
use travol_core::AppError;

use crate::state::AppState;

/// Verifies the bearer token in `headers`.
///
/// A missing header is `Unauthenticated`; any other failure, including a
/// header that is not `Bearer <token>`, is `InvalidToken`.
pub fn bearer_identity(
    headers: &HeaderMap,
    jwt_config: &JwtConfig,
) -> Result<RequestIdentity, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        debug!("Request without authorization header");
        return Err(AppError::unauthenticated());
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            warn!("Malformed authorization header");
            AppError::invalid_token()
        })?;

    verify_token(token, jwt_config).map_err(|e| {
        warn!(error = %e, "Token verification failed");
        AppError::invalid_token()
    })
}

/// Route middleware that requires a valid bearer token and attaches the
/// caller's [`RequestIdentity`] to the request.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match bearer_identity(req.headers(), &state.jwt_config) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}

/// Extractor for the authenticated caller.
///
/// Uses the identity stored by [`authenticate`] and falls back to verifying
/// the header itself on routes without that middleware.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestIdentity);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Allows access only to the caller's own records.
    pub fn ensure_self(&self, email: &str) -> Result<(), AppError> {
        if self.email() != email {
            warn!(caller = %self.email(), requested = %email, "Identity mismatch");
            return Err(AppError::forbidden());
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<RequestIdentity>() {
            return Ok(AuthUser(identity.clone()));
        }

        bearer_identity(&parts.headers, &state.jwt_config).map(AuthUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use travol_auth::create_access_token;

    fn config() -> JwtConfig {
        JwtConfig::new("test-secret")
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header_is_unauthenticated() {
        let err = bearer_identity(&HeaderMap::new(), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "forbidden request");
    }

    #[test]
    fn test_valid_bearer_token() {
        let token = create_access_token("t@example.com", &config()).unwrap();
        let identity = bearer_identity(&headers(&format!("Bearer {}", token)), &config()).unwrap();
        assert_eq!(identity.email, "t@example.com");
    }

    #[test]
    fn test_non_bearer_scheme_is_invalid_token() {
        let token = create_access_token("t@example.com", &config()).unwrap();
        let err = bearer_identity(&headers(&format!("Token {}", token)), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.message(), "Invalid token");
    }

    #[test]
    fn test_empty_bearer_is_invalid_token() {
        let err = bearer_identity(&headers("Bearer "), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_foreign_secret_is_invalid_token() {
        let token = create_access_token("t@example.com", &JwtConfig::new("other")).unwrap();
        let err = bearer_identity(&headers(&format!("Bearer {}", token)), &config()).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_ensure_self() {
        let user = AuthUser(RequestIdentity {
            email: "t@example.com".to_string(),
        });
        assert!(user.ensure_self("t@example.com").is_ok());

        let err = user.ensure_self("other@example.com").unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "forbidden access");
    }
}
