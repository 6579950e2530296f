//! Access token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the configured `ACCESS_TOKEN_SECRET`.
//! They carry the caller's email and expire `access_token_expiry` seconds
//! after issue. There is no refresh flow; an expired token is replaced by
//! calling the token endpoint again.
//!
//! # Example
//!
//! ```ignore
//! use travol_auth::{create_access_token, verify_token};
//! use travol_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("traveller@example.com", &config)?;
//! let identity = verify_token(&token, &config)?;
//! assert_eq!(identity.email, "traveller@example.com");
//! ```

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use travol_config::JwtConfig;

use crate::claims::{Claims, RequestIdentity};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed: {0}")]
    Malformed(String),
}

/// Creates an access token for `email`, valid from now.
pub fn create_access_token(email: &str, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    create_token_at(email, Utc::now().timestamp() as usize, jwt_config)
}

/// Creates an access token as if it had been issued at `issued_at`.
pub fn create_token_at(
    email: &str,
    issued_at: usize,
    jwt_config: &JwtConfig,
) -> Result<String, TokenError> {
    if !jwt_config.has_secret() {
        return Err(TokenError::Signing("signing secret is not configured".to_string()));
    }

    let claims = Claims {
        email: email.to_string(),
        exp: issued_at + jwt_config.access_token_expiry as usize,
        iat: issued_at,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verifies a token's signature and expiry and returns the identity it carries.
///
/// Expiry is checked without leeway: a token is rejected as soon as the
/// current time passes `exp`.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<RequestIdentity, TokenError> {
    // An empty key would accept anything signed with an empty key.
    if !jwt_config.has_secret() {
        return Err(TokenError::InvalidSignature);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| RequestIdentity::from(data.claims))
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed(e.to_string()),
    })
}
