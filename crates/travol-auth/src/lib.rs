//! # Travol Auth
//!
//! Bearer token types and the token service for the Travol API.
//!
//! - [`claims`]: JWT claims and the per-request identity derived from them
//! - [`jwt`]: Token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use travol_auth::{create_access_token, verify_token, TokenError};
//! use travol_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("guide@example.com", &config)?;
//!
//! match verify_token(&token, &config) {
//!     Ok(identity) => println!("Caller: {}", identity.email),
//!     Err(TokenError::Expired) => println!("Log in again"),
//!     Err(e) => println!("Rejected: {}", e),
//! }
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, RequestIdentity};
pub use jwt::{TokenError, create_access_token, create_token_at, verify_token};
