//! Claim and identity types carried by bearer tokens.

use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// The email is the only identity claim; roles are looked up per request
/// so that a promotion takes effect without reissuing tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the token was issued for
    pub email: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// The verified identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    pub email: String,
}

impl From<Claims> for RequestIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
        }
    }
}
