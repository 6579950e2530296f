//! # Travol Config
//!
//! Configuration types for the Travol API, loaded from environment variables.
//!
//! - [`database`]: Document store connection settings
//! - [`jwt`]: Token signing secret and lifetime
//! - [`server`]: Listening address
//! - [`cors`]: Allowed origins
//! - [`booking`]: Booking status transition policy
//!
//! Every type offers `from_env()` plus `from_lookup()`, which takes the
//! variable source as a closure so parsing can be exercised without touching
//! the process environment.
//!
//! # Example
//!
//! ```ignore
//! use travol_config::{DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env()?;
//! let jwt_config = JwtConfig::from_env();
//! let server = ServerConfig::from_env()?;
//! ```

pub mod booking;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use booking::BookingPolicy;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Reads `key` and parses it, falling back to `default` when unset.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value })
        }
        _ => Ok(default),
    }
}
