use std::{env, fmt};

/// Default access token lifetime in seconds.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// An unset secret is kept empty; token issuing fails until one is configured.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("ACCESS_TOKEN_SECRET").unwrap_or_default(),
            access_token_expiry: lookup("ACCESS_TOKEN_EXPIRY")
                .and_then(|s| s.trim().parse().ok())
                .filter(|expiry: &i64| *expiry > 0)
                .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY),
        }
    }

    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_one_hour() {
        let config = JwtConfig::from_lookup(|key| match key {
            "ACCESS_TOKEN_SECRET" => Some("s3cret".to_string()),
            _ => None,
        });
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_token_expiry, 3600);
        assert!(config.has_secret());
    }

    #[test]
    fn test_missing_secret_is_empty() {
        let config = JwtConfig::from_lookup(|_| None);
        assert!(!config.has_secret());
    }

    #[test]
    fn test_non_positive_expiry_ignored() {
        let config = JwtConfig::from_lookup(|key| match key {
            "ACCESS_TOKEN_EXPIRY" => Some("-5".to_string()),
            _ => None,
        });
        assert_eq!(config.access_token_expiry, DEFAULT_ACCESS_TOKEN_EXPIRY);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-value");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
