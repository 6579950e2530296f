use std::{env, fmt, str::FromStr};

use crate::ConfigError;

/// Which booking status transitions the accept/reject operations allow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingPolicy {
    /// Any status may be overwritten by accept or reject.
    #[default]
    Unrestricted,
    /// Only Pending bookings may move to Approved or Rejected.
    PendingOnly,
}

impl BookingPolicy {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("BOOKING_TRANSITIONS") {
            Some(value) if !value.trim().is_empty() => {
                value.parse().map_err(|_| ConfigError::Invalid {
                    key: "BOOKING_TRANSITIONS",
                    value,
                })
            }
            _ => Ok(Self::default()),
        }
    }
}

impl FromStr for BookingPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unrestricted" => Ok(Self::Unrestricted),
            "pending_only" | "pending-only" => Ok(Self::PendingOnly),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BookingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => f.write_str("unrestricted"),
            Self::PendingOnly => f.write_str("pending_only"),
        }
    }
}
