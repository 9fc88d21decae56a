//! Configuration errors, detected before the first tick.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A speed, duration or size that must be finite and positive is not.
    NonPositive { field: &'static str, value: f32 },
    /// A spawn range with `min < 0` or `max < min`.
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    /// A reward that would never change the score.
    ZeroReward { field: &'static str },
    /// A count that must be at least one.
    ZeroCount { field: &'static str },
    /// Malformed configuration document.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be finite and positive, got {value}")
            }
            Self::InvalidRange { field, min, max } => {
                write!(f, "{field} must satisfy 0 <= min <= max, got [{min}, {max}]")
            }
            Self::ZeroReward { field } => write!(f, "{field} must be greater than zero"),
            Self::ZeroCount { field } => write!(f, "{field} must be at least one"),
            Self::Parse(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
