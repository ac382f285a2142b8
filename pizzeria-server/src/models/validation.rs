//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent (or null)
    Missing { field: &'static str },

    /// Field is present but not an integer
    InvalidType { field: &'static str },

    /// Integer field falls outside its allowed range
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Body is valid JSON but not an object
    NotAnObject,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidType { field } => write!(f, "{} must be an integer", field),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} must be between {} and {}, got {}", field, min, max, value),
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
        }
    }
}

impl std::error::Error for ValidationError {}
