//! Validation error types

use std::fmt;

/// Validation error for client input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent
    Missing { field: &'static str },

    /// Field is present but blank
    Empty { field: &'static str },

    /// Value doesn't have the required shape (e.g. a numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value is outside a closed set of allowed values
    InvalidVariant { field: &'static str, value: String },

    /// Request body could not be decoded
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
