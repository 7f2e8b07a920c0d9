//! Encoder error types.

use std::string::FromUtf8Error;

use thiserror::Error;

/// A per-caller failure that must become an error response.
///
/// The message is delivered to the caller verbatim as the response body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The caller's input was rejected; maps to HTTP 400.
    #[error("{0}")]
    Validation(String),
    /// Anything else that went wrong for this caller; maps to HTTP 500.
    #[error("{0}")]
    Internal(String),
}

impl FormatError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Strict encoding failure, see [`crate::try_jsonize`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    #[error("Object of type {0} is not JSON serializable")]
    Unrepresentable(String),
    #[error("Out of range float values are not JSON compliant: {0}")]
    NonFinite(f64),
    #[error("int too large to convert: {0}")]
    Overflow(i128),
    #[error(transparent)]
    Failed(#[from] FormatError),
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl EncodeError {
    /// Whether the encoder swallows this error and emits the string fallback.
    pub fn is_absorbable(&self) -> bool {
        matches!(
            self,
            EncodeError::Unrepresentable(_) | EncodeError::NonFinite(_) | EncodeError::Overflow(_)
        )
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError::Serialize(err.to_string())
    }
}

impl From<FromUtf8Error> for EncodeError {
    fn from(err: FromUtf8Error) -> Self {
        EncodeError::Serialize(err.to_string())
    }
}
