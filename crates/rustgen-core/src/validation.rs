//! Validation gate: local JSON well-formedness check run before any request.

use serde::de::IgnoredAny;
use thiserror::Error;

/// The source document could not be parsed as a JSON value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Parser diagnostic, including position
    pub message: String,
    /// 1-based line of the failure (0 when unknown)
    pub line: usize,
    /// 1-based column of the failure (0 when the input ended early)
    pub column: usize,
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Check that `source` is a single well-formed JSON document.
///
/// The value is discarded; only syntax is checked. An empty or
/// whitespace-only string fails like any other malformed input.
pub fn validate(source: &str) -> Result<(), ValidationError> {
    serde_json::from_str::<IgnoredAny>(source)
        .map(|_| ())
        .map_err(ValidationError::from)
}
