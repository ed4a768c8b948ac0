//! Application-level error payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error payload returned by the remote endpoint.
///
/// A response with a non-success status whose body decodes into this shape
/// (with a non-empty `kind` or `message`) is surfaced as an `ApiError`
/// rather than a [`ClientError`](super::ClientError).
///
/// ## Examples
///
/// ```
/// use crudgen::ApiError;
///
/// let err: ApiError = serde_json::from_str(
///     r#"{"kind":"NotFound","message":"resource not found"}"#,
/// ).unwrap();
/// assert!(err.is_well_formed());
/// assert_eq!(err.to_string(), "NotFound (0): resource not found");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("{kind} ({status}): {message}")]
pub struct ApiError {
    /// HTTP status, filled from the response when the payload omits it.
    #[serde(default)]
    pub status: u16,
    /// Machine-readable error kind (e.g. `NotFound`, `InvalidArgument`).
    #[serde(default)]
    pub kind: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Structured details, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Returns `true` if the payload carries an error kind or message.
    pub fn is_well_formed(&self) -> bool {
        !self.kind.is_empty() || !self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_not_well_formed() {
        let err: ApiError = serde_json::from_str("{}").unwrap();
        assert!(!err.is_well_formed());
    }

    #[test]
    fn details_are_preserved() {
        let err: ApiError = serde_json::from_str(
            r#"{"status":400,"kind":"InvalidArgument","message":"bad","details":{"request_fields":[{"name":"name"}]}}"#,
        )
        .unwrap();
        assert_eq!(err.status, 400);
        assert!(err.details.is_some());
    }
}
