//! Local, transport, decoding and versioning errors.

use thiserror::Error;

use super::ApiError;

/// Errors raised by a generated client before, during or after a request.
///
/// Every variant carries the name of the generated operation (`"Read"`,
/// `"AddHostSets"`, ...) so messages point at the failing call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required identifier argument was empty. No request was sent.
    #[error("empty {argument} value passed into {operation} request")]
    EmptyArgument {
        /// Generated operation name.
        operation: &'static str,
        /// Name of the empty argument.
        argument: &'static str,
    },

    /// The request path could not be joined onto the base URL.
    #[error("error creating {operation} request for path '{path}': {source}")]
    InvalidUrl {
        operation: &'static str,
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Sending the request or reading the response failed.
    #[error("error performing client request during {operation} call: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected shape.
    #[error("error decoding {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Non-success status whose body is not a well-formed [`ApiError`].
    #[error("{operation} request failed with HTTP {status}: {body}")]
    HttpStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// Version zero without automatic versioning. No request was sent.
    #[error(
        "zero version number passed into {operation} request and automatic versioning not specified"
    )]
    VersionRequired {
        /// Generated operation name.
        operation: &'static str,
    },

    /// The automatic-versioning read failed.
    #[error("error performing initial check-and-set read for {operation}: {source}")]
    CheckAndSetRead {
        operation: &'static str,
        #[source]
        source: Box<ClientError>,
    },

    /// The automatic-versioning read returned an application error.
    #[error("error from controller when performing initial check-and-set read for {operation}: {error}")]
    CheckAndSetApi {
        operation: &'static str,
        error: ApiError,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// Shorthand used by generated precondition checks.
    pub fn empty_argument(operation: &'static str, argument: &'static str) -> Self {
        Self::EmptyArgument {
            operation,
            argument,
        }
    }

    /// Name of the generated operation that failed, if known.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::EmptyArgument { operation, .. }
            | Self::InvalidUrl { operation, .. }
            | Self::Request { operation, .. }
            | Self::Decode { operation, .. }
            | Self::HttpStatus { operation, .. }
            | Self::VersionRequired { operation }
            | Self::CheckAndSetRead { operation, .. }
            | Self::CheckAndSetApi { operation, .. } => Some(operation),
            Self::Build(_) => None,
        }
    }

    /// Returns `true` for failures detected before any network action.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::EmptyArgument { .. } | Self::VersionRequired { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_argument_message_names_operation_and_argument() {
        let err = ClientError::empty_argument("Read", "target_id");
        assert_eq!(
            err.to_string(),
            "empty target_id value passed into Read request"
        );
        assert!(err.is_precondition());
    }

    #[test]
    fn version_required_is_distinct_from_empty_argument() {
        let err = ClientError::VersionRequired {
            operation: "Update",
        };
        assert!(matches!(err, ClientError::VersionRequired { .. }));
        assert!(err.to_string().contains("automatic versioning not specified"));
        assert_eq!(err.operation(), Some("Update"));
    }

    #[test]
    fn check_and_set_read_keeps_source() {
        let inner = ClientError::HttpStatus {
            operation: "Read",
            status: 502,
            body: "bad gateway".to_string(),
        };
        let err = ClientError::CheckAndSetRead {
            operation: "Update",
            source: Box::new(inner),
        };
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Read request failed with HTTP 502: bad gateway")
        );
        assert!(!err.is_precondition());
    }
}
