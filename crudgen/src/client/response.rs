//! Raw responses and their conversion into call results.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ClientError};
use crate::CallResult;

/// Envelope returned by List endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// Body returned by Delete endpoints that report existence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub existed: bool,
}

/// Status and body of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: Bytes,
}

impl Response {
    pub(crate) fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decodes a successful body as `T`, or splits out the error channel.
    ///
    /// - 2xx: body decoded as `T` (`Decode` on mismatch)
    /// - otherwise, a well-formed [`ApiError`] body: `Ok(Err(api_error))`
    /// - otherwise: [`ClientError::HttpStatus`] with the raw body
    pub fn into_result<T: DeserializeOwned>(self, operation: &'static str) -> CallResult<T> {
        if !self.is_success() {
            return self.into_api_error(operation).map(Err);
        }
        serde_json::from_slice(&self.body)
            .map(Ok)
            .map_err(|source| ClientError::Decode { operation, source })
    }

    /// Decodes a List envelope, yielding its items.
    pub fn into_items<T: DeserializeOwned>(self, operation: &'static str) -> CallResult<Vec<T>> {
        if self.is_success() && self.body.is_empty() {
            return Ok(Ok(Vec::new()));
        }
        Ok(self
            .into_result::<ListResponse<T>>(operation)?
            .map(|list| list.items))
    }

    /// Interprets a Delete response.
    ///
    /// An empty successful body (typically `204 No Content`) means the
    /// resource existed and is gone.
    pub fn into_existed(self, operation: &'static str) -> CallResult<bool> {
        if self.is_success() && self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Ok(true));
        }
        Ok(self
            .into_result::<DeleteResponse>(operation)?
            .map(|deleted| deleted.existed))
    }

    fn into_api_error(self, operation: &'static str) -> Result<ApiError, ClientError> {
        match serde_json::from_slice::<ApiError>(&self.body) {
            Ok(mut err) if err.is_well_formed() => {
                if err.status == 0 {
                    err.status = self.status;
                }
                Ok(err)
            }
            _ => Err(ClientError::HttpStatus {
                operation,
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            }),
        }
    }
}
