//! Error types for generated clients.
//!
//! Two independent channels, never conflated:
//! - [`ClientError`] - local failures: preconditions, transport, decoding,
//!   versioning. Returned as the outer `Err` of a [`crate::CallResult`].
//! - [`ApiError`] - a well-formed error payload returned by the remote
//!   endpoint. Returned as the inner `Err` of a [`crate::CallResult`].

mod api_error;
mod client_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
