//! Runtime support for clients generated by `crudgen-gen`.
//!
//! Generated resource modules depend on this crate only; every path they use
//! is spelled through it (`crudgen::ApiClient`, `crudgen::serde`, ...), so a
//! consumer crate needs no other direct dependency to compile them.
//!
//! ## Result shape
//!
//! Every generated call returns a [`CallResult`]:
//!
//! ```text
//! Err(ClientError)   precondition, transport, decoding or versioning failure
//! Ok(Err(ApiError))  the endpoint answered with an error payload
//! Ok(Ok(value))      success
//! ```
//!
//! ## Examples
//!
//! ```
//! use crudgen::{get_opts, CallOption};
//!
//! let with_name = CallOption::new(|o| o.set_post("name", "db"));
//! let opts = get_opts(&[with_name, CallOption::automatic_versioning(true)]);
//!
//! assert_eq!(opts.post_map()["name"], "db");
//! assert!(opts.automatic_versioning());
//! ```

pub mod client;
pub mod error;
pub mod options;
pub mod path;
pub mod versioning;

pub use client::{ApiClient, ApiClientBuilder, DeleteResponse, ListResponse, Response};
pub use error::{ApiError, ClientError};
pub use options::{get_opts, CallOption, Options};
pub use path::path_segment;
pub use versioning::{resolve_version, Versioned};

pub use reqwest::Method;
pub use serde;
pub use serde_json;
pub use url::Url;

/// Two-channel result of a generated call.
pub type CallResult<T> = Result<Result<T, ApiError>, ClientError>;
