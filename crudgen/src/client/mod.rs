//! HTTP transport shared by generated resource clients.

mod executor;
mod response;

pub use executor::{ApiClient, ApiClientBuilder};
pub use response::{DeleteResponse, ListResponse, Response};
