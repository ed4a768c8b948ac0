//! Optimistic-concurrency version resolution.

use std::future::Future;

use crate::error::ClientError;
use crate::CallResult;

/// Resources that carry an optimistic-concurrency version.
///
/// Implemented by every generated struct whose resource is version-enabled.
pub trait Versioned {
    fn version(&self) -> u32;
}

/// Resolves the version to submit with a mutating call.
///
/// - `version != 0` is returned as-is and `read` is never called.
/// - `version == 0` without `automatic` fails with
///   [`ClientError::VersionRequired`], before any network action.
/// - `version == 0` with `automatic` calls `read` exactly once and returns
///   the current version of the resource.
///
/// Nothing prevents another writer from bumping the version between the
/// read and the caller's write; the server rejects the write in that case.
///
/// ## Errors
///
/// - [`ClientError::VersionRequired`] as described above
/// - [`ClientError::CheckAndSetRead`] if the read fails locally
/// - [`ClientError::CheckAndSetApi`] if the read returns an [`crate::ApiError`]
pub async fn resolve_version<T, F, Fut>(
    operation: &'static str,
    version: u32,
    automatic: bool,
    read: F,
) -> Result<u32, ClientError>
where
    T: Versioned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = CallResult<T>>,
{
    if version != 0 {
        return Ok(version);
    }
    if !automatic {
        return Err(ClientError::VersionRequired { operation });
    }

    tracing::debug!(operation, "resolving version with check-and-set read");
    match read().await {
        Ok(Ok(existing)) => Ok(existing.version()),
        Ok(Err(error)) => Err(ClientError::CheckAndSetApi { operation, error }),
        Err(source) => Err(ClientError::CheckAndSetRead {
            operation,
            source: Box::new(source),
        }),
    }
}
