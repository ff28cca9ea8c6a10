use std::collections::TryReserveError;
use thiserror::Error;

/// A required allocation could not be satisfied. The table is left exactly
/// as it was before the failing call.
#[derive(Error, Debug)]
pub enum AllocationError {
    #[error("failed to allocate a bucket array of {capacity} chains")]
    BucketArray {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("failed to copy {len} bytes of text")]
    Text {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("failed to allocate a chain node")]
    Node {
        #[source]
        source: TryReserveError,
    },
    #[error("growing a table of {capacity} buckets would overflow usize")]
    CapacityOverflow { capacity: usize },
}

/// The key targeted by `delete` is not in the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("the key '{key}' isn't loaded in the table")]
pub struct NotFoundError {
    pub key: String,
}

/// Owned copy of `s`, reporting allocation failure instead of aborting.
pub(crate) fn try_copy(s: &str) -> Result<String, AllocationError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())
        .map_err(|source| AllocationError::Text {
            len: s.len(),
            source,
        })?;
    out.push_str(s);
    Ok(out)
}
