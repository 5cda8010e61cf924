//! Allocation failures.

use thiserror::Error;

/// Why an allocation or resize request was refused.
///
/// Every variant leaves the allocator unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum AllocError {
    /// Zero-sized requests are not supported.
    #[error("zero-sized allocation")]
    ZeroSize,
    /// The region cannot hold the request (alignment padding included).
    #[error("out of memory: requested {requested} bytes, {remaining} remaining")]
    OutOfMemory { requested: usize, remaining: usize },
    /// Only the most recent allocation can be resized in place.
    #[error("allocation at offset {offset} is not the most recent one")]
    NotTail { offset: usize },
}
