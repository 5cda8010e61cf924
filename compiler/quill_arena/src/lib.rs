//! Fixed-region bump allocation for the Quill front-end.
//!
//! A [`Bump`] carves allocations off the tail of a caller-supplied byte
//! region. Allocation is O(1), there is no per-allocation free, and the
//! whole region is reclaimed at once with [`Bump::reset`]. The most recent
//! allocation, and only that one, can grow or shrink in place.
//!
//! Allocations are [`Allocation`] handles (offset + length) rather than
//! references, so a region can keep handing out memory while earlier
//! blocks are still in use. Bytes are reached through [`Bump::get`] and
//! [`Bump::get_mut`].
//!
//! Failures are reported as [`AllocError`] values and never abort. Whether
//! out-of-memory is fatal, or falls through to another [`Allocator`], is
//! the caller's decision.

mod allocator;
mod bump;
mod error;

pub use allocator::{Allocation, Allocator};
pub use bump::{Bump, ALIGN};
pub use error::AllocError;
