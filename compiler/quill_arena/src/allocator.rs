//! The allocator seam: one `realloc` primitive and two wrappers over it.
//!
//! An implementor only provides [`Allocator::realloc`], which covers both
//! fresh allocation (`existing == None`) and resizing. [`Allocator::alloc`]
//! and [`Allocator::resize_allocation`] call it exactly once per request.

use std::ops::Range;

use crate::AllocError;

/// Handle to a block handed out by an allocator.
///
/// A handle is only meaningful to the allocator that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Allocation {
    offset: usize,
    len: usize,
}

impl Allocation {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Start of the block within its region.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: zero-sized allocations are refused.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the block.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

pub trait Allocator {
    /// Allocate `new_len` bytes, or resize `existing` to `new_len` bytes.
    ///
    /// On failure nothing changes.
    fn realloc(
        &mut self,
        existing: Option<Allocation>,
        new_len: usize,
    ) -> Result<Allocation, AllocError>;

    /// Allocate a fresh block of `len` bytes.
    fn alloc(&mut self, len: usize) -> Result<Allocation, AllocError> {
        self.realloc(None, len)
    }

    /// Resize `allocation` to `new_len` bytes, updating the handle on
    /// success.
    ///
    /// A refused resize leaves `allocation` untouched. Callers that need the
    /// bytes anyway fall back to a fresh [`alloc`](Self::alloc) plus copy.
    fn resize_allocation(
        &mut self,
        allocation: &mut Allocation,
        new_len: usize,
    ) -> Result<(), AllocError> {
        *allocation = self.realloc(Some(*allocation), new_len)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
