//! Bump region over caller-supplied memory.
//!
//! # Layout
//!
//! ```text
//! [ block A | pad | block B | pad | block C |  free ...  ]
//!  ^                                         ^            ^
//!  0                                      cursor      capacity
//! ```
//!
//! Each fresh block starts at the next multiple of [`ALIGN`] by absolute
//! address, so the padding depends on where the caller's memory lives, not
//! just on the cursor. Block C ends exactly at the cursor: it is the tail,
//! the only block [`Bump::resize`] accepts. A resized block keeps its start
//! offset and the cursor moves by the size difference.

use crate::{AllocError, Allocation, Allocator};

/// Alignment of every fresh allocation, in bytes.
pub const ALIGN: usize = 8;

/// A bump allocator over a borrowed byte region.
///
/// # Invariant
///
/// `cursor <= mem.len()`. Bytes `[cursor, mem.len())` are free.
#[derive(Debug)]
pub struct Bump<'m> {
    mem: &'m mut [u8],
    cursor: usize,
}

impl<'m> Bump<'m> {
    /// Create an empty region backed by `mem`.
    pub fn new(mem: &'m mut [u8]) -> Self {
        Self { mem, cursor: 0 }
    }

    /// Total size of the backing region.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mem.len()
    }

    /// Bytes in use, padding included.
    #[inline]
    pub fn used(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.mem.len() - self.cursor
    }

    /// Reclaim the whole region. Every outstanding handle becomes invalid.
    pub fn reset(&mut self) {
        tracing::trace!(reclaimed = self.cursor, "bump: reset");
        self.cursor = 0;
    }

    /// Padding needed so a block placed at the cursor is [`ALIGN`]-aligned.
    #[inline]
    fn padding(&self) -> usize {
        let addr = self.mem.as_ptr() as usize + self.cursor;
        (ALIGN - addr % ALIGN) % ALIGN
    }

    /// Carve `size` bytes off the tail of the region.
    ///
    /// Fails with [`AllocError::ZeroSize`] for `size == 0` and with
    /// [`AllocError::OutOfMemory`] if the block plus its alignment padding
    /// does not fit. A failed request leaves the cursor unchanged.
    pub fn allocate(&mut self, size: usize) -> Result<Allocation, AllocError> {
        if size == 0 {
            return Err(refused(AllocError::ZeroSize));
        }

        let padding = self.padding();
        let remaining = self.remaining();
        match padding.checked_add(size) {
            Some(needed) if needed <= remaining => {}
            _ => {
                return Err(refused(AllocError::OutOfMemory {
                    requested: size,
                    remaining,
                }))
            }
        }

        let allocation = Allocation::new(self.cursor + padding, size);
        self.cursor = allocation.end();
        tracing::trace!(
            offset = allocation.offset(),
            len = size,
            padding,
            "bump: allocated"
        );
        Ok(allocation)
    }

    /// Grow or shrink the tail allocation in place.
    ///
    /// Only the most recent allocation (the one ending at the cursor) is
    /// eligible; any other handle is refused with [`AllocError::NotTail`]
    /// and left untouched. The caller decides whether to fall back to a
    /// fresh allocation plus copy.
    pub fn resize(
        &mut self,
        allocation: &mut Allocation,
        new_size: usize,
    ) -> Result<(), AllocError> {
        *allocation = self.resize_tail(*allocation, new_size)?;
        Ok(())
    }

    fn resize_tail(
        &mut self,
        allocation: Allocation,
        new_size: usize,
    ) -> Result<Allocation, AllocError> {
        if new_size == 0 {
            return Err(refused(AllocError::ZeroSize));
        }
        if !self.is_tail(allocation) {
            return Err(refused(AllocError::NotTail {
                offset: allocation.offset(),
            }));
        }

        let available = self.mem.len() - allocation.offset();
        if new_size > available {
            return Err(refused(AllocError::OutOfMemory {
                requested: new_size,
                remaining: available,
            }));
        }

        let resized = Allocation::new(allocation.offset(), new_size);
        self.cursor = resized.end();
        tracing::trace!(
            offset = resized.offset(),
            old_len = allocation.len(),
            new_len = new_size,
            "bump: resized in place"
        );
        Ok(resized)
    }

    /// Returns `true` if `allocation` ends exactly at the cursor.
    #[inline]
    pub fn is_tail(&self, allocation: Allocation) -> bool {
        !allocation.is_empty() && allocation.end() == self.cursor
    }

    /// Allocate a block and copy `bytes` into it.
    pub fn alloc_copy(&mut self, bytes: &[u8]) -> Result<Allocation, AllocError> {
        let allocation = self.allocate(bytes.len())?;
        self.mem[allocation.range()].copy_from_slice(bytes);
        Ok(allocation)
    }

    /// The bytes of a live allocation.
    ///
    /// Returns `None` if the handle reaches past the cursor (for instance
    /// after [`reset`](Self::reset)).
    pub fn get(&self, allocation: Allocation) -> Option<&[u8]> {
        if allocation.end() > self.cursor {
            return None;
        }
        self.mem.get(allocation.range())
    }

    /// Mutable access to the bytes of a live allocation.
    pub fn get_mut(&mut self, allocation: Allocation) -> Option<&mut [u8]> {
        if allocation.end() > self.cursor {
            return None;
        }
        self.mem.get_mut(allocation.range())
    }
}

impl Allocator for Bump<'_> {
    fn realloc(
        &mut self,
        existing: Option<Allocation>,
        new_len: usize,
    ) -> Result<Allocation, AllocError> {
        match existing {
            None => self.allocate(new_len),
            Some(allocation) => self.resize_tail(allocation, new_len),
        }
    }
}

#[cold]
fn refused(err: AllocError) -> AllocError {
    tracing::debug!(%err, "bump: request refused");
    err
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
