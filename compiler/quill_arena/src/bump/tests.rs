use super::*;
use pretty_assertions::assert_eq;

/// Backing memory with a known 8-byte-aligned base, so padding is
/// predictable.
#[repr(C, align(8))]
struct Region<const N: usize>([u8; N]);

impl<const N: usize> Region<N> {
    fn new() -> Self {
        Region([0; N])
    }
}

// === Construction ===

#[test]
fn new_region_is_empty() {
    let mut region = Region::<64>::new();
    let bump = Bump::new(&mut region.0);
    assert_eq!(bump.capacity(), 64);
    assert_eq!(bump.used(), 0);
    assert_eq!(bump.remaining(), 64);
}

// === allocate ===

#[test]
fn first_allocation_starts_at_zero() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    let a = bump.allocate(5).unwrap();
    assert_eq!(a.offset(), 0);
    assert_eq!(a.len(), 5);
    assert_eq!(bump.used(), 5);
}

#[test]
fn next_allocation_is_padded_to_eight() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    bump.allocate(5).unwrap();
    let b = bump.allocate(3).unwrap();
    assert_eq!(b.offset(), 8);
    assert_eq!(bump.used(), 11);
}

#[test]
fn padding_follows_the_absolute_address() {
    let mut region = Region::<64>::new();
    // Base address is 1 past an 8-byte boundary.
    let mut bump = Bump::new(&mut region.0[1..]);
    let a = bump.allocate(4).unwrap();
    assert_eq!(a.offset(), 7);
    let ptr = bump.get(a).unwrap().as_ptr() as usize;
    assert_eq!(ptr % ALIGN, 0);
}

#[test]
fn zero_sized_allocation_fails() {
    let mut region = Region::<16>::new();
    let mut bump = Bump::new(&mut region.0);
    assert_eq!(bump.allocate(0), Err(AllocError::ZeroSize));
    assert_eq!(bump.used(), 0);
}

#[test]
fn over_capacity_request_fails_and_keeps_cursor() {
    let mut region = Region::<32>::new();
    let mut bump = Bump::new(&mut region.0);
    bump.allocate(24).unwrap();
    let before = bump.used();

    assert_eq!(
        bump.allocate(16),
        Err(AllocError::OutOfMemory {
            requested: 16,
            remaining: 8,
        })
    );
    assert_eq!(bump.used(), before);

    let next = bump.allocate(8).unwrap();
    assert_eq!(next.offset(), before);
}

#[test]
fn padding_counts_against_capacity() {
    let mut region = Region::<16>::new();
    let mut bump = Bump::new(&mut region.0);
    bump.allocate(1).unwrap();
    // 7 bytes of padding + 9 bytes does not fit in the 15 that remain.
    assert!(matches!(
        bump.allocate(9),
        Err(AllocError::OutOfMemory { .. })
    ));
    assert_eq!(bump.used(), 1);
    // 7 + 8 fits exactly.
    let b = bump.allocate(8).unwrap();
    assert_eq!(b.offset(), 8);
    assert_eq!(bump.remaining(), 0);
}

#[test]
fn huge_request_does_not_overflow() {
    let mut region = Region::<16>::new();
    let mut bump = Bump::new(&mut region.0);
    bump.allocate(1).unwrap();
    assert!(matches!(
        bump.allocate(usize::MAX),
        Err(AllocError::OutOfMemory { .. })
    ));
}

#[test]
fn empty_backing_refuses_everything() {
    let mut empty: [u8; 0] = [];
    let mut bump = Bump::new(&mut empty);
    assert!(matches!(
        bump.allocate(1),
        Err(AllocError::OutOfMemory { .. })
    ));
}

// === resize ===

#[test]
fn tail_grows_in_place_by_the_net_difference() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    let mut a = bump.allocate(8).unwrap();
    bump.resize(&mut a, 24).unwrap();
    assert_eq!(a.offset(), 0);
    assert_eq!(a.len(), 24);
    assert_eq!(bump.used(), 24);
}

#[test]
fn tail_shrinks_in_place() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    let mut a = bump.allocate(16).unwrap();
    bump.resize(&mut a, 4).unwrap();
    assert_eq!(a.len(), 4);
    assert_eq!(bump.used(), 4);
    assert_eq!(bump.allocate(4).unwrap().offset(), 8);
}

#[test]
fn resize_keeps_contents() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    let mut a = bump.alloc_copy(b"abcd").unwrap();
    bump.resize(&mut a, 8).unwrap();
    bump.get_mut(a).unwrap()[4..].copy_from_slice(b"efgh");
    assert_eq!(bump.get(a).unwrap(), b"abcdefgh");
}

#[test]
fn resizing_an_earlier_block_is_refused() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    let mut a = bump.allocate(8).unwrap();
    let b = bump.allocate(8).unwrap();
    let used = bump.used();

    assert_eq!(
        bump.resize(&mut a, 16),
        Err(AllocError::NotTail { offset: 0 })
    );
    assert_eq!(a.len(), 8);
    assert_eq!(bump.used(), used);
    assert!(bump.is_tail(b));
    assert!(!bump.is_tail(a));
}

#[test]
fn superseded_handle_is_refused() {
    let mut region = Region::<64>::new();
    let mut bump = Bump::new(&mut region.0);
    let original = bump.allocate(8).unwrap();
    let mut current = original;
    bump.resize(&mut current, 16).unwrap();

    let mut stale = original;
    assert_eq!(
        bump.resize(&mut stale, 32),
        Err(AllocError::NotTail { offset: 0 })
    );
    assert_eq!(stale, original);
}

#[test]
fn resize_past_capacity_fails_and_keeps_state() {
    let mut region = Region::<32>::new();
    let mut bump = Bump::new(&mut region.0);
    bump.allocate(8).unwrap();
    let mut b = bump.allocate(8).unwrap();

    assert_eq!(
        bump.resize(&mut b, 32),
        Err(AllocError::OutOfMemory {
            requested: 32,
            remaining: 24,
        })
    );
    assert_eq!(b.len(), 8);
    assert_eq!(bump.used(), 16);
    bump.resize(&mut b, 24).unwrap();
    assert_eq!(bump.remaining(), 0);
}

#[test]
fn resize_to_zero_fails() {
    let mut region = Region::<16>::new();
    let mut bump = Bump::new(&mut region.0);
    let mut a = bump.allocate(8).unwrap();
    assert_eq!(bump.resize(&mut a, 0), Err(AllocError::ZeroSize));
    assert_eq!(a.len(), 8);
}

// === reset, get, alloc_copy ===

#[test]
fn reset_reclaims_the_region() {
    let mut region = Region::<16>::new();
    let mut bump = Bump::new(&mut region.0);
    let a = bump.allocate(16).unwrap();
    bump.reset();
    assert_eq!(bump.used(), 0);
    assert_eq!(bump.get(a), None);
    assert_eq!(bump.allocate(16).unwrap().offset(), 0);
}

#[test]
fn alloc_copy_stores_the_bytes() {
    let mut region = Region::<32>::new();
    let mut bump = Bump::new(&mut region.0);
    let hello = bump.alloc_copy(b"hello").unwrap();
    let world = bump.alloc_copy(b"world").unwrap();
    assert_eq!(bump.get(hello).unwrap(), b"hello");
    assert_eq!(bump.get(world).unwrap(), b"world");
}

#[test]
fn alloc_copy_of_empty_slice_fails() {
    let mut region = Region::<8>::new();
    let mut bump = Bump::new(&mut region.0);
    assert_eq!(bump.alloc_copy(b""), Err(AllocError::ZeroSize));
}

#[test]
fn get_mut_writes_through_to_backing_memory() {
    let mut region = Region::<8>::new();
    {
        let mut bump = Bump::new(&mut region.0);
        let a = bump.allocate(2).unwrap();
        bump.get_mut(a).unwrap().copy_from_slice(&[7, 9]);
    }
    assert_eq!(&region.0[..2], &[7u8, 9]);
}

// === Allocator impl ===

#[test]
fn allocator_trait_routes_to_the_region() {
    fn grow_twice<A: Allocator>(allocator: &mut A) -> Allocation {
        let mut block = allocator.alloc(4).unwrap();
        allocator.resize_allocation(&mut block, 8).unwrap();
        allocator.resize_allocation(&mut block, 12).unwrap();
        block
    }

    let mut region = Region::<32>::new();
    let mut bump = Bump::new(&mut region.0);
    let block = grow_twice(&mut bump);
    assert_eq!(block.len(), 12);
    assert_eq!(bump.used(), 12);
}

// === Property Tests ===

mod proptest_bump {
    use super::Region;
    use crate::{AllocError, Allocation, Bump, ALIGN};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn blocks_are_aligned_disjoint_and_in_bounds(
            sizes in proptest::collection::vec(0usize..48, 0..32),
        ) {
            let mut region = Region::<256>::new();
            let mut bump = Bump::new(&mut region.0);
            let mut blocks: Vec<Allocation> = Vec::new();
            for size in sizes {
                let before = bump.used();
                match bump.allocate(size) {
                    Ok(block) => {
                        prop_assert_eq!(block.offset() % ALIGN, 0);
                        prop_assert!(block.offset() >= before);
                        prop_assert_eq!(bump.used(), block.end());
                        prop_assert!(block.end() <= bump.capacity());
                        if let Some(last) = blocks.last() {
                            prop_assert!(last.end() <= block.offset());
                        }
                        blocks.push(block);
                    }
                    Err(AllocError::ZeroSize) => {
                        prop_assert_eq!(size, 0);
                    }
                    Err(_) => {
                        prop_assert_eq!(bump.used(), before);
                    }
                }
            }
        }

        #[test]
        fn resize_moves_cursor_by_net_difference(
            first in 1usize..64,
            second in 1usize..64,
        ) {
            let mut region = Region::<128>::new();
            let mut bump = Bump::new(&mut region.0);
            let mut block = bump.allocate(first).unwrap();
            let after_alloc = bump.used();
            bump.resize(&mut block, second).unwrap();
            prop_assert_eq!(block.len(), second);
            prop_assert_eq!(bump.used() + first, after_alloc + second);
        }
    }
}
