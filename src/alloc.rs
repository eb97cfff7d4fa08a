//! The allocation strategy behind every container in this crate.
//!
//! Containers never call the global allocator directly. They go through an
//! [`Allocator`], a strategy object handed over at construction, so storage
//! can be redirected or instrumented without touching container code. The
//! strategy only hands out and takes back raw blocks: containers construct
//! values into those blocks with [`std::ptr::write`] and destroy them with
//! [`std::ptr::read`]/[`std::ptr::drop_in_place`], keeping allocation and
//! construction as separate steps. Growth logic depends on that split: a
//! dynamic array populates a new block before the old one is released.
//!
//! # Examples
//!
//! ```
//! use containers::alloc::Counting;
//! use containers::Tree;
//!
//! let counting = Counting::new();
//! {
//!     let mut tree = Tree::new_in(&counting);
//!     tree.insert(1);
//!     tree.insert(2);
//!     assert_eq!(counting.allocations(), 2);
//! }
//! // Dropping the tree returned every block.
//! assert_eq!(counting.deallocations(), 2);
//! ```

use std::alloc::{self, handle_alloc_error, Layout};
use std::cell::Cell;
use std::ptr::NonNull;

/// A strategy for acquiring and releasing the raw blocks a container stores
/// its nodes and buffers in.
///
/// Allocation failure is not part of the interface: implementations must
/// either return a usable block or divert to [`handle_alloc_error`], so
/// callers never see a null pointer.
///
/// # Safety
///
/// Implementations must hand out pointers that are non-null, aligned for the
/// requested layout, and valid for reads and writes of `layout.size()` bytes
/// until passed back to [`deallocate`][Allocator::deallocate] on the same
/// strategy. Blocks must not be invalidated early and must not alias other
/// live blocks.
pub unsafe trait Allocator {
    /// Acquires a block of memory fitting `layout`.
    ///
    /// # Safety
    ///
    /// `layout` must have a non-zero size.
    unsafe fn allocate(&self, layout: Layout) -> NonNull<u8>;

    /// Releases a block previously returned by
    /// [`allocate`][Allocator::allocate].
    ///
    /// # Safety
    ///
    /// `ptr` must have come from `allocate` on this same strategy with this
    /// same `layout`, and must not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

// Containers usually own their strategy by value. Implementing for shared
// references lets a caller keep the strategy (and, for `Counting`, its
// tallies) alive after the container is gone.
unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    unsafe fn allocate(&self, layout: Layout) -> NonNull<u8> {
        (**self).allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).deallocate(ptr, layout)
    }
}

/// The default strategy: the process-wide allocator via
/// [`std::alloc::alloc`] and [`std::alloc::dealloc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Global;

unsafe impl Allocator for Global {
    unsafe fn allocate(&self, layout: Layout) -> NonNull<u8> {
        debug_assert!(layout.size() > 0);
        let ptr = alloc::alloc(layout);
        match NonNull::new(ptr) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::dealloc(ptr.as_ptr(), layout);
    }
}

/// A strategy that delegates to [`Global`] while tallying every call.
///
/// Useful for asserting that a container releases exactly what it acquires.
/// Pass it to a container by reference (`Tree::new_in(&counting)`) so the
/// tallies outlive the container.
///
/// # Examples
///
/// ```
/// use containers::alloc::Counting;
/// use containers::List;
///
/// let counting = Counting::new();
/// let mut list = List::new_in(&counting);
/// list.push_back("a");
/// list.push_back("b");
///
/// assert_eq!(counting.live(), 2);
/// drop(list);
/// assert_eq!(counting.live(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Counting {
    allocations: Cell<usize>,
    deallocations: Cell<usize>,
}

impl Counting {
    /// Builds a strategy with zeroed tallies.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many blocks have been handed out so far.
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    /// How many blocks have been taken back so far.
    pub fn deallocations(&self) -> usize {
        self.deallocations.get()
    }

    /// How many blocks are currently outstanding.
    pub fn live(&self) -> usize {
        self.allocations.get() - self.deallocations.get()
    }
}

unsafe impl Allocator for Counting {
    unsafe fn allocate(&self, layout: Layout) -> NonNull<u8> {
        self.allocations.set(self.allocations.get() + 1);
        Global.allocate(layout)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.deallocations.set(self.deallocations.get() + 1);
        Global.deallocate(ptr, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_round_trips_a_block() {
        let layout = Layout::new::<[u64; 4]>();
        // SAFETY: The layout has a non-zero size and the block is returned
        // with the same layout before anyone else can touch it.
        unsafe {
            let ptr = Global.allocate(layout);
            ptr.as_ptr().write_bytes(0xAB, layout.size());
            Global.deallocate(ptr, layout);
        }
    }

    #[test]
    fn counting_tracks_outstanding_blocks() {
        let counting = Counting::new();
        let layout = Layout::new::<u128>();

        // SAFETY: Non-zero layout, every block freed below with the same
        // layout on the same strategy.
        unsafe {
            let a = counting.allocate(layout);
            let b = counting.allocate(layout);
            assert_eq!(counting.allocations(), 2);
            assert_eq!(counting.live(), 2);

            counting.deallocate(a, layout);
            assert_eq!(counting.live(), 1);

            counting.deallocate(b, layout);
        }

        assert_eq!(counting.allocations(), 2);
        assert_eq!(counting.deallocations(), 2);
        assert_eq!(counting.live(), 0);
    }

    #[test]
    fn references_delegate() {
        let counting = Counting::new();
        let by_ref: &Counting = &counting;
        let layout = Layout::new::<u32>();

        // SAFETY: Same contract as above, via the reference impl.
        unsafe {
            let ptr = by_ref.allocate(layout);
            by_ref.deallocate(ptr, layout);
        }

        assert_eq!(counting.allocations(), 1);
        assert_eq!(counting.deallocations(), 1);
    }
}
