//! A growable array with the allocation split out: a raw buffer that only
//! manages the block, and a vector that manages which slots are live.
//!
//! # Examples
//!
//! ```
//! use containers::Vector;
//!
//! let mut vector = Vector::new();
//!
//! vector.push(1);
//! vector.push(2);
//! vector.push(3);
//!
//! assert_eq!(vector.len(), 3);
//! assert_eq!(vector[0], 1);
//! assert_eq!(vector.pop(), Some(3));
//! ```

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::ptr::NonNull;
use std::slice;
use std::slice::SliceIndex;

use crate::alloc::{Allocator, Global};
use crate::error::Error;

/// The allocation half: a block of `cap` slots with no idea which of them
/// hold values. All it does is acquire, move, and release storage.
struct Buffer<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    marker: PhantomData<T>,
}

impl<T, A: Allocator> Buffer<T, A> {
    // Zero sized types need no storage: capacity starts (and stays)
    // saturated and the allocator is never called for them.
    const ZST: bool = mem::size_of::<T>() == 0;

    fn new_in(alloc: A) -> Self {
        let cap = if Self::ZST { usize::MAX } else { 0 };
        Self {
            ptr: NonNull::dangling(),
            cap,
            alloc,
            marker: PhantomData,
        }
    }

    /// Moves the first `len` slots into a fresh block of `new_cap` slots.
    /// The old block is released only after the new one is populated.
    fn reallocate(&mut self, new_cap: usize, len: usize) {
        assert!(!Self::ZST, "capacity of a zero sized type never changes");
        debug_assert!(0 < new_cap && len <= new_cap);

        let new_layout = Layout::array::<T>(new_cap).expect("allocation too large");
        assert!(
            new_layout.size() <= isize::MAX as usize,
            "allocation too large"
        );

        // SAFETY: `new_cap > 0` and `T` isn't zero sized, so the layout has
        // a size.
        let new_ptr = unsafe { self.alloc.allocate(new_layout) }.cast::<T>();
        // SAFETY: The first `len` slots of the old block hold values and the
        // two blocks are disjoint.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }
        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Hands the block back to the allocator, leaving the buffer detached:
    /// dangling pointer, capacity 0.
    fn release(&mut self) {
        if Self::ZST || self.cap == 0 {
            return;
        }
        let layout = Layout::array::<T>(self.cap).expect("a held layout fits");
        // SAFETY: `ptr` came from this allocator with this layout.
        unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T, A: Allocator> Drop for Buffer<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}

/// A growable array: a live prefix of `len` values packed at the front of
/// one allocated block of `capacity` slots.
///
/// When the block fills up the vector doubles it, from a floor of two
/// slots, so capacity runs 0, 2, 4, 8, ... and pushes stay amortized O(1).
/// Storage comes from the vector's [`Allocator`], chosen at construction
/// and defaulting to [`Global`].
///
/// `Vector` dereferences to a slice, so everything slices can do (iterate,
/// sort, split, index with the panicking `[]` route) comes for free.
pub struct Vector<T, A: Allocator = Global> {
    buf: Buffer<T, A>,
    len: usize,
}

impl<T> Vector<T> {
    /// Generates a new, empty `Vector` on the global allocator. No storage
    /// is acquired until the first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let vector: Vector<i32> = Vector::new();
    /// assert!(vector.is_empty());
    /// assert_eq!(vector.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Generates an empty `Vector` with room for at least `capacity` values
    /// before it would have to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let vector: Vector<i32> = Vector::with_capacity(8);
    /// assert_eq!(vector.len(), 0);
    /// assert!(vector.capacity() >= 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Generates a new, empty `Vector` on the given allocation strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::alloc::Counting;
    /// use containers::Vector;
    ///
    /// let counting = Counting::new();
    /// let mut vector = Vector::new_in(&counting);
    ///
    /// vector.push(1);
    /// assert_eq!(counting.allocations(), 1);
    /// ```
    pub fn new_in(alloc: A) -> Self {
        Self {
            buf: Buffer::new_in(alloc),
            len: 0,
        }
    }

    /// Generates an empty `Vector` on the given allocation strategy with
    /// room for at least `capacity` values.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let mut vector = Self::new_in(alloc);
        vector.reserve(capacity);
        vector
    }

    /// How many values the vector holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many values fit before the vector has to grow.
    pub fn capacity(&self) -> usize {
        self.buf.cap
    }

    /// A reference to the vector's allocation strategy.
    pub fn allocator(&self) -> &A {
        &self.buf.alloc
    }

    /// Makes sure at least `wanted` values fit without another grow. A no-op
    /// when capacity is already there; otherwise the usual doubling applies,
    /// so asking for slightly more than the current capacity still doubles.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector: Vector<i32> = Vector::new();
    /// vector.reserve(100);
    ///
    /// assert!(vector.capacity() >= 100);
    /// ```
    pub fn reserve(&mut self, wanted: usize) {
        if wanted <= self.capacity() {
            return;
        }
        let new_cap = wanted.max(self.capacity() * 2).max(2);
        self.buf.reallocate(new_cap, self.len);
    }

    /// Adds a value at the back, growing if the block is full. The value is
    /// constructed directly in its slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector = Vector::new();
    /// vector.push(1);
    /// vector.push(2);
    ///
    /// assert_eq!(vector.len(), 2);
    /// assert_eq!(vector[1], 2);
    /// ```
    pub fn push(&mut self, value: T) {
        self.reserve(self.len + 1);
        // SAFETY: The slot at `len` is within capacity and holds no value.
        unsafe { self.buf.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Takes the back value off, or `None` when the vector is empty.
    /// Capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector: Vector<i32> = (1..=2).collect();
    ///
    /// assert_eq!(vector.pop(), Some(2));
    /// assert_eq!(vector.pop(), Some(1));
    /// assert_eq!(vector.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: The slot at the new `len` held the last value; it's out of
        // the live prefix now, so the value moves out exactly once.
        Some(unsafe { ptr::read(self.buf.ptr.as_ptr().add(self.len)) })
    }

    /// A reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Error, Vector};
    ///
    /// let vector: Vector<i32> = (1..=3).collect();
    ///
    /// assert_eq!(vector.at(0), Ok(&1));
    /// assert_eq!(
    ///     vector.at(3),
    ///     Err(Error::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// An exclusive reference to the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// A reference to the value at `index`, or `None` out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// An exclusive reference to the value at `index`, or `None` out of
    /// bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// A reference to the value at `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`][Vector::len].
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.buf.ptr.as_ptr().add(index)
    }

    /// An exclusive reference to the value at `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`][Vector::len].
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.buf.ptr.as_ptr().add(index)
    }

    /// A reference to the first value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is nothing to look at.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Error, Vector};
    ///
    /// let mut vector = Vector::new();
    /// assert_eq!(vector.front(), Err(Error::EmptyContainer));
    ///
    /// vector.push(1);
    /// assert_eq!(vector.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, Error> {
        self.get(0).ok_or(Error::EmptyContainer)
    }

    /// An exclusive reference to the first value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is nothing to look at.
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.get_mut(0).ok_or(Error::EmptyContainer)
    }

    /// A reference to the last value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is nothing to look at.
    pub fn back(&self) -> Result<&T, Error> {
        match self.len.checked_sub(1) {
            // SAFETY: `last` is less than `len`.
            Some(last) => Ok(unsafe { &*self.buf.ptr.as_ptr().add(last) }),
            None => Err(Error::EmptyContainer),
        }
    }

    /// An exclusive reference to the last value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is nothing to look at.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        match self.len.checked_sub(1) {
            // SAFETY: `last` is less than `len`.
            Some(last) => Ok(unsafe { &mut *self.buf.ptr.as_ptr().add(last) }),
            None => Err(Error::EmptyContainer),
        }
    }

    /// Slides `[index, len)` one slot right and constructs the value in the
    /// gap. Position `len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index > len`. The vector is
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector: Vector<i32> = [1, 3].into_iter().collect();
    ///
    /// vector.insert(1, 2)?;
    /// assert_eq!(vector, [1, 2, 3]);
    /// # Ok::<(), containers::Error>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve(self.len + 1);
        // SAFETY: The tail moves as raw bytes, the vacated slot is written
        // over, and nothing in between can panic, so every slot in the
        // widened prefix holds exactly one value.
        unsafe {
            let base = self.buf.ptr.as_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            base.add(index).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Moves the value at `index` out and slides `[index + 1, len)` one
    /// slot left over the gap.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`. The vector is
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector: Vector<i32> = (1..=3).collect();
    ///
    /// assert_eq!(vector.remove(1), Ok(2));
    /// assert_eq!(vector, [1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        // SAFETY: The value moves out before the tail's raw move covers its
        // slot, and `len` shrinks to match the shortened prefix.
        unsafe {
            let base = self.buf.ptr.as_ptr();
            let value = ptr::read(base.add(index));
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Drops every value but keeps the block, so refilling doesn't have to
    /// grow again.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector: Vector<i32> = (1..=3).collect();
    /// let capacity = vector.capacity();
    ///
    /// vector.clear();
    /// assert!(vector.is_empty());
    /// assert_eq!(vector.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        let live = self.len;
        // Emptied before the drops run: a panicking element drop must not
        // leave these slots reachable for a second drop.
        self.len = 0;
        // SAFETY: The first `live` slots held values the vector no longer
        // claims.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr.as_ptr(), live));
        }
    }

    /// Trades the block for one of exactly `len` slots; an empty vector
    /// gives its block back entirely. Whole blocks only, for allocators
    /// that cannot split one in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Vector;
    ///
    /// let mut vector = Vector::new();
    /// for x in 0..5 {
    ///     vector.push(x);
    /// }
    /// assert_eq!(vector.capacity(), 8);
    ///
    /// vector.shrink_to_fit();
    /// assert_eq!(vector.capacity(), 5);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if Buffer::<T, A>::ZST || self.capacity() == self.len {
            return;
        }
        if self.len == 0 {
            self.buf.release();
        } else {
            self.buf.reallocate(self.len, self.len);
        }
    }

    /// The live values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The first `len` slots hold values. For an empty vector the
        // dangling pointer is aligned, which is all an empty slice needs.
        unsafe { slice::from_raw_parts(self.buf.ptr.as_ptr(), self.len) }
    }

    /// The live values as an exclusive slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As in `as_slice`, and `&mut self` makes it exclusive.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // Values first; the buffer's own drop then releases the block.
        while self.pop().is_some() {}
    }
}

impl<T, A> Clone for Vector<T, A>
where
    T: Clone,
    A: Allocator + Clone,
{
    fn clone(&self) -> Self {
        let mut new = Self::with_capacity_in(self.len, self.buf.alloc.clone());
        for value in self.as_slice() {
            new.push(value.clone());
        }
        new
    }
}

impl<T, A> fmt::Debug for Vector<T, A>
where
    T: fmt::Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> Index<I> for Vector<T, A> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, A> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, U, A, B> PartialEq<Vector<U, B>> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Vector<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, A> PartialEq<[U]> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, A, const N: usize> PartialEq<[U; N]> for Vector<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len.saturating_add(lower));
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let vector = ManuallyDrop::new(self);
        // SAFETY: The buffer moves out exactly once; the original vector is
        // never dropped, so nothing else will release the block or the
        // values.
        let buf = unsafe { ptr::read(&vector.buf) };
        // SAFETY: The buffer rides along in the iterator, so the slots stay
        // allocated for as long as the raw walk needs them.
        let iter = unsafe { RawIter::new(buf.ptr, vector.len) };
        IntoIter { _buf: buf, iter }
    }
}

/// Walks a range of slots by raw pointer, moving values out. The zero sized
/// case fakes the distance in the address, since those pointers never move.
struct RawIter<T> {
    start: *const T,
    end: *const T,
}

impl<T> RawIter<T> {
    /// # Safety
    ///
    /// The `len` slots from `ptr` must hold values that stay allocated and
    /// untouched for this iterator's lifetime; it assumes ownership of
    /// moving them out.
    unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        let start = ptr.as_ptr();
        let end = if mem::size_of::<T>() == 0 {
            (start as usize + len) as *const T
        } else {
            start.add(len)
        };
        Self { start, end }
    }

    fn remaining(&self) -> usize {
        let distance = self.end as usize - self.start as usize;
        match mem::size_of::<T>() {
            0 => distance,
            size => distance / size,
        }
    }
}

impl<T> Iterator for RawIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start != end` means `start` is a slot this iterator still
        // owns; stepping past it moves the value out exactly once.
        unsafe {
            if mem::size_of::<T>() == 0 {
                self.start = (self.start as usize + 1) as *const T;
                Some(ptr::read(NonNull::dangling().as_ptr()))
            } else {
                let value = ptr::read(self.start);
                self.start = self.start.add(1);
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RawIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: As in `next`, from the other end.
        unsafe {
            if mem::size_of::<T>() == 0 {
                self.end = (self.end as usize - 1) as *const T;
                Some(ptr::read(NonNull::dangling().as_ptr()))
            } else {
                self.end = self.end.sub(1);
                Some(ptr::read(self.end))
            }
        }
    }
}

/// An owning iterator over a vector's values. Created by
/// [`IntoIterator::into_iter`] on a `Vector`.
pub struct IntoIter<T, A: Allocator = Global> {
    // Holds the allocation so the slots stay valid while `iter` walks them.
    // Dropping the buffer releases the block; the values are `iter`'s job.
    _buf: Buffer<T, A>,
    iter: RawIter<T>,
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.iter.remaining()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // Unyielded values still belong to the iterator.
        for _ in &mut self.iter {}
    }
}
