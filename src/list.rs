//! A doubly linked list on raw node pointers, cheap at both ends.
//!
//! The forward `next` chain owns the nodes; `prev` links are back references
//! only, so every node has exactly one owner and teardown is a pop loop.
//!
//! # Examples
//!
//! ```
//! use containers::List;
//!
//! let mut list = List::new();
//!
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.pop_back(), Some(3));
//! assert_eq!(list.pop_back(), Some(2));
//! assert_eq!(list.pop_back(), None);
//! ```

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr;
use std::ptr::NonNull;

use crate::alloc::{Allocator, Global};
use crate::error::Error;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
    prev: Link<T>,
}

/// A doubly linked list with O(1) pushes and pops at either end.
///
/// The chain invariant: following `next` from `head` reaches `tail` in
/// exactly `len` steps, following `prev` from `tail` reaches `head` the
/// same way, and the outermost links on both ends are `None`.
///
/// Node storage comes from the list's [`Allocator`], chosen at construction
/// and defaulting to [`Global`].
pub struct List<T, A: Allocator = Global> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    alloc: A,
    // The raw links own their nodes; the marker keeps drop checking aware
    // that dropping the list drops `T`s.
    marker: PhantomData<T>,
}

impl<T> List<T> {
    /// Generates a new, empty `List` on the global allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: Allocator> List<T, A> {
    /// Generates a new, empty `List` on the given allocation strategy.
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
    ///
    /// assert_eq!(counting.allocations(), 1);
    /// ```
    pub fn new_in(alloc: A) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            alloc,
            marker: PhantomData,
        }
    }

    /// How many values the list holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A reference to the list's allocation strategy.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Adds a value at the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    ///
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Self::allocate_node(&self.alloc, value);
        // SAFETY: `node` is fresh and the old head, if any, is live.
        unsafe {
            (*node.as_ptr()).next = self.head;
            match self.head {
                Some(head) => (*head.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds a value at the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = Self::allocate_node(&self.alloc, value);
        // SAFETY: `node` is fresh and the old tail, if any, is live.
        unsafe {
            (*node.as_ptr()).prev = self.tail;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Takes the front value off, or `None` when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list: List<i32> = (1..=2).collect();
    ///
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is unlinked before release and the new head's back
        // reference is cleared.
        unsafe {
            self.head = (*head.as_ptr()).next;
            match self.head {
                Some(new_head) => (*new_head.as_ptr()).prev = None,
                None => self.tail = None,
            }
            self.len -= 1;
            debug_assert_eq!(self.len == 0, self.head.is_none());
            Some(Self::release_node(&self.alloc, head))
        }
    }

    /// Takes the back value off, or `None` when the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list: List<i32> = (1..=2).collect();
    ///
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` is unlinked before release and the new tail's
        // forward link is cleared.
        unsafe {
            self.tail = (*tail.as_ptr()).prev;
            match self.tail {
                Some(new_tail) => (*new_tail.as_ptr()).next = None,
                None => self.head = None,
            }
            self.len -= 1;
            debug_assert_eq!(self.len == 0, self.tail.is_none());
            Some(Self::release_node(&self.alloc, tail))
        }
    }

    /// A reference to the front value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is no front to look at.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::EmptyContainer));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, Error> {
        // SAFETY: A non-empty head link points at a live node.
        self.head
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// An exclusive reference to the front value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is no front to look at.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list: List<i32> = (1..=3).collect();
    ///
    /// *list.front_mut()? += 10;
    /// assert_eq!(list.front(), Ok(&11));
    /// # Ok::<(), containers::Error>(())
    /// ```
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        // SAFETY: As in `front`; `&mut self` makes the borrow exclusive.
        self.head
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// A reference to the back value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is no back to look at.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::EmptyContainer));
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn back(&self) -> Result<&T, Error> {
        // SAFETY: A non-empty tail link points at a live node.
        self.tail
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// An exclusive reference to the back value.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when there is no back to look at.
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        // SAFETY: As in `back`; `&mut self` makes the borrow exclusive.
        self.tail
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or(Error::EmptyContainer)
    }

    /// Stitches a value in so it ends up at the given position. Position 0
    /// is the front; position `len` appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index > len`. The list is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Error, List};
    ///
    /// let mut list: List<i32> = [1, 3].into_iter().collect();
    ///
    /// list.insert_at(1, 2)?;
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    ///
    /// assert_eq!(
    ///     list.insert_at(7, 4),
    ///     Err(Error::IndexOutOfRange { index: 7, len: 3 })
    /// );
    /// # Ok::<(), containers::Error>(())
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            self.push_front(value);
        } else if index == self.len {
            self.push_back(value);
        } else {
            let next = self.node_at(index).expect("interior index is in bounds");
            // SAFETY: An interior node has a predecessor; the new node is
            // stitched between the two before anything can observe it.
            unsafe {
                let prev = (*next.as_ptr())
                    .prev
                    .expect("interior node has a predecessor");
                let node = Self::allocate_node(&self.alloc, value);
                (*node.as_ptr()).prev = Some(prev);
                (*node.as_ptr()).next = Some(next);
                (*prev.as_ptr()).next = Some(node);
                (*next.as_ptr()).prev = Some(node);
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Unstitches and returns the value at the given position.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index >= len`. The list is
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::{Error, List};
    ///
    /// let mut list: List<i32> = (1..=3).collect();
    ///
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
    ///
    /// assert_eq!(
    ///     list.remove_at(2),
    ///     Err(Error::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            Ok(self
                .pop_front()
                .expect("a checked index means a non-empty list"))
        } else if index == self.len - 1 {
            Ok(self
                .pop_back()
                .expect("a checked index means a non-empty list"))
        } else {
            let node = self.node_at(index).expect("interior index is in bounds");
            // SAFETY: An interior node has both neighbors; they're stitched
            // to each other before the node is released.
            unsafe {
                let prev = (*node.as_ptr())
                    .prev
                    .expect("interior node has a predecessor");
                let next = (*node.as_ptr())
                    .next
                    .expect("interior node has a successor");
                (*prev.as_ptr()).next = Some(next);
                (*next.as_ptr()).prev = Some(prev);
                self.len -= 1;
                Ok(Self::release_node(&self.alloc, node))
            }
        }
    }

    /// Whether an equal value is somewhere in the list. A forward scan, so
    /// O(n).
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|stored| stored == value)
    }

    /// Reverses the list in place by swapping every node's link pair and
    /// then the ends. Reversing twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list: List<i32> = (1..=3).collect();
    /// list.reverse();
    ///
    /// let values: Vec<i32> = list.iter().copied().collect();
    /// assert_eq!(values, [3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let mut cursor = self.head;
        while let Some(node) = cursor {
            // SAFETY: The walk visits each live node once. After the swap
            // the node's `prev` holds what `next` held, so following it
            // continues down the original chain.
            unsafe {
                let node = &mut *node.as_ptr();
                mem::swap(&mut node.next, &mut node.prev);
                cursor = node.prev;
            }
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Visits every value front to back. The iterator is double ended, so
    /// `rev()` walks back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let list: List<i32> = (1..=3).collect();
    ///
    /// let forward: Vec<i32> = list.iter().copied().collect();
    /// let backward: Vec<i32> = list.iter().rev().copied().collect();
    ///
    /// assert_eq!(forward, [1, 2, 3]);
    /// assert_eq!(backward, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Visits every value front to back with exclusive access.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list: List<i32> = (1..=3).collect();
    /// for value in list.iter_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head,
            tail: self.tail,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Releases every node, leaving the list empty but reusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::List;
    ///
    /// let mut list: List<i32> = (1..=3).collect();
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        let mut cursor = self.head;
        for _ in 0..index {
            // SAFETY: `index < len`, so the walk stays on live nodes.
            cursor = unsafe { cursor.and_then(|node| (*node.as_ptr()).next) };
        }
        cursor
    }

    fn allocate_node(alloc: &A, value: T) -> NonNull<Node<T>> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: A node is never zero sized; its links see to that even
        // when `T` is a zero sized type.
        let node = unsafe { alloc.allocate(layout) }.cast::<Node<T>>();
        // SAFETY: The fresh block fits one `Node<T>` and nothing has been
        // written to it yet.
        unsafe {
            node.as_ptr().write(Node {
                value,
                next: None,
                prev: None,
            });
        }
        node
    }

    /// Frees a node's block and hands back the value it held.
    ///
    /// # Safety
    ///
    /// `node` must have come from `allocate_node` on the same allocator and
    /// must already be unlinked from its neighbors.
    unsafe fn release_node(alloc: &A, node: NonNull<Node<T>>) -> T {
        let inner = ptr::read(node.as_ptr());
        alloc.deallocate(node.cast(), Layout::new::<Node<T>>());
        inner.value
    }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator> Drop for List<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, A> Clone for List<T, A>
where
    T: Clone,
    A: Allocator + Clone,
{
    fn clone(&self) -> Self {
        let mut new = Self::new_in(self.alloc.clone());
        for value in self {
            new.push_back(value.clone());
        }
        new
    }
}

impl<T, A> fmt::Debug for List<T, A>
where
    T: fmt::Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A, B> PartialEq<List<T, B>> for List<T, A>
where
    T: PartialEq,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &List<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter { list: self }
    }
}

/// A borrowing front-to-back iterator. Created by [`List::iter`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    // How many nodes between `head` and `tail` are still unvisited. The
    // ends cross silently, so this is what says "done".
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: `len > 0` means `head` points at a live unvisited
            // node; the borrow is tied to the list borrow this iterator was
            // created from.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: As in `next`, from the other end.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

/// An exclusive front-to-back iterator. Created by [`List::iter_mut`].
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: As in `Iter::next`, and each node is handed out at
            // most once, so the exclusive borrows never overlap.
            let node = unsafe { &mut *node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: As in `next`, from the other end.
            let node = unsafe { &mut *node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &mut node.value
        })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

/// An owning iterator that drains the list front to back. Created by
/// [`IntoIterator::into_iter`] on a `List`.
pub struct IntoIter<T, A: Allocator = Global> {
    list: List<T, A>,
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.list.len
    }
}
