//! An ordered set of values on a raw-pointer Binary Search Tree.
//!
//! Every algorithm here is iterative. Lookups and mutations walk the tree
//! with a cursor, and the traversal iterators carry an explicit stack or
//! queue, so a pathological near-linear tree can be as deep as memory allows
//! without exhausting the call stack.
//!
//! # Examples
//!
//! ```
//! use containers::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again changes nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a value returns it.
//! let removed = tree.remove(&1);
//!
//! assert_eq!(removed, Some(1));
//! assert!(!tree.contains(&1));
//! ```

use std::alloc::Layout;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr;
use std::ptr::NonNull;

use crate::alloc::{Allocator, Global};

/// Where a subtree hangs: the tree's root field or a parent's child field.
type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn left(&self) -> Option<&Self> {
        // SAFETY: Child links of a live node point at live nodes owned by
        // the same tree, and the returned borrow is tied to `self` so it
        // can't outlive the tree's borrow it came from.
        self.left.map(|node| unsafe { &*node.as_ptr() })
    }

    fn right(&self) -> Option<&Self> {
        // SAFETY: As in `left`.
        self.right.map(|node| unsafe { &*node.as_ptr() })
    }
}

/// An ordered set backed by an unbalanced Binary Search Tree.
///
/// Values are kept unique and ordered by their [`Ord`] implementation. For
/// every node, all values in its left subtree compare less than its own
/// value and all values in its right subtree compare greater.
///
/// Node storage comes from the tree's [`Allocator`], chosen at construction
/// and defaulting to [`Global`].
pub struct Tree<T, A: Allocator = Global> {
    root: Link<T>,
    len: usize,
    alloc: A,
    // The raw links own their nodes; the marker keeps drop checking aware
    // that dropping the tree drops `T`s.
    marker: PhantomData<T>,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` on the global allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let tree: Tree<i32> = Tree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T, A: Allocator> Tree<T, A> {
    /// Generates a new, empty `Tree` on the given allocation strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::alloc::Counting;
    /// use containers::Tree;
    ///
    /// let counting = Counting::new();
    /// let mut tree = Tree::new_in(&counting);
    /// tree.insert(1);
    ///
    /// assert_eq!(counting.allocations(), 1);
    /// ```
    pub fn new_in(alloc: A) -> Self {
        Self {
            root: None,
            len: 0,
            alloc,
            marker: PhantomData,
        }
    }

    /// How many values the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A reference to the tree's allocation strategy.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Inserts the given value. If an equal value is already present the
    /// tree is left untouched and the incoming value is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    ///
    /// // A duplicate is suppressed.
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        // Walk before allocating: a duplicate must not cost a node.
        let mut cursor = &mut self.root;
        while let Some(current) = *cursor {
            // SAFETY: The tree owns `current` and `&mut self` rules out any
            // other live reference into it.
            let current = unsafe { &mut *current.as_ptr() };
            match value.cmp(&current.value) {
                Ordering::Less => cursor = &mut current.left,
                Ordering::Equal => return,
                Ordering::Greater => cursor = &mut current.right,
            }
        }
        *cursor = Some(Self::allocate_node(&self.alloc, value));
        self.len += 1;
    }

    /// Whether an equal value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Potentially finds the stored value equal to the given one. Handy when
    /// equality is coarser than identity and the stored copy is the one that
    /// matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("stored".to_string());
    ///
    /// assert_eq!(tree.get(&"stored".to_string()), Some(&"stored".to_string()));
    /// assert_eq!(tree.get(&"missing".to_string()), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self.root()?;
        loop {
            match value.cmp(&node.value) {
                Ordering::Less => node = node.left()?,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node = node.right()?,
            }
        }
    }

    /// The smallest value in the tree, or `None` when it's empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.min(), None);
    ///
    /// tree.extend([9, 6, 17]);
    /// assert_eq!(tree.min(), Some(&6));
    /// ```
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree, or `None` when it's empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.extend([9, 6, 17]);
    /// assert_eq!(tree.max(), Some(&17));
    /// ```
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes the value equal to the given one and returns it. Removing an
    /// absent value is a no-op returning `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        // Walk to the link holding the target. Rewriting that link covers
        // the root exactly like any other slot.
        let mut slot: *mut Link<T> = &mut self.root;
        let target = loop {
            // SAFETY: `slot` points at the root link or at a child link of a
            // live node, and `&mut self` keeps all of them exclusively ours.
            let Some(node) = (unsafe { *slot }) else {
                return None;
            };
            // SAFETY: The tree owns `node`; nothing else borrows it.
            match value.cmp(unsafe { &(*node.as_ptr()).value }) {
                Ordering::Less => slot = unsafe { &mut (*node.as_ptr()).left },
                Ordering::Equal => break node,
                Ordering::Greater => slot = unsafe { &mut (*node.as_ptr()).right },
            }
        };

        // SAFETY: `target` is live; this copies its child links out.
        let (left, right) = unsafe { ((*target.as_ptr()).left, (*target.as_ptr()).right) };
        let removed = match (left, right) {
            // A leaf: the slot just empties.
            (None, None) => {
                // SAFETY: After the slot is cleared nothing references
                // `target`, so it can be released.
                unsafe {
                    *slot = None;
                    Self::release_node(&self.alloc, target)
                }
            }
            // One child: splice it into the target's place.
            (Some(child), None) | (None, Some(child)) => {
                // SAFETY: As above; the child is re-linked before the
                // target is released.
                unsafe {
                    *slot = Some(child);
                    Self::release_node(&self.alloc, target)
                }
            }
            // Two children: the in-order successor (leftmost node of the
            // right subtree) gives up its value to the target's node and is
            // released itself. Its right subtree moves up to its parent, so
            // every other value stays reachable.
            (Some(_), Some(right_child)) => {
                let mut succ = right_child;
                let mut succ_slot: *mut Link<T> = unsafe { &mut (*target.as_ptr()).right };
                // SAFETY: The walk only follows live left links under
                // `&mut self`.
                unsafe {
                    while let Some(left) = (*succ.as_ptr()).left {
                        succ_slot = &mut (*succ.as_ptr()).left;
                        succ = left;
                    }
                }
                // SAFETY: The successor has no left child, so its parent
                // inherits its right subtree and nothing references the
                // successor afterwards. `target` stays in place; only its
                // value is swapped out.
                unsafe {
                    *succ_slot = (*succ.as_ptr()).right;
                    let succ_value = Self::release_node(&self.alloc, succ);
                    mem::replace(&mut (*target.as_ptr()).value, succ_value)
                }
            }
        };
        self.len -= 1;
        debug_assert_eq!(self.root.is_some(), self.len > 0);
        Some(removed)
    }

    /// How many node levels the tree has: 0 when empty, 1 for a single
    /// node. Counted breadth-first, one full frontier per level.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut frontier = Vec::new();
        let mut next_level = Vec::new();
        frontier.extend(self.root());

        let mut height = 0;
        while !frontier.is_empty() {
            height += 1;
            for node in frontier.drain(..) {
                next_level.extend(node.left());
                next_level.extend(node.right());
            }
            mem::swap(&mut frontier, &mut next_level);
        }
        height
    }

    /// Whether every node's left and right subtree heights differ by at most
    /// one. A single violation anywhere makes the whole answer `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut balanced = Tree::new();
    /// balanced.extend([9, 6, 17, 3, 8, 20]);
    /// assert!(balanced.is_balanced());
    ///
    /// let mut chain = Tree::new();
    /// chain.extend([1, 2, 3]);
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        // A post-order walk finishes both subtrees before their parent, so
        // each child's height is on top of `heights` by the time the parent
        // is reached.
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut cursor = self.root();
        let mut last: *const Node<T> = ptr::null();
        let mut heights: Vec<usize> = Vec::new();

        loop {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left();
            }
            let Some(&node) = stack.last() else {
                return true;
            };
            match node.right() {
                Some(right) if !ptr::eq(right, last) => cursor = Some(right),
                _ => {
                    stack.pop();
                    last = node;
                    let right_height = match node.right() {
                        Some(_) => heights.pop().expect("child height pushed before parent"),
                        None => 0,
                    };
                    let left_height = match node.left() {
                        Some(_) => heights.pop().expect("child height pushed before parent"),
                        None => 0,
                    };
                    if left_height.abs_diff(right_height) > 1 {
                        return false;
                    }
                    heights.push(left_height.max(right_height) + 1);
                }
            }
        }
    }

    /// Visits every value in ascending order: left subtree, node, right
    /// subtree. This is the sorted sequence a search tree exists to provide.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend([2, 1, 3]);
    ///
    /// let values: Vec<i32> = tree.in_order().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn in_order(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// An alias for [`in_order`][Tree::in_order], the tree's natural
    /// iteration order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.in_order()
    }

    /// Visits every value parents-first: node, left subtree, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend([2, 1, 3]);
    ///
    /// let values: Vec<i32> = tree.pre_order().copied().collect();
    /// assert_eq!(values, [2, 1, 3]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Visits every value children-first: left subtree, right subtree, node.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend([2, 1, 3]);
    ///
    /// let values: Vec<i32> = tree.post_order().copied().collect();
    /// assert_eq!(values, [1, 3, 2]);
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: Vec::new(),
            cursor: self.root(),
            last: ptr::null(),
        }
    }

    /// Visits every value level by level, top to bottom and left to right
    /// within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend([2, 1, 3]);
    ///
    /// let values: Vec<i32> = tree.level_order().copied().collect();
    /// assert_eq!(values, [2, 1, 3]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }

    /// Releases every node, leaving the tree empty but reusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.extend([2, 1, 3]);
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        // Children come off their parent as they're pushed, so every node is
        // released exactly once, children before parent, without recursion.
        let mut stack: Vec<NonNull<Node<T>>> = Vec::new();
        stack.extend(self.root.take());
        while let Some(&node) = stack.last() {
            // SAFETY: Nodes on the stack are detached from the tree and each
            // other; the stack is their only owner.
            unsafe {
                if let Some(left) = (*node.as_ptr()).left.take() {
                    stack.push(left);
                } else if let Some(right) = (*node.as_ptr()).right.take() {
                    stack.push(right);
                } else {
                    stack.pop();
                    drop(Self::release_node(&self.alloc, node));
                }
            }
        }
        self.len = 0;
    }

    fn root(&self) -> Option<&Node<T>> {
        // SAFETY: A non-empty root link points at a live node. Taking
        // `&self` means no exclusive borrow of the tree exists.
        self.root.map(|node| unsafe { &*node.as_ptr() })
    }

    fn allocate_node(alloc: &A, value: T) -> NonNull<Node<T>> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: A node is never zero sized; its two links see to that even
        // when `T` is a zero sized type.
        let node = unsafe { alloc.allocate(layout) }.cast::<Node<T>>();
        // SAFETY: The fresh block fits one `Node<T>` and nothing has been
        // written to it yet.
        unsafe {
            node.as_ptr().write(Node {
                value,
                left: None,
                right: None,
            });
        }
        node
    }

    /// Frees a node's block and hands back the value it held.
    ///
    /// # Safety
    ///
    /// `node` must have come from `allocate_node` on the same allocator and
    /// must not be reachable from anywhere once this returns.
    unsafe fn release_node(alloc: &A, node: NonNull<Node<T>>) -> T {
        let inner = ptr::read(node.as_ptr());
        alloc.deallocate(node.cast(), Layout::new::<Node<T>>());
        inner.value
    }
}

impl<T, A: Allocator + Default> Default for Tree<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator> Drop for Tree<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, A> Clone for Tree<T, A>
where
    T: Clone,
    A: Allocator + Clone,
{
    fn clone(&self) -> Self {
        let mut new = Self::new_in(self.alloc.clone());
        // Mirror the source node by node. Links still to be filled are
        // carried as raw slots into the new tree; node blocks never move, so
        // the slots stay valid while they wait on the stack. If a value
        // clone panics, `new` is a well-formed tree of everything mirrored
        // so far and drops normally.
        let mut stack: Vec<(&Node<T>, *mut Link<T>)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, &mut new.root));
        }
        while let Some((source, slot)) = stack.pop() {
            let node = Self::allocate_node(&new.alloc, source.value.clone());
            // SAFETY: `slot` points at a link inside `new`: its root field
            // or a link of a node allocated in this loop.
            unsafe { *slot = Some(node) };
            new.len += 1;
            // SAFETY: `node` was allocated above with empty links.
            unsafe {
                if let Some(left) = source.left() {
                    stack.push((left, &mut (*node.as_ptr()).left));
                }
                if let Some(right) = source.right() {
                    stack.push((right, &mut (*node.as_ptr()).right));
                }
            }
        }
        new
    }
}

impl<T, A> fmt::Debug for Tree<T, A>
where
    T: fmt::Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, A, B> PartialEq<Tree<T, B>> for Tree<T, A>
where
    T: PartialEq,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Tree<T, B>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, A: Allocator> Eq for Tree<T, A> {}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, A: Allocator> Extend<T> for Tree<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Tree<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// A borrowing in-order (ascending) iterator. Created by [`Tree::iter`] or
/// [`Tree::in_order`].
pub struct Iter<'a, T> {
    // The left spine of whatever is left to visit. The top is always the
    // next value out.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut subtree: Option<&'a Node<T>>) {
        while let Some(node) = subtree {
            self.stack.push(node);
            subtree = node.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// A borrowing pre-order (parents-first) iterator. Created by
/// [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Right below left so the left subtree pops first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

/// A borrowing post-order (children-first) iterator. Created by
/// [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    // The subtree still to be descended into before the stack top is ready.
    cursor: Option<&'a Node<T>>,
    // The most recently yielded node; when it's the stack top's right child,
    // that right subtree is finished and the top itself is next.
    last: *const Node<T>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            while let Some(node) = self.cursor {
                self.stack.push(node);
                self.cursor = node.left();
            }
            let &node = self.stack.last()?;
            match node.right() {
                Some(right) if !ptr::eq(right, self.last) => self.cursor = Some(right),
                _ => {
                    self.stack.pop();
                    self.last = node;
                    return Some(&node.value);
                }
            }
        }
    }
}

/// A borrowing breadth-first iterator. Created by [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a model set.
    /// This way we can ensure that after a random smattering of inserts
    /// and removes we have the same contents as the model.
    fn do_ops<T: Ord + Clone + std::fmt::Debug>(
        ops: &[Op<T>],
        tree: &mut Tree<T>,
        set: &mut BTreeSet<T>,
    ) {
        for op in ops {
            match op {
                Op::Insert(value) => {
                    tree.insert(value.clone());
                    set.insert(value.clone());
                }
                Op::Remove(value) => {
                    assert_eq!(tree.remove(value), set.take(value));
                }
                Op::Contains(value) => {
                    assert_eq!(tree.contains(value), set.contains(value));
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            tree.len() == set.len() && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
            let tree: Tree<i8> = xs.iter().copied().collect();

            let expected: BTreeSet<i8> = xs.iter().copied().collect();
            tree.in_order().eq(expected.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains_everything_inserted(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter().all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn with_removals(xs: Vec<i8>, removals: Vec<i8>) -> bool {
            let mut tree: Tree<i8> = xs.iter().copied().collect();
            for r in &removals {
                tree.remove(r);
            }

            removals.iter().all(|x| !tree.contains(x))
                && xs
                    .iter()
                    .filter(|x| !removals.contains(x))
                    .all(|x| tree.contains(x))
        }
    }

    quickcheck::quickcheck! {
        fn traversals_cover_every_value_once(xs: Vec<i8>) -> bool {
            let tree: Tree<i8> = xs.iter().copied().collect();

            let sorted: Vec<i8> = tree.in_order().copied().collect();
            let mut pre: Vec<i8> = tree.pre_order().copied().collect();
            let mut post: Vec<i8> = tree.post_order().copied().collect();
            let mut level: Vec<i8> = tree.level_order().copied().collect();
            pre.sort_unstable();
            post.sort_unstable();
            level.sort_unstable();

            pre == sorted && post == sorted && level == sorted
        }
    }
}
