//! Three classic containers with their storage managed by hand: an ordered
//! Binary Search Tree ([`Tree`]), a doubly linked list ([`List`]), and a
//! growable array ([`Vector`]).
//!
//! Each container obtains raw memory from a pluggable
//! [`Allocator`][alloc::Allocator] strategy, chosen at construction and
//! defaulting to the global heap. Acquiring storage and constructing values
//! in it are separate steps throughout, as are destruction and release, so
//! a container only ever drops values it actually constructed and returns
//! every block to the strategy that produced it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores unique values ordered by their [`Ord`]
//! implementation. Its defining invariants:
//!
//! 1. For every node, all values in its left subtree compare less than the
//!    node's own value.
//! 2. For every node, all values in its right subtree compare greater than
//!    the node's own value.
//!
//! These buy `O(height)` lookups and sorted in-order iteration. [`Tree`]
//! does no rebalancing, so the height depends on insertion order;
//! [`height`][Tree::height] and [`is_balanced`][Tree::is_balanced] report
//! how a particular tree turned out, and the traversal iterators
//! ([`in_order`][Tree::in_order], [`pre_order`][Tree::pre_order],
//! [`post_order`][Tree::post_order], [`level_order`][Tree::level_order])
//! walk it without recursion.
//!
//! ## The sequences
//!
//! [`List`] is a doubly linked list: O(1) pushes and pops at both ends,
//! positional stitching by index, and an in-place reverse. [`Vector`] is a
//! contiguous array that doubles its single block as it fills and
//! dereferences to a slice, so everything slices can do comes for free.
//!
//! ## Errors
//!
//! Accessors that hand out references fail loudly with an [`Error`];
//! structural mutators like the pops are quiet and return [`Option`]. The
//! [`error`] module documents the split.
//!
//! # Examples
//!
//! ```
//! use containers::{List, Tree, Vector};
//!
//! let mut tree = Tree::new();
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_front(0);
//! assert_eq!(list.pop_back(), Some(1));
//!
//! let mut vector = Vector::new();
//! vector.push("v");
//! assert_eq!(vector.pop(), Some("v"));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod alloc;
pub mod error;
pub mod list;
pub mod tree;
pub mod vec;


pub use crate::error::Error;
pub use crate::list::List;
pub use crate::tree::Tree;
pub use crate::vec::Vector;
