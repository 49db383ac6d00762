//! # A self-balancing search tree with bidirectional cursors
//!
//! `algolib` provides [`AvlTree`], a sorted set of distinct elements kept in
//! an AVL tree.  Lookups, insertions and removals take O(log n) time, and the
//! elements can be visited in either direction with [`Iter`] or walked
//! position by position with a [`Cursor`].
//!
//! The ordering is pluggable: any [`Compare`] implementation, including a
//! plain closure, can stand in for the element type's [`Ord`].
//!
//! With the `serde` feature, trees serialize as sorted sequences.

mod avl;
pub use avl::{AvlTree, Cursor, CursorMut, IntoIter, Iter};

mod compare;
pub use compare::{Compare, Natural};

mod error;
pub use error::InvariantError;
