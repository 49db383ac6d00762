use thiserror::Error;

/// A structural defect found by [`AvlTree::check`](crate::AvlTree::check).
///
/// A tree built only through its public API never reports one of these unless
/// its comparator is not a consistent total order, or an element's ordering
/// was changed through [`CursorMut::get_mut`](crate::CursorMut::get_mut).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Two neighboring elements are not in strictly ascending order.
    #[error("element at in-order position {pos} is not less than its successor")]
    Misordered {
        /// In-order position of the first element of the offending pair.
        pos: usize,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("node has balance factor {balance}")]
    Unbalanced {
        /// Left height minus right height.
        balance: i16,
    },

    /// A node's cached height disagrees with its children.
    #[error("node caches height {cached} but its children imply {actual}")]
    StaleHeight {
        /// The stored height.
        cached: u8,
        /// One more than the taller child's height.
        actual: u8,
    },

    /// A child does not name its parent as its parent, or the root has one.
    #[error("parent and child links disagree")]
    BrokenParentLink,

    /// The element count disagrees with the number of reachable nodes.
    #[error("tree records {len} elements but {reachable} nodes are reachable")]
    LenMismatch {
        /// The recorded element count.
        len: usize,
        /// Nodes reachable from the root.
        reachable: usize,
    },
}
