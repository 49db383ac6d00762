//! Orderings for [`AvlTree`](crate::AvlTree) elements.

use std::cmp::Ordering;

/// A total order over `T`, used by a tree to place and find its elements.
///
/// Implementations must be consistent: `compare(a, b)` must be the reverse of
/// `compare(b, a)` and must be transitive.  The tree does not validate this;
/// an inconsistent order makes lookups unreliable and shows up as
/// [`InvariantError::Misordered`](crate::InvariantError::Misordered) from
/// [`AvlTree::check`](crate::AvlTree::check).
///
/// Any closure `Fn(&T, &T) -> Ordering` is a `Compare<T>`.
///
/// # Examples
/// ```
/// use algolib::AvlTree;
///
/// let mut t: AvlTree<i32, _> = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// t.extend([1, 3, 2]);
/// assert!(t.iter().eq(&[3, 2, 1]));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The order given by `T`'s [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
