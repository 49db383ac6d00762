use super::arena::NodeId;
use super::AvlTree;
use crate::compare::{Compare, Natural};

/// A read-only position in an [`AvlTree`].
///
/// A cursor either rests on an element or on the "ghost" position, which lies
/// both after the greatest element and before the least one.  Moving forward
/// off the greatest element lands on the ghost, and moving forward off the
/// ghost lands on the least element (and symmetrically backward), so a cursor
/// can never leave the sequence.
///
/// # Examples
/// ```
/// use algolib::AvlTree;
///
/// let t = AvlTree::from([10, 20, 30]);
/// let mut c = t.find(&20);
/// assert_eq!(c.get(), Some(&20));
/// c.move_next();
/// assert_eq!(c.get(), Some(&30));
/// c.move_next();
/// assert!(c.is_end());
/// c.move_prev();
/// assert_eq!(c.get(), Some(&30));
/// ```
pub struct Cursor<'a, T, C = Natural> {
    tree: &'a AvlTree<T, C>,
    at: Option<NodeId>,
}

impl<'a, T, C> Cursor<'a, T, C> {
    pub(super) fn new(tree: &'a AvlTree<T, C>, at: Option<NodeId>) -> Self {
        Cursor { tree, at }
    }

    /// Returns the element under the cursor, or None at the ghost position.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.at.map(move |id| &tree.arena[id].elt)
    }

    /// Is the cursor at the ghost position?
    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }

    /// Advances to the next greater element.
    pub fn move_next(&mut self) {
        self.at = self.tree.next_id(self.at);
    }

    /// Retreats to the next lesser element.
    pub fn move_prev(&mut self) {
        self.at = self.tree.prev_id(self.at);
    }

    /// Returns the element [`move_next`](#method.move_next) would move to.
    pub fn peek_next(&self) -> Option<&'a T> {
        let tree = self.tree;
        tree.next_id(self.at).map(move |id| &tree.arena[id].elt)
    }

    /// Returns the element [`move_prev`](#method.move_prev) would move to.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let tree = self.tree;
        tree.prev_id(self.at).map(move |id| &tree.arena[id].elt)
    }
}

impl<T, C> Clone for Cursor<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for Cursor<'_, T, C> {}

// Two cursors are equal when they rest on the same position of the same tree.
impl<T, C> PartialEq for Cursor<'_, T, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.at == other.at
    }
}

impl<T, C> Eq for Cursor<'_, T, C> {}

impl<T: std::fmt::Debug, C> std::fmt::Debug for Cursor<'_, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

/// A position in an [`AvlTree`] that can modify or remove the element under
/// it.
///
/// Navigation follows the same rules as [`Cursor`].
pub struct CursorMut<'a, T, C = Natural> {
    tree: &'a mut AvlTree<T, C>,
    at: Option<NodeId>,
}

impl<'a, T, C> CursorMut<'a, T, C> {
    pub(super) fn new(tree: &'a mut AvlTree<T, C>, at: Option<NodeId>) -> Self {
        CursorMut { tree, at }
    }

    /// Returns the element under the cursor, or None at the ghost position.
    pub fn get(&self) -> Option<&T> {
        self.at.map(|id| &self.tree.arena[id].elt)
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// The caller must not change the element in a way that changes how it
    /// compares with the other elements of the tree.  Doing so is not
    /// detected until [`AvlTree::check`] runs, and lookups may miss elements
    /// in the meantime.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self.at {
            Some(id) => Some(&mut self.tree.arena[id].elt),
            None => None,
        }
    }

    /// Is the cursor at the ghost position?
    pub fn is_end(&self) -> bool {
        self.at.is_none()
    }

    /// Advances to the next greater element.
    pub fn move_next(&mut self) {
        self.at = self.tree.next_id(self.at);
    }

    /// Retreats to the next lesser element.
    pub fn move_prev(&mut self) {
        self.at = self.tree.prev_id(self.at);
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T, C> {
        Cursor::new(self.tree, self.at)
    }
}

impl<T, C: Compare<T>> CursorMut<'_, T, C> {
    /// Removes the element under the cursor and moves to the element that
    /// followed it.  Does nothing and returns None at the ghost position.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let mut t = AvlTree::from([1, 2, 3]);
    /// let mut c = t.find_mut(&2);
    /// assert_eq!(c.remove_current(), Some(2));
    /// assert_eq!(c.get(), Some(&3));
    /// assert!(t.iter().eq(&[1, 3]));
    /// ```
    pub fn remove_current(&mut self) -> Option<T> {
        let id = self.at?;
        let n = &self.tree.arena[id];

        // A node with two children is removed by moving its successor's
        // element into it, so the successor then lives at `id`.
        self.at = if n.left.is_some() && n.right.is_some() {
            Some(id)
        } else {
            self.tree.arena.successor(id)
        };

        let elt = self.tree.remove_node(id);
        chk_tree!(self.tree);
        Some(elt)
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for CursorMut<'_, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CursorMut").field(&self.get()).finish()
    }
}
