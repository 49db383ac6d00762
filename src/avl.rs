#![warn(missing_docs)]
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};

use log::{debug, trace};

use crate::compare::{Compare, Natural};
use crate::error::InvariantError;

// Re-validates the whole tree after each mutation in test builds.
#[cfg(test)]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        if let Err(e) = $x.check() {
            panic!("{}", e);
        }
    }};
}

#[cfg(not(test))]
macro_rules! chk_tree {
    ( $x:expr ) => {{}};
}

mod arena;
mod cursor;
mod iter;
#[cfg(feature = "serde")]
mod serde_impl;

use arena::{Arena, Node, NodeId};
pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter};

// Where an element is, or would be attached if it were inserted.
enum Probe {
    Found(NodeId),
    Vacant { parent: Option<NodeId>, is_left: bool },
}

/// A sorted set of distinct elements stored in an [AVL
/// tree](https://en.wikipedia.org/wiki/AVL_tree).
///
/// The subtrees of every node differ in height by at most one, so the tree
/// height stays logarithmic and [`find`](#method.find),
/// [`insert`](#method.insert) and [`erase`](#method.erase) take O(log n)
/// time.
///
/// Elements are ordered by a comparator `C`, which defaults to [`Natural`]
/// (the element type's [`Ord`]).  Elements that compare equal are the same
/// element as far as the tree is concerned: inserting one that is already
/// present leaves the tree unchanged.
///
/// Nodes live in an arena and link to their parents, which lets a
/// [`Cursor`] step in either direction from any position without keeping a
/// path stack.
///
/// # Examples
/// ```
/// use algolib::AvlTree;
///
/// let mut t = AvlTree::new();
/// assert!(t.insert(10).1);
/// assert!(t.insert(4).1);
/// assert!(!t.insert(10).1);
///
/// assert_eq!(t.len(), 2);
/// assert_eq!(t.find(&4).get(), Some(&4));
/// assert!(t.find(&5).is_end());
/// assert_eq!(t.erase(&10), 1);
/// assert!(t.iter().eq(&[4]));
/// ```
#[derive(Clone)]
pub struct AvlTree<T, C = Natural> {
    arena: Arena<T>,
    root: Option<NodeId>,
    len: usize,
    cmp: C,
}

impl<T> AvlTree<T, Natural> {
    /// Creates a new, empty tree ordered by `T`'s [`Ord`] implementation.
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    /// let t: AvlTree<usize> = AvlTree::new();
    /// assert!(t.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> AvlTree<T, C> {
    /// Creates a new, empty tree ordered by `cmp`.
    pub const fn with_comparator(cmp: C) -> Self {
        AvlTree {
            arena: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the tree's comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Tests if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single element.
    pub fn height(&self) -> usize {
        self.arena.height(self.root).into()
    }

    /// Drops all elements from the tree.
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the least element, if any.
    pub fn first(&self) -> Option<&T> {
        self.first_id().map(|id| &self.arena[id].elt)
    }

    /// Returns the greatest element, if any.
    pub fn last(&self) -> Option<&T> {
        self.last_id().map(|id| &self.arena[id].elt)
    }

    /// Creates an iterator over the elements in ascending order.  The
    /// iterator is double-ended, so `iter().rev()` visits them in descending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let t = AvlTree::from([2, 3, 1]);
    /// assert!(t.iter().eq(&[1, 2, 3]));
    /// assert!(t.iter().rev().eq(&[3, 2, 1]));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root, self.len)
    }

    /// Returns a cursor at the least element, or at the ghost position if
    /// the tree is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, self.first_id())
    }

    /// Returns a cursor at the greatest element, or at the ghost position if
    /// the tree is empty.
    pub fn cursor_back(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, self.last_id())
    }

    /// Returns a cursor at the ghost position, which follows the greatest
    /// element and precedes the least.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let t = AvlTree::from([1, 2, 3]);
    /// let mut c = t.cursor_end();
    /// c.move_prev();
    /// assert_eq!(c.get(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T, C> {
        Cursor::new(self, None)
    }

    /// Returns a mutable cursor at the least element.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, C> {
        let at = self.first_id();
        CursorMut::new(self, at)
    }

    /// Returns a mutable cursor at the greatest element.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, C> {
        let at = self.last_id();
        CursorMut::new(self, at)
    }

    fn first_id(&self) -> Option<NodeId> {
        self.root.map(|r| self.arena.leftmost(r))
    }

    fn last_id(&self) -> Option<NodeId> {
        self.root.map(|r| self.arena.rightmost(r))
    }

    // Navigation through the ghost position (None) wraps to the opposite end.
    fn next_id(&self, at: Option<NodeId>) -> Option<NodeId> {
        match at {
            None => self.first_id(),
            Some(id) => self.arena.successor(id),
        }
    }

    fn prev_id(&self, at: Option<NodeId>) -> Option<NodeId> {
        match at {
            None => self.last_id(),
            Some(id) => self.arena.predecessor(id),
        }
    }

    // Puts `new` where `old` hangs below `parent` (or at the root).
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) if self.arena[p].left == Some(old) => self.arena[p].left = new,
            Some(p) => self.arena[p].right = new,
        }

        if let Some(n) = new {
            self.arena[n].parent = parent;
        }
    }

    // Rotates x up past its parent p.  One of the transformations
    //    p(x(a, b), c)   =>   x(a, p(b, c))
    //    p(a, x(b, c))   =>   x(p(a, b), c)
    // a and c retain the same parents.
    fn rotate_up(&mut self, x: NodeId) {
        let Some(p) = self.arena[x].parent else {
            unreachable!("rotation of the root");
        };
        let g = self.arena[p].parent;

        if self.arena[p].left == Some(x) {
            let b = self.arena[x].right;
            self.arena[p].left = b;
            if let Some(b) = b {
                self.arena[b].parent = Some(p);
            }
            self.arena[x].right = Some(p);
        } else {
            let b = self.arena[x].left;
            self.arena[p].right = b;
            if let Some(b) = b {
                self.arena[b].parent = Some(p);
            }
            self.arena[x].left = Some(p);
        }

        self.arena[p].parent = Some(x);
        self.replace_child(g, p, Some(x));

        // p is now below x
        self.arena.update_height(p);
        self.arena.update_height(x);

        trace!("rotated node {x} above node {p}");
    }

    // Restores the balance of the subtree at n, whose own subtrees must be
    // balanced, and returns the subtree's new root.
    fn rebalance_node(&mut self, n: NodeId) -> NodeId {
        self.arena.update_height(n);
        let bal = self.arena.balance(n);

        if bal > 1 {
            let Some(lf) = self.arena[n].left else {
                unreachable!("left-heavy node without a left child");
            };
            let pivot = if self.arena.balance(lf) < 0 {
                let Some(lr) = self.arena[lf].right else {
                    unreachable!("right-heavy node without a right child");
                };
                self.rotate_up(lr);
                lr
            } else {
                lf
            };
            self.rotate_up(pivot);
            pivot
        } else if bal < -1 {
            let Some(rt) = self.arena[n].right else {
                unreachable!("right-heavy node without a right child");
            };
            let pivot = if self.arena.balance(rt) > 0 {
                let Some(rl) = self.arena[rt].left else {
                    unreachable!("left-heavy node without a left child");
                };
                self.rotate_up(rl);
                rl
            } else {
                rt
            };
            self.rotate_up(pivot);
            pivot
        } else {
            n
        }
    }

    // Rebalances every subtree on the path from `start` to the root.
    fn rebalance_from(&mut self, start: Option<NodeId>) {
        let mut curr = start;
        while let Some(n) = curr {
            let top = self.rebalance_node(n);
            curr = self.arena[top].parent;
        }
    }

    // Unlinks the element held at `id` and returns it.  A node with two
    // children takes its successor's element, and the successor's node is
    // unlinked instead.
    fn remove_node(&mut self, id: NodeId) -> T {
        let victim = match (self.arena[id].left, self.arena[id].right) {
            (Some(_), Some(rt)) => {
                let succ = self.arena.leftmost(rt);
                trace!("removing node {id} through its successor {succ}");
                self.arena.swap_elts(id, succ);
                succ
            }
            _ => id,
        };

        let n = &self.arena[victim];
        let (child, parent) = (n.left.or(n.right), n.parent);
        self.replace_child(parent, victim, child);
        self.len -= 1;

        let old = self.arena.free(victim);
        self.rebalance_from(parent);
        old.elt
    }

    fn check_links(&self) -> Result<(), InvariantError> {
        let mut work = Vec::new();
        if let Some(r) = self.root {
            if self.arena[r].parent.is_some() {
                return Err(InvariantError::BrokenParentLink);
            }
            work.push(r);
        }

        let mut reachable = 0;
        while let Some(id) = work.pop() {
            reachable += 1;
            let n = &self.arena[id];

            // Each node names a single parent, so no node can be pushed twice.
            for c in [n.left, n.right].into_iter().flatten() {
                if self.arena[c].parent != Some(id) {
                    return Err(InvariantError::BrokenParentLink);
                }
                work.push(c);
            }

            let actual = 1 + self.arena.height(n.left).max(self.arena.height(n.right));
            if n.height != actual {
                return Err(InvariantError::StaleHeight {
                    cached: n.height,
                    actual,
                });
            }

            let balance = self.arena.balance(id);
            if !(-1..=1).contains(&balance) {
                return Err(InvariantError::Unbalanced { balance });
            }
        }

        if reachable != self.len {
            return Err(InvariantError::LenMismatch {
                len: self.len,
                reachable,
            });
        }

        Ok(())
    }
}

impl<T, C: Compare<T>> AvlTree<T, C> {
    fn probe(&self, elt: &T) -> Probe {
        let mut parent = None;
        let mut is_left = false;
        let mut curr = self.root;
        while let Some(id) = curr {
            let n = &self.arena[id];
            match self.cmp.compare(elt, &n.elt) {
                Equal => return Probe::Found(id),
                Less => {
                    is_left = true;
                    curr = n.left;
                }
                Greater => {
                    is_left = false;
                    curr = n.right;
                }
            }
            parent = Some(id);
        }

        Probe::Vacant { parent, is_left }
    }

    fn find_id(&self, elt: &T) -> Option<NodeId> {
        match self.probe(elt) {
            Probe::Found(id) => Some(id),
            Probe::Vacant { .. } => None,
        }
    }

    /// Returns a cursor at the element equal to `elt`, or at the ghost
    /// position if there is none.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let t = AvlTree::from([1, 5, 9]);
    /// let mut c = t.find(&5);
    /// c.move_next();
    /// assert_eq!(c.get(), Some(&9));
    /// assert_eq!(t.find(&4), t.cursor_end());
    /// ```
    pub fn find(&self, elt: &T) -> Cursor<'_, T, C> {
        Cursor::new(self, self.find_id(elt))
    }

    /// Returns a mutable cursor at the element equal to `elt`, or at the
    /// ghost position if there is none.
    pub fn find_mut(&mut self, elt: &T) -> CursorMut<'_, T, C> {
        let at = self.find_id(elt);
        CursorMut::new(self, at)
    }

    /// Returns a reference to the element equal to `elt`, if it exists.
    pub fn get(&self, elt: &T) -> Option<&T> {
        self.find_id(elt).map(|id| &self.arena[id].elt)
    }

    /// Tests if the tree holds an element equal to `elt`.
    pub fn contains(&self, elt: &T) -> bool {
        self.find_id(elt).is_some()
    }

    /// Inserts `elt` unless an equal element is already present.
    ///
    /// Returns a cursor at the element equal to `elt` (the new one if it was
    /// inserted, the existing one otherwise) and whether the insertion
    /// happened.  An existing element is left untouched and `elt` is dropped.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let mut t = AvlTree::new();
    /// let (c, inserted) = t.insert("b");
    /// assert!(inserted);
    /// assert_eq!(c.get(), Some(&"b"));
    ///
    /// t.insert("a");
    /// let (c, inserted) = t.insert("b");
    /// assert!(!inserted);
    /// assert_eq!(c.peek_prev(), Some(&"a"));
    /// ```
    pub fn insert(&mut self, elt: T) -> (Cursor<'_, T, C>, bool) {
        match self.probe(&elt) {
            Probe::Found(id) => (Cursor::new(self, Some(id)), false),

            Probe::Vacant { parent, is_left } => {
                let id = self.arena.alloc(Node::leaf(elt, parent));
                match parent {
                    None => self.root = Some(id),
                    Some(p) if is_left => self.arena[p].left = Some(id),
                    Some(p) => self.arena[p].right = Some(id),
                }
                self.len += 1;
                self.rebalance_from(parent);
                chk_tree!(self);

                (Cursor::new(self, Some(id)), true)
            }
        }
    }

    /// Removes the element equal to `elt` and returns it.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let mut t = AvlTree::from([1, 2]);
    /// assert_eq!(t.remove(&2), Some(2));
    /// assert_eq!(t.remove(&2), None);
    /// ```
    pub fn remove(&mut self, elt: &T) -> Option<T> {
        let id = self.find_id(elt)?;
        let old = self.remove_node(id);
        chk_tree!(self);
        Some(old)
    }

    /// Removes the element equal to `elt` and returns the number of
    /// elements removed, which is 0 or 1.
    pub fn erase(&mut self, elt: &T) -> usize {
        usize::from(self.remove(elt).is_some())
    }

    /// Removes and returns the least element.
    pub fn pop_first(&mut self) -> Option<T> {
        let id = self.first_id()?;
        let old = self.remove_node(id);
        chk_tree!(self);
        Some(old)
    }

    /// Removes and returns the greatest element.
    pub fn pop_last(&mut self) -> Option<T> {
        let id = self.last_id()?;
        let old = self.remove_node(id);
        chk_tree!(self);
        Some(old)
    }

    /// Keeps only the elements for which `f` returns true.
    ///
    /// # Examples
    /// ```
    /// use algolib::AvlTree;
    ///
    /// let mut t: AvlTree<_> = (0..10).collect();
    /// t.retain(|x| x % 3 == 0);
    /// assert!(t.iter().eq(&[0, 3, 6, 9]));
    /// ```
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut c = self.cursor_front_mut();
        while let Some(elt) = c.get() {
            if f(elt) {
                c.move_next();
            } else {
                c.remove_current();
            }
        }
    }

    /// Verifies the tree's structure: ascending order under the comparator,
    /// AVL balance, cached heights, parent links and the element count.
    ///
    /// Trees built through this API only fail the check if the comparator is
    /// inconsistent or elements were reordered through
    /// [`CursorMut::get_mut`].
    pub fn check(&self) -> Result<(), InvariantError> {
        self.check_links()
            .and_then(|()| self.check_order())
            .map_err(|e| {
                debug!("AVL tree invariant violated: {e}");
                e
            })
    }

    fn check_order(&self) -> Result<(), InvariantError> {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return Ok(());
        };

        for (pos, elt) in iter.enumerate() {
            if self.cmp.compare(prev, elt) != Less {
                return Err(InvariantError::Misordered { pos });
            }
            prev = elt;
        }

        Ok(())
    }
}

impl<T, C: Default> Default for AvlTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Debug, C> Debug for AvlTree<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for AvlTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for AvlTree<T, C> {}

impl<T: PartialOrd, C> PartialOrd for AvlTree<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, C> Ord for AvlTree<T, C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, C> Hash for AvlTree<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.insert(elt);
        }
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for AvlTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlTree<T> {
    fn from(elts: [T; N]) -> Self {
        AvlTree::from_iter(elts)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for AvlTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.root, self.len)
    }
}

#[cfg(test)]
mod test {
    extern crate quickcheck;
    use super::*;
    use quickcheck::quickcheck;
    use std::collections::BTreeSet;

    fn bal_test(vs: Vec<u8>) {
        let mut t = AvlTree::new();
        for &v in vs.iter() {
            t.insert(v);
            t.check().unwrap();
        }
    }

    // positive values insert, negative values remove
    fn rm_test(vs: Vec<i8>) {
        let mut t = AvlTree::new();
        let mut btree = BTreeSet::new();

        for &v in vs.iter() {
            match v {
                1..=i8::MAX => {
                    let k = v % 32;
                    assert_eq!(t.insert(k).1, btree.insert(k));
                }

                0 | i8::MIN => (),

                _ => {
                    let k = -v % 32;
                    assert_eq!(t.remove(&k), btree.take(&k));
                }
            }

            assert!(t.iter().eq(btree.iter()));
            t.check().unwrap();
        }
    }

    // systematically try erasing each element of the tree
    fn chk_all_removes(t: AvlTree<u8>) {
        for &v in t.iter() {
            let mut t2 = t.clone();
            assert_eq!(t2.erase(&v), 1);
            assert!(!t2.contains(&v));
            assert_eq!(t2.len(), t.len() - 1);
            t2.check().unwrap();
        }
    }

    #[test]
    fn rm_each_test() {
        // build in order to encourage skewing
        let t: AvlTree<_> = (0..32).collect();
        chk_all_removes(t);

        // build in reverse order to encourage opposite skewing
        let t: AvlTree<_> = (0..32).rev().collect();
        chk_all_removes(t);
    }

    #[test]
    fn rot_rt_regr() {
        // left-right double rotation at the root
        let mut t = AvlTree::new();
        t.insert(2);
        t.insert(0);
        t.insert(1);

        assert_eq!(t.len(), 3);
        assert_eq!(t.height(), 2);
        assert_eq!(t.arena[t.root.unwrap()].elt, 1);
        assert!(t.iter().eq(&[0, 1, 2]));
    }

    #[test]
    fn rot_lf_regr() {
        // right-left double rotation at the root
        let mut t = AvlTree::new();
        t.insert(0);
        t.insert(2);
        t.insert(1);

        assert_eq!(t.height(), 2);
        assert_eq!(t.arena[t.root.unwrap()].elt, 1);
    }

    #[test]
    fn ascending_inserts_stay_shallow() {
        let t: AvlTree<u32> = (0..1023).collect();
        assert_eq!(t.height(), 10);

        let t: AvlTree<u32> = (0..1024).rev().collect();
        assert_eq!(t.height(), 11);
    }

    #[test]
    fn bal_test_regr1() {
        bal_test(vec![4, 0, 5, 1, 2, 3]);
    }

    #[test]
    fn bal_test_regr2() {
        bal_test(vec![3, 0, 1, 2, 4]);
    }

    #[test]
    fn rm_test_regr1() {
        rm_test(vec![101, 100, 1, -100]);
    }

    #[test]
    fn rm_test_regr2() {
        rm_test(vec![
            99, 1, 103, 3, 98, 2, 8, 4, 5, 6, 7, 102, 9, 97, -102, 10, -97,
        ]);
    }

    #[test]
    fn rm_test_regr3() {
        rm_test(vec![31, 14, 1, 15, 32, 16, 17, -14, -31]);
    }

    #[test]
    fn erase_reuses_slots() {
        let mut t: AvlTree<_> = (0..8).collect();
        for i in 0..8 {
            t.erase(&i);
        }
        assert!(t.is_empty());
        assert_eq!(t.root, None);
        assert_eq!(t.height(), 0);

        t.extend(10..18);
        assert_eq!(t.len(), 8);
        assert!(t.arena[0].elt >= 10);
    }

    #[test]
    fn pop_both_ends() {
        let mut t: AvlTree<_> = (0..5).collect();
        assert_eq!(t.pop_first(), Some(0));
        assert_eq!(t.pop_last(), Some(4));
        assert_eq!(t.first(), Some(&1));
        assert_eq!(t.last(), Some(&3));

        t.clear();
        assert_eq!(t.pop_first(), None);
        assert_eq!(t.pop_last(), None);
    }

    #[test]
    fn check_catches_stale_height() {
        let mut t: AvlTree<_> = (0..4).collect();
        let r = t.root.unwrap();
        t.arena[r].height += 1;
        assert!(matches!(
            t.check(),
            Err(InvariantError::StaleHeight { .. })
        ));
    }

    #[test]
    fn check_catches_broken_parent() {
        let mut t: AvlTree<_> = (0..4).collect();
        let r = t.root.unwrap();
        let lf = t.arena[r].left.unwrap();
        t.arena[lf].parent = None;
        assert_eq!(t.check(), Err(InvariantError::BrokenParentLink));
    }

    #[test]
    fn check_catches_len_mismatch() {
        let mut t: AvlTree<_> = (0..4).collect();
        t.len = 3;
        assert_eq!(
            t.check(),
            Err(InvariantError::LenMismatch {
                len: 3,
                reachable: 4,
            })
        );
    }

    #[test]
    fn check_catches_misorder() {
        let mut t: AvlTree<_> = (0..4).collect();
        let r = t.root.unwrap();
        let lf = t.arena[r].left.unwrap();
        t.arena[lf].elt = 100;
        assert!(matches!(
            t.check(),
            Err(InvariantError::Misordered { .. })
        ));
    }

    #[test]
    fn check_catches_imbalance() {
        // hand-build a chain 0 -> 1 -> 2 hanging to the right
        let mut t = AvlTree::new();
        let a = t.arena.alloc(Node::leaf(0, None));
        let b = t.arena.alloc(Node::leaf(1, Some(a)));
        let c = t.arena.alloc(Node::leaf(2, Some(b)));
        t.arena[a].right = Some(b);
        t.arena[b].right = Some(c);
        t.arena.update_height(b);
        t.arena.update_height(a);
        t.root = Some(a);
        t.len = 3;

        assert_eq!(
            t.check(),
            Err(InvariantError::Unbalanced { balance: -2 })
        );
    }

    #[test]
    fn clone_is_independent() {
        let t1: AvlTree<_> = (0..16).collect();
        let mut t2 = t1.clone();
        t2.erase(&3);
        t2.insert(99);

        assert!(t1.contains(&3));
        assert!(!t1.contains(&99));
        assert!(t2.contains(&99));
        t1.check().unwrap();
        t2.check().unwrap();
    }

    quickcheck! {
        fn qc_bal_test(vs: Vec<u8>) -> () {
            bal_test(vs);
        }

        fn qc_rm_test(vs: Vec<i8>) -> () {
            rm_test(vs);
        }

        fn qc_rm_test2(vs: Vec<u8>) -> () {
            let t = vs.into_iter().collect();
            chk_all_removes(t);
        }

        fn qc_reverse_order(vs: Vec<i16>) -> bool {
            let mut t: AvlTree<i16, _> = AvlTree::with_comparator(|a: &i16, b: &i16| b.cmp(a));
            t.extend(vs.iter().copied());
            let mut sorted: Vec<_> = vs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
            sorted.reverse();
            t.check().is_ok() && t.iter().copied().eq(sorted)
        }
    }
}
