use std::iter::FusedIterator;

use super::arena::{Arena, NodeId};

/// An iterator over the elements of an [`AvlTree`](crate::AvlTree) in
/// ascending order.  Use [`rev`](Iterator::rev) for descending order.
///
/// The iterator steps along parent links, so it needs no auxiliary storage.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(arena: &'a Arena<T>, root: Option<NodeId>, len: usize) -> Self {
        Iter {
            arena,
            front: root.map(|r| arena.leftmost(r)),
            back: root.map(|r| arena.rightmost(r)),
            len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let id = self.front?;
        let arena = self.arena;
        self.len -= 1;
        self.front = arena.successor(id);
        Some(&arena[id].elt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let id = self.back?;
        let arena = self.arena;
        self.len -= 1;
        self.back = arena.predecessor(id);
        Some(&arena[id].elt)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

/// An owning iterator over the elements of an [`AvlTree`](crate::AvlTree) in
/// ascending order.
pub struct IntoIter<T> {
    elts: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(arena: Arena<T>, root: Option<NodeId>, len: usize) -> Self {
        let mut order = Vec::with_capacity(len);
        let mut curr = root.map(|r| arena.leftmost(r));
        while let Some(id) = curr {
            order.push(id);
            curr = arena.successor(id);
        }

        let mut table = arena.into_elts();
        let elts: Vec<T> = order
            .into_iter()
            .filter_map(|id| table[id].take())
            .collect();

        IntoIter {
            elts: elts.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.elts.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elts.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.elts.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.elts.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
