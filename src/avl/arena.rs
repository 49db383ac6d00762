use std::ops::{Index, IndexMut};

/// Handle of a node in an [`Arena`].  Handles stay valid until the node is
/// freed and may be reused afterwards.
pub(crate) type NodeId = usize;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) elt: T,
    pub(crate) height: u8,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    // non-owning; None for the root
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(elt: T, parent: Option<NodeId>) -> Self {
        Node {
            elt,
            height: 1,
            left: None,
            right: None,
            parent,
        }
    }
}

#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    // link to the next vacant slot
    Vacant(Option<NodeId>),
}

impl<T> Slot<T> {
    fn node(&self) -> &Node<T> {
        match self {
            Slot::Occupied(n) => n,
            Slot::Vacant(_) => panic!("link to a freed tree node"),
        }
    }

    fn node_mut(&mut self) -> &mut Node<T> {
        match self {
            Slot::Occupied(n) => n,
            Slot::Vacant(_) => panic!("link to a freed tree node"),
        }
    }
}

/// Node storage for a tree.  The arena owns every node; the tree's links
/// decide which nodes are reachable.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free_head {
            Some(id) => {
                let old = std::mem::replace(&mut self.slots[id], Slot::Occupied(node));
                self.free_head = match old {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => unreachable!("free list names a live node"),
                };
                id
            }

            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let old = std::mem::replace(&mut self.slots[id], Slot::Vacant(self.free_head));
        self.free_head = Some(id);
        match old {
            Slot::Occupied(n) => n,
            Slot::Vacant(_) => panic!("double free of tree node {id}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    /// Exchanges the elements of two distinct live nodes, leaving their links
    /// alone.
    pub(crate) fn swap_elts(&mut self, a: NodeId, b: NodeId) {
        assert_ne!(a, b);
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.slots.split_at_mut(hi);
        std::mem::swap(&mut head[lo].node_mut().elt, &mut tail[0].node_mut().elt);
    }

    pub(crate) fn height(&self, id: Option<NodeId>) -> u8 {
        id.map_or(0, |id| self[id].height)
    }

    /// Recomputes the cached height of `id` from its children.
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let n = &self[id];
        let ht = 1 + self.height(n.left).max(self.height(n.right));
        self[id].height = ht;
    }

    // left height minus right height
    pub(crate) fn balance(&self, id: NodeId) -> i16 {
        let n = &self[id];
        i16::from(self.height(n.left)) - i16::from(self.height(n.right))
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(lf) = self[id].left {
            id = lf;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(rt) = self[id].right {
            id = rt;
        }
        id
    }

    /// In-order successor of `id`, or None if `id` holds the greatest element.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(rt) = self[id].right {
            return Some(self.leftmost(rt));
        }

        let mut curr = id;
        while let Some(p) = self[curr].parent {
            if self[p].left == Some(curr) {
                return Some(p);
            }
            curr = p;
        }
        None
    }

    /// In-order predecessor of `id`, or None if `id` holds the least element.
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(lf) = self[id].left {
            return Some(self.rightmost(lf));
        }

        let mut curr = id;
        while let Some(p) = self[curr].parent {
            if self[p].right == Some(curr) {
                return Some(p);
            }
            curr = p;
        }
        None
    }

    /// Dismantles the arena into a table of elements indexed by node id.
    pub(crate) fn into_elts(self) -> Vec<Option<T>> {
        self.slots
            .into_iter()
            .map(|s| match s {
                Slot::Occupied(n) => Some(n.elt),
                Slot::Vacant(_) => None,
            })
            .collect()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.slots[id].node()
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id].node_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn freed_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::leaf('a', None));
        let b = arena.alloc(Node::leaf('b', Some(a)));
        let c = arena.alloc(Node::leaf('c', Some(a)));
        assert_eq!((a, b, c), (0, 1, 2));

        assert_eq!(arena.free(b).elt, 'b');
        assert_eq!(arena.free(a).elt, 'a');

        // most recently freed first
        assert_eq!(arena.alloc(Node::leaf('d', None)), a);
        assert_eq!(arena.alloc(Node::leaf('e', None)), b);
        assert_eq!(arena.alloc(Node::leaf('f', None)), 3);
        assert_eq!(arena[c].elt, 'c');
    }

    #[test]
    fn swap_keeps_links() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::leaf(1, None));
        let b = arena.alloc(Node::leaf(2, Some(a)));
        arena[a].right = Some(b);
        arena.update_height(a);

        arena.swap_elts(b, a);
        assert_eq!(arena[a].elt, 2);
        assert_eq!(arena[b].elt, 1);
        assert_eq!(arena[a].right, Some(b));
        assert_eq!(arena[b].parent, Some(a));
        assert_eq!(arena[a].height, 2);
        assert_eq!(arena.balance(a), -1);
    }

    #[test]
    #[should_panic]
    fn double_free_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::leaf((), None));
        arena.free(a);
        arena.free(a);
    }
}
