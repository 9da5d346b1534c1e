//! Handle-addressed node storage
//!
//! The queue needs O(1) access to both ends of its chain. Rather than
//! aliasing a boxed chain with a raw rear pointer, its nodes live in a
//! slot vector and link to each other by [`NodeId`]. Freed slots are
//! recycled through a free list; when the last node is released the whole
//! storage is reset.

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node stored in the arena.
#[derive(Debug, Clone)]
pub struct ArenaNode<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(ArenaNode<T>),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    live: usize,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Allocate an unlinked node holding `value`.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let node = ArenaNode { value, next: None };
        self.live += 1;
        match self.free_head {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free_head = next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Release a node and hand back its value. Returns `None` for a stale handle.
    pub fn release(&mut self, id: NodeId) -> Option<ArenaNode<T>> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let vacated = std::mem::replace(slot, Slot::Vacant { next_free: self.free_head });
        self.live -= 1;
        if self.live == 0 {
            self.slots.clear();
            self.free_head = None;
        } else {
            self.free_head = Some(id.0);
        }
        match vacated {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&ArenaNode<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ArenaNode<T>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Allocated slot count, live or vacant.
    pub fn capacity_used(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_release() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).map(|n| n.value), Some(10));

        let released = arena.release(a).map(|n| n.value);
        assert_eq!(released, Some(10));
        assert!(arena.get(a).is_none());
        assert!(arena.release(a).is_none());

        // Vacated slot is reused
        let c = arena.alloc(30);
        assert_eq!(c, a);
        assert_eq!(arena.capacity_used(), 2);
        assert_eq!(arena.get(b).map(|n| n.value), Some(20));
    }

    #[test]
    fn test_storage_reset_when_empty() {
        let mut arena = NodeArena::new();
        let ids: Vec<NodeId> = (0..5).map(|i| arena.alloc(i)).collect();
        for id in ids {
            arena.release(id);
        }
        assert!(arena.is_empty());
        assert_eq!(arena.capacity_used(), 0);
    }

    #[test]
    fn test_links() {
        let mut arena = NodeArena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');
        if let Some(node) = arena.get_mut(a) {
            node.next = Some(b);
        }
        assert_eq!(arena.get(a).and_then(|n| n.next), Some(b));
    }
}
