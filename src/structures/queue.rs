//! FIFO queue on arena nodes
//!
//! Nodes live in a [`NodeArena`] and link by handle, which gives O(1)
//! access to both `front` and `rear` without a second owner of the tail.

use std::fmt;

use super::arena::{NodeArena, NodeId};
use super::error::{ContainerError, ContainerResult};
use super::node::render_values;

/// Queue with `front`/`rear` handles. Both are `None` iff the queue is empty.
#[derive(Clone)]
pub struct Queue<T> {
    nodes: NodeArena<T>,
    front: Option<NodeId>,
    rear: Option<NodeId>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            front: None,
            rear: None,
        }
    }

    /// Attach a value at the rear.
    pub fn enqueue(&mut self, value: T) {
        let id = self.nodes.alloc(value);
        match self.rear.and_then(|rear| self.nodes.get_mut(rear)) {
            Some(rear) => rear.next = Some(id),
            None => self.front = Some(id),
        }
        self.rear = Some(id);
    }

    /// Remove and return the front value.
    ///
    /// A front handle with no live node leaves the chain unusable; the
    /// queue is reset to empty and `BrokenLink` is returned.
    pub fn dequeue(&mut self) -> ContainerResult<T> {
        let front = self.front.ok_or(ContainerError::EmptyQueue)?;
        let Some(node) = self.nodes.release(front) else {
            self.nodes = NodeArena::new();
            self.front = None;
            self.rear = None;
            return Err(ContainerError::BrokenLink);
        };
        self.front = node.next;
        if self.front.is_none() {
            self.rear = None;
        }
        Ok(node.value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.front
            .and_then(|id| self.nodes.get(id))
            .map(|node| &node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Front to rear.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            nodes: &self.nodes,
            next: self.front,
        }
    }
}

impl<T: PartialOrd> Queue<T> {
    /// Drain-sort: dequeue every value into a buffer, bubble sort it, then
    /// enqueue the values back in ascending order. The node storage is
    /// emptied and rebuilt from scratch.
    pub fn bubble_sort(&mut self) -> ContainerResult<()> {
        let count = self.len();

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.dequeue()?);
        }

        super::bubble_sort_slice(&mut values);

        for value in values {
            self.enqueue(value);
        }
        Ok(())
    }
}

impl<T: fmt::Display> Queue<T> {
    /// Values front to rear, each followed by a space.
    pub fn render(&self) -> String {
        render_values(self.iter())
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct QueueIter<'a, T> {
    nodes: &'a NodeArena<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
