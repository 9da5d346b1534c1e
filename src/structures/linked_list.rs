//! Singly linked list with three sorting strategies
//!
//! - Bubble sort: adjacent value swaps, repeated until a clean pass
//! - Insertion sort: relinks the existing nodes into a new sorted chain
//! - Selection sort: swaps the remainder's minimum into each position
//!
//! Bubble and selection sort move values between nodes; insertion sort
//! moves nodes and never touches the values.

use std::fmt;

use super::node::{drop_chain, render_values, Iter, Link, Node};

/// Unordered sequence of nodes owned through `head`.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Add a value at the tail. Walks the whole chain to find the tail link.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }
}

impl<T: PartialOrd> LinkedList<T> {
    /// Bubble sort by swapping adjacent values until a pass performs no swap.
    pub fn bubble_sort(&mut self) {
        if self.head.is_none() {
            return;
        }

        loop {
            let mut swapped = false;
            let mut cursor = self.head.as_deref_mut();

            while let Some(node) = cursor {
                if let Some(next) = node.next.as_deref_mut() {
                    if node.value > next.value {
                        std::mem::swap(&mut node.value, &mut next.value);
                        swapped = true;
                    }
                }
                cursor = node.next.as_deref_mut();
            }

            if !swapped {
                break;
            }
        }
    }

    /// Insertion sort by relinking nodes.
    ///
    /// Each node is detached from the unsorted remainder and spliced into
    /// `sorted` after every node whose value is `<=` its own, so equal values
    /// keep their input order.
    pub fn insertion_sort(&mut self) {
        if self.head.as_ref().map_or(true, |node| node.next.is_none()) {
            return;
        }

        let mut sorted: Link<T> = None;
        let mut remaining = self.head.take();

        while let Some(mut node) = remaining {
            remaining = node.next.take();

            let position = Iter::new(&sorted)
                .take_while(|value| **value <= node.value)
                .count();

            let mut slot = &mut sorted;
            for _ in 0..position {
                if let Some(existing) = slot {
                    slot = &mut existing.next;
                }
            }

            node.next = slot.take();
            *slot = Some(node);
        }

        self.head = sorted;
    }

    /// Selection sort: for each node, swap in the smallest value of the
    /// remainder.
    pub fn selection_sort(&mut self) {
        let mut cursor = self.head.as_deref_mut();

        while let Some(node) = cursor {
            let mut min: Option<(usize, &T)> = None;
            for (offset, value) in Iter::new(&node.next).enumerate() {
                let current = min.map_or(&node.value, |(_, v)| v);
                if *value < *current {
                    min = Some((offset, value));
                }
            }

            if let Some(offset) = min.map(|(offset, _)| offset) {
                let mut target = node.next.as_deref_mut();
                for _ in 0..offset {
                    target = target.and_then(|n| n.next.as_deref_mut());
                }
                if let Some(target) = target {
                    std::mem::swap(&mut node.value, &mut target.value);
                }
            }

            cursor = node.next.as_deref_mut();
        }
    }

    /// True when values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// Values head to tail, each followed by a space.
    pub fn render(&self) -> String {
        render_values(self.iter())
    }

    /// Write the values head to tail on one line of stdout.
    pub fn print(&self) {
        println!("{}", self.render());
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Box::new(Node::new(value)));
            cursor = &mut node.next;
            self.len += 1;
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
