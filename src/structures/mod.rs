//! Linked containers and their sorts
//!
//! - [`LinkedList`]: bubble, insertion and selection sort
//! - [`Queue`]: FIFO with a drain-sort bubble sort
//! - [`Stack`]: LIFO with a drain-sort bubble sort

pub mod arena;
pub mod error;
pub mod linked_list;
mod node;
pub mod queue;
pub mod stack;

pub use arena::{NodeArena, NodeId};
pub use error::{ContainerError, ContainerResult};
pub use linked_list::LinkedList;
pub use node::Iter as ChainIter;
pub use queue::Queue;
pub use stack::Stack;

/// Classic bubble sort on a flat buffer, used by the drain-sorts.
/// Pass `i` bubbles the largest remaining value to index `n - 1 - i`.
pub(crate) fn bubble_sort_slice<T: PartialOrd>(values: &mut [T]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_slice() {
        let mut values = vec![9, -1, 4, 4, 0, 12, 3];
        bubble_sort_slice(&mut values);
        assert_eq!(values, vec![-1, 0, 3, 4, 4, 9, 12]);

        let mut empty: Vec<i32> = Vec::new();
        bubble_sort_slice(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![5];
        bubble_sort_slice(&mut single);
        assert_eq!(single, vec![5]);
    }
}
