//! LIFO stack on boxed nodes

use std::fmt;

use super::error::{ContainerError, ContainerResult};
use super::node::{drop_chain, render_values, Iter, Link, Node};

/// Stack owning its chain through `top`. `top` is `None` iff the stack is empty.
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn push(&mut self, value: T) {
        self.top = Some(Node::boxed(value, self.top.take()));
        self.len += 1;
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> ContainerResult<T> {
        let node = self.top.take().ok_or(ContainerError::EmptyStack)?;
        let Node { value, next } = *node;
        self.top = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.top)
    }
}

impl<T: PartialOrd> Stack<T> {
    /// Drain-sort: pop everything into a buffer, bubble sort it ascending,
    /// then push back from the last index down to the first so the
    /// smallest value ends on top.
    pub fn bubble_sort(&mut self) -> ContainerResult<()> {
        let count = self.len();

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.pop()?);
        }

        super::bubble_sort_slice(&mut values);

        while let Some(value) = values.pop() {
            self.push(value);
        }
        Ok(())
    }
}

impl<T: fmt::Display> Stack<T> {
    /// Values top to bottom, each followed by a space.
    pub fn render(&self) -> String {
        render_values(self.iter())
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        drop_chain(self.top.take());
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        let values: Vec<&T> = self.iter().collect();
        values.into_iter().rev().cloned().collect()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Pushes in iteration order, so the last item ends on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn drain(stack: &mut Stack<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Ok(v) = stack.pop() {
            out.push(v);
        }
        out
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.render(), "3 2 1 ");
        assert_eq!(drain(&mut stack), vec![3, 2, 1]);
    }

    #[test]
    fn test_bubble_sort_scenario() {
        let mut stack = Stack::new();
        for v in [5, 3, 1, 4, 2] {
            stack.push(v);
        }
        assert_eq!(stack.peek(), Some(&2));

        stack.bubble_sort().unwrap();
        assert_eq!(stack.len(), 5);
        assert_eq!(drain(&mut stack), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(ContainerError::EmptyStack));
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());
        assert_eq!(stack.len(), 0);

        // Still usable afterwards
        stack.push(9);
        assert_eq!(stack.pop(), Ok(9));
        assert_eq!(stack.pop(), Err(ContainerError::EmptyStack));
    }

    #[test]
    fn test_bubble_sort_random_pop_order_ascending() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [0usize, 1, 2, 17, 100] {
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(0..10_000)).collect();
            let mut stack: Stack<i32> = input.iter().copied().collect();
            stack.bubble_sort().unwrap();

            let mut expected = input.clone();
            expected.sort();
            assert_eq!(drain(&mut stack), expected);
        }
    }

    #[test]
    fn test_bubble_sort_twice_is_noop() {
        let mut stack: Stack<i32> = vec![4, 4, 1, 9, 0].into_iter().collect();
        stack.bubble_sort().unwrap();
        let once = stack.render();
        stack.bubble_sort().unwrap();
        assert_eq!(stack.render(), once);
        assert_eq!(once, "0 1 4 4 9 ");
    }

    #[test]
    fn test_bubble_sort_keeps_len() {
        let mut stack: Stack<i32> = vec![9, 2, 7, 2].into_iter().collect();
        stack.bubble_sort().unwrap();
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.iter().count(), stack.len());
        assert_eq!(drain(&mut stack), vec![2, 2, 7, 9]);
    }

    #[test]
    fn test_clone_preserves_order() {
        let stack: Stack<i32> = vec![1, 2, 3].into_iter().collect();
        let copy = stack.clone();
        assert_eq!(copy.render(), stack.render());
    }
}
