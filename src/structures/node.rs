//! Singly linked storage cell shared by the list and the stack

use std::fmt;

/// Owning successor link. `None` marks the end of a chain.
pub type Link<T> = Option<Box<Node<T>>>;

/// One value plus exclusive ownership of the next cell.
///
/// `Clone` and `Debug` walk the chain in a loop. Dropping still recurses,
/// so owners release chains through [`drop_chain`].
pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Box a new cell in front of `next`.
    pub fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node::new(self.value.clone());
        let mut tail = &mut head.next;
        let mut source = self.next.as_deref();
        while let Some(node) = source {
            let cell = tail.insert(Box::new(Node::new(node.value.clone())));
            tail = &mut cell.next;
            source = node.next.as_deref();
        }
        head
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(Iter { next: Some(self) }).finish()
    }
}

/// Drop a chain iteratively. The derived recursive drop overflows the
/// stack on long chains.
pub fn drop_chain<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Borrowing iterator over a boxed chain.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(head: &'a Link<T>) -> Self {
        Self { next: head.as_deref() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// Join values the way `print()` writes them: each value followed by a space.
pub fn render_values<'a, T, I>(values: I) -> String
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for value in values {
        out.push_str(&value.to_string());
        out.push(' ');
    }
    out
}
