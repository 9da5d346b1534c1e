//! Error types for container access

use std::fmt;

/// Errors raised by container access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerError {
    /// `dequeue` on an empty queue
    EmptyQueue,
    /// `pop` on an empty stack
    EmptyStack,
    /// A queue handle pointed at a released node
    BrokenLink,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::EmptyQueue => write!(f, "Queue is empty"),
            ContainerError::EmptyStack => write!(f, "Stack is empty"),
            ContainerError::BrokenLink => write!(f, "Queue links to a released node"),
        }
    }
}

impl std::error::Error for ContainerError {}

/// Result type alias for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;
