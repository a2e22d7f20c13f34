//! Container struct definition
//!
//! A `Container` is a named stack or queue: one concrete type over the shared
//! chain, with the access discipline carried as a value rather than as a
//! subtype. Its public mutating surface is only `push` and `pop`.

use chrono::{DateTime, Utc};

use crate::container::chain::Chain;
use crate::parser::ContainerKind;

/// A named LIFO or FIFO container holding elements of one type.
#[derive(Debug)]
pub struct Container<T> {
    kind: ContainerKind,
    chain: Chain<T>,
    created_at: DateTime<Utc>,
}

impl<T> Container<T> {
    /// Create an empty container with the given name and access discipline.
    pub fn new(name: String, kind: ContainerKind) -> Self {
        Self {
            kind,
            chain: Chain::new(name),
            created_at: Utc::now(),
        }
    }

    /// Insert a value: at the front for a stack, at the back for a queue.
    pub fn push(&mut self, value: T) {
        match self.kind {
            ContainerKind::Stack => self.chain.push_front(value),
            ContainerKind::Queue => self.chain.push_back(value),
        }
    }

    /// Remove and return the front value. `None` means the container is
    /// empty; no value is ever fabricated.
    pub fn pop(&mut self) -> Option<T> {
        self.chain.pop_front()
    }

    /// True iff the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// The container's immutable name.
    pub fn name(&self) -> &str {
        self.chain.name()
    }

    /// The access discipline (stack or queue).
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// When the container was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Container::new("i1".to_string(), ContainerKind::Stack);
        for v in [1, 2, 3, 4, 5] {
            stack.push(v);
        }
        for expected in [5, 4, 3, 2, 1] {
            assert_eq!(stack.pop(), Some(expected));
        }
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Container::new("q1".to_string(), ContainerKind::Queue);
        for v in [1, 2, 3, 4, 5] {
            queue.push(v);
        }
        for expected in [1, 2, 3, 4, 5] {
            assert_eq!(queue.pop(), Some(expected));
        }
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_is_empty_boundaries() {
        let mut stack = Container::new("i1".to_string(), ContainerKind::Stack);
        assert!(stack.is_empty());
        stack.push(10);
        assert!(!stack.is_empty());
        stack.push(20);
        assert!(!stack.is_empty());
        stack.pop();
        assert!(!stack.is_empty());
        stack.pop();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_returns_none_and_stays_empty() {
        let mut queue: Container<String> = Container::new("s1".to_string(), ContainerKind::Queue);
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_metadata() {
        let stack: Container<f64> = Container::new("d1".to_string(), ContainerKind::Stack);
        assert_eq!(stack.name(), "d1");
        assert_eq!(stack.kind(), ContainerKind::Stack);
        assert!(stack.created_at() <= Utc::now());
    }
}
