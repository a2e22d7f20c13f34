//! Node-owning sequential chain shared by stacks and queues.
//!
//! A `Chain` is a singly linked list whose nodes live in an index arena: each
//! slot is owned by the chain itself, links are slot indices, and vacated
//! slots are recycled through a free list. This keeps every primitive O(1)
//! without reference counting or aliasing between nodes.

/// One linked cell: an element value and the index of the next cell.
#[derive(Debug)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant,
}

/// A named, singly linked chain supporting insertion at either end and
/// removal at the front.
///
/// Invariant: `head` and `tail` are both `None` exactly when the chain is
/// empty, and the path from `head` along `next` reaches `tail` in `len` hops
/// with no cycles.
#[derive(Debug)]
pub struct Chain<T> {
    name: String,
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Chain<T> {
    /// Create an empty chain. The name is its immutable identity.
    pub fn new(name: String) -> Self {
        Self {
            name,
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Node { value, next };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Insert `value` at the front of the chain.
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Insert `value` at the back of the chain.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value, None);
        match self.tail {
            Some(tail_idx) => {
                if let Slot::Occupied(node) = &mut self.slots[tail_idx] {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Remove and return the front element, or `None` if the chain is empty.
    /// The vacated slot is released back to the free list immediately.
    pub fn pop_front(&mut self) -> Option<T> {
        let idx = self.head?;
        let slot = std::mem::replace(&mut self.slots[idx], Slot::Vacant);
        let Slot::Occupied(node) = slot else {
            unreachable!("head index points at a vacant slot");
        };
        self.free.push(idx);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// True iff the chain holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of elements currently in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The chain's immutable name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chain_is_empty() {
        let chain: Chain<i64> = Chain::new("i1".to_string());
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert_eq!(chain.name(), "i1");
    }

    #[test]
    fn test_push_front_pop_front() {
        let mut chain = Chain::new("i1".to_string());
        chain.push_front(1);
        chain.push_front(2);
        chain.push_front(3);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.pop_front(), Some(3));
        assert_eq!(chain.pop_front(), Some(2));
        assert_eq!(chain.pop_front(), Some(1));
        assert_eq!(chain.pop_front(), None);
    }

    #[test]
    fn test_push_back_pop_front() {
        let mut chain = Chain::new("q1".to_string());
        chain.push_back(1);
        chain.push_back(2);
        chain.push_back(3);
        assert_eq!(chain.pop_front(), Some(1));
        assert_eq!(chain.pop_front(), Some(2));
        assert_eq!(chain.pop_front(), Some(3));
        assert!(chain.is_empty());
    }

    #[test]
    fn test_single_element_front_and_back_agree() {
        let mut front = Chain::new("a".to_string());
        let mut back = Chain::new("b".to_string());
        front.push_front(42);
        back.push_back(42);
        assert_eq!(front.pop_front(), Some(42));
        assert_eq!(back.pop_front(), Some(42));
        assert!(front.is_empty());
        assert!(back.is_empty());
    }

    #[test]
    fn test_interleaved_ends() {
        let mut chain = Chain::new("m".to_string());
        chain.push_back(2);
        chain.push_front(1);
        chain.push_back(3);
        assert_eq!(chain.pop_front(), Some(1));
        assert_eq!(chain.pop_front(), Some(2));
        assert_eq!(chain.pop_front(), Some(3));
    }

    #[test]
    fn test_empty_after_drain_then_reusable() {
        let mut chain = Chain::new("r".to_string());
        chain.push_back(1);
        assert_eq!(chain.pop_front(), Some(1));
        assert!(chain.is_empty());
        // tail must have been cleared; push_back again must not link to a
        // stale index
        chain.push_back(2);
        chain.push_back(3);
        assert_eq!(chain.pop_front(), Some(2));
        assert_eq!(chain.pop_front(), Some(3));
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut chain = Chain::new("r".to_string());
        for round in 0..10 {
            chain.push_front(round);
            assert_eq!(chain.pop_front(), Some(round));
        }
        // one slot was enough for the whole run
        assert_eq!(chain.slots.len(), 1);
    }

    #[test]
    fn test_text_elements() {
        let mut chain = Chain::new("s1".to_string());
        chain.push_back("hello".to_string());
        chain.push_back("world".to_string());
        assert_eq!(chain.pop_front().as_deref(), Some("hello"));
        assert_eq!(chain.pop_front().as_deref(), Some("world"));
    }
}
