use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier of `(tentative distance, node)` entries
///
/// Entries are never updated in place. A node whose distance improves is pushed
/// again and the older entry becomes stale; callers discard stale entries when
/// they are popped.
#[derive(Debug, Clone)]
pub struct Frontier<W>
where
    W: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W> Frontier<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty frontier with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a node with its tentative distance
    pub fn push(&mut self, distance: W, node: usize) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(W, usize)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn peek(&self) -> Option<(W, usize)> {
        self.heap.peek().map(|Reverse(entry)| *entry)
    }
}

impl<W> Default for Frontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
