use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of vertex positions keyed by tentative distance.
///
/// Entries are ordered by `(priority, vertex)`, so equal priorities pop in
/// ascending vertex position. There is no decrease-key: callers push again
/// and skip stale entries when they surface.
#[derive(Debug)]
pub struct BinaryHeapWrapper<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
    pushed: usize,
}

impl<P> BinaryHeapWrapper<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries currently queued, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes since creation
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Queues `vertex` with the given priority
    pub fn push(&mut self, vertex: usize, priority: P) {
        self.pushed += 1;
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (*vertex, *priority))
    }
}

impl<P> Default for BinaryHeapWrapper<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
