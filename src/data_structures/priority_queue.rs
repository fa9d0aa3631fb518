use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `BinaryHeap`, used by the priority search and k-heap sort.
///
/// Entries are ordered by priority first and by value second, so equal priorities
/// come out in ascending value order.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Reverse((priority, value)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, value))| (value, priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, &P)> {
        self.heap.peek().map(|Reverse((priority, value))| (value, priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Extend<(V, P)> for MinPriorityQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Debug,
{
    fn extend<I: IntoIterator<Item = (V, P)>>(&mut self, iter: I) {
        self.heap
            .extend(iter.into_iter().map(|(value, priority)| Reverse((priority, value))));
    }
}
