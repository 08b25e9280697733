//! Min-priority frontier with stable tie-breaking and a state index.
//!
//! Entries are ordered by [`FrontierKey`]: priority first, then insertion
//! sequence, so equal priorities leave in FIFO order and a search run is
//! reproducible. A side index keyed by state answers membership and
//! best-priority queries in O(1) without scanning the heap.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::SearchError;
use crate::node::{FrontierKey, NodeRef};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest priority first).
struct FrontierEntry<S, A> {
    key: Reverse<FrontierKey>,
    node: NodeRef<S, A>,
}

impl<S, A> PartialEq for FrontierEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for FrontierEntry<S, A> {}

impl<S, A> PartialOrd for FrontierEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for FrontierEntry<S, A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priorities of the live entries for one state, smallest on top.
type LivePriorities = BinaryHeap<Reverse<i64>>;

/// Priority frontier over search nodes.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best entry
/// - A `HashMap` from state to the priorities of its live entries
///
/// A state may have several live entries (the engine re-pushes a state when
/// it finds a cheaper route to it). Stale entries are filtered by the
/// caller's closed set on pop.
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<FrontierEntry<S, A>>,
    index: HashMap<S, LivePriorities>,
    next_sequence: u64,
    high_water: usize,
}

impl<S, A> PriorityFrontier<S, A>
where
    S: Clone + Eq + Hash,
{
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            index: HashMap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Push a node with the given priority. O(log n).
    pub fn push(&mut self, node: NodeRef<S, A>, priority: i64) {
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.index
            .entry(node.state().clone())
            .or_default()
            .push(Reverse(priority));
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the entry with the smallest priority (oldest first on ties).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if the frontier is empty.
    pub fn pop(&mut self) -> Result<(NodeRef<S, A>, i64), SearchError> {
        let entry = self.heap.pop().ok_or(SearchError::EmptyFrontier)?;
        let priority = entry.key.0.priority;
        if let Some(live) = self.index.get_mut(entry.node.state()) {
            // The heap yields a state's entries in ascending priority, so the
            // entry leaving is the smallest one recorded for its state.
            live.pop();
            if live.is_empty() {
                self.index.remove(entry.node.state());
            }
        }
        Ok((entry.node, priority))
    }

    /// Whether at least one live entry holds `state`. O(1).
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Smallest priority among the live entries holding `state`.
    #[must_use]
    pub fn best_priority(&self, state: &S) -> Option<i64> {
        self.index
            .get(state)
            .and_then(|live| live.peek())
            .map(|r| r.0)
    }

    /// Iterate over live entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeRef<S, A>, i64)> + '_ {
        self.heap.iter().map(|e| (&e.node, e.key.0.priority))
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S, A> Default for PriorityFrontier<S, A>
where
    S: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}
