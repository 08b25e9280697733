//! Search-tree nodes and the frontier ordering key.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Shared handle to a node, as stored in the frontier and returned by the engine.
pub type NodeRef<S, A> = Rc<SearchNode<S, A>>;

/// An immutable node of the search tree.
///
/// Nodes link backward to their parent through `Rc`, so a node keeps its
/// whole root path alive and nothing else. Parent links point strictly
/// toward the root; cycles cannot form.
///
/// Equality and hashing delegate to the wrapped state: two nodes reaching
/// the same state by different paths compare equal.
#[derive(Debug)]
pub struct SearchNode<S, A> {
    state: S,
    parent: Option<Rc<SearchNode<S, A>>>,
    action: Option<A>,
    cumulative_cost: i64,
    depth: u32,
}

impl<S, A> SearchNode<S, A> {
    /// Construct a node. `depth` is derived from the parent (root = 0).
    pub fn new(
        state: S,
        parent: Option<Rc<SearchNode<S, A>>>,
        action: Option<A>,
        cumulative_cost: i64,
    ) -> Self {
        let depth = parent.as_ref().map_or(0, |p| p.depth + 1);
        Self {
            state,
            parent,
            action,
            cumulative_cost,
            depth,
        }
    }

    /// Root node: no parent, no action, zero cost.
    pub fn root(state: S) -> Self {
        Self::new(state, None, None, 0)
    }

    /// Node reached from `parent` by `action`, at total path cost `cumulative_cost`.
    pub fn child(parent: &Rc<SearchNode<S, A>>, state: S, action: A, cumulative_cost: i64) -> Self {
        Self::new(state, Some(Rc::clone(parent)), Some(action), cumulative_cost)
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Rc<SearchNode<S, A>>> {
        self.parent.as_ref()
    }

    /// The action that produced this node from its parent (`None` for root).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Path cost from the root (the g-value).
    #[must_use]
    pub fn cumulative_cost(&self) -> i64 {
        self.cumulative_cost
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate from this node up to the root, this node first.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { next: Some(self) }
    }

    /// Actions from the root to this node. Empty at the root.
    #[must_use]
    pub fn solution(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions: Vec<A> = self
            .ancestors()
            .filter_map(|n| n.action.clone())
            .collect();
        actions.reverse();
        actions
    }

    /// States from the root to this node, both inclusive.
    #[must_use]
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut states: Vec<S> = self.ancestors().map(|n| n.state.clone()).collect();
        states.reverse();
        states
    }
}

/// Iterator over a node and its ancestors. See [`SearchNode::ancestors`].
pub struct Ancestors<'a, S, A> {
    next: Option<&'a SearchNode<S, A>>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a SearchNode<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}

impl<S: Hash, A> Hash for SearchNode<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

// Unlink the parent chain iteratively; the default drop recurses once per
// ancestor and overflows the stack on very deep solutions.
impl<S, A> Drop for SearchNode<S, A> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => next = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// The frontier ordering key: `(priority, sequence)`.
///
/// Lower priority first; equal priorities leave in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: i64,
    pub sequence: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
    }
}
