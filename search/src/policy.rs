//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Engine configuration for one search run.
///
/// The default policy is plain A*: no expansion budget, standard
/// decrease-key re-insertion, and cost validation enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// When a generated child is pushed onto the frontier.
    pub reinsert: ReinsertPolicy,
    /// Reject negative action costs and negative heuristic estimates.
    pub validate_costs: bool,
}

impl SearchPolicy {
    /// Check the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion budget,
    /// which could never expand the root.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Builder: set an expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Builder: set the re-insertion rule.
    #[must_use]
    pub fn with_reinsert(mut self, reinsert: ReinsertPolicy) -> Self {
        self.reinsert = reinsert;
        self
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            reinsert: ReinsertPolicy::DecreaseKey,
            validate_costs: true,
        }
    }
}

/// Rule deciding whether a freshly generated child goes onto the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReinsertPolicy {
    /// Push when the child state is absent from the frontier, or when the
    /// new f-value is strictly below the best f-value queued for it.
    DecreaseKey,
    /// Push when the child state is absent from the frontier, or when the
    /// new f-value is below the child's own path cost.
    ///
    /// Compares an f-value against a g-value. With non-negative heuristics
    /// the second clause never holds, so a cheaper route to a queued state
    /// is dropped and the returned solution can be suboptimal. Kept only to
    /// reproduce results from solvers that used this rule.
    LegacyCostComparison,
}

impl ReinsertPolicy {
    /// Apply the rule. `queued` is the best f-value already on the frontier
    /// for the child state, if any.
    #[must_use]
    pub fn admits(self, queued: Option<i64>, f: i64, g: i64) -> bool {
        match (self, queued) {
            (_, None) => true,
            (ReinsertPolicy::DecreaseKey, Some(best)) => f < best,
            (ReinsertPolicy::LegacyCostComparison, Some(_)) => f < g,
        }
    }
}
