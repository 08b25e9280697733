//! Solver configuration: step costs, heuristic selection and search policy.
//!
//! Sources are layered: defaults, then an optional JSON file, then the
//! `QUEST_HEURISTIC` environment variable. CLI flags are applied last by the
//! binary.

use std::env;
use std::path::{Path, PathBuf};

use quest_search::{Direction, HeuristicKind, SearchPolicy, StepCosts};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the configured heuristic.
pub const ENV_HEURISTIC: &str = "QUEST_HEURISTIC";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {var}: {detail}")]
    Env { var: &'static str, detail: String },
    #[error("step cost for {direction} must be non-negative, got {cost}")]
    NegativeStepCost { direction: Direction, cost: i64 },
    #[error("heuristic {heuristic} needs every step cost >= 1, cheapest is {min_cost}")]
    InadmissibleHeuristic {
        heuristic: HeuristicKind,
        min_cost: i64,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuestConfig {
    pub step_costs: StepCosts,
    pub heuristic: HeuristicKind,
    pub policy: SearchPolicy,
}

impl QuestConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON or unknown fields,
    /// otherwise the errors of [`QuestConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the errors of [`QuestConfig::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Env`] if `QUEST_HEURISTIC` names no heuristic.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`QuestConfig::apply_env`].
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_HEURISTIC) {
            self.heuristic = raw.parse().map_err(|detail| ConfigError::Env {
                var: ENV_HEURISTIC,
                detail,
            })?;
        }
        Ok(())
    }

    /// Reject negative step costs, and step costs below 1 under the
    /// `single` heuristic, which counts every step as 1.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeStepCost`] for the first offending
    /// direction in [`Direction::ALL`] order, then
    /// [`ConfigError::InadmissibleHeuristic`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(direction) = Direction::ALL
            .into_iter()
            .find(|&d| self.step_costs[d] < 0)
        {
            return Err(ConfigError::NegativeStepCost {
                direction,
                cost: self.step_costs[direction],
            });
        }
        let min_cost = self.step_costs.min();
        if self.heuristic == HeuristicKind::Single && min_cost < 1 {
            return Err(ConfigError::InadmissibleHeuristic {
                heuristic: self.heuristic,
                min_cost,
            });
        }
        Ok(())
    }
}
