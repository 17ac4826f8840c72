//! Ruleset configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the guards of a single transition are evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStrategy {
    /// Evaluate on the calling thread in registration order, stopping at the
    /// first rejection.
    #[default]
    Sequential,

    /// Evaluate every guard on its own scoped thread and collect results in
    /// arrival order. All guard threads are joined before the decision is
    /// returned.
    Concurrent,
}

/// Errors raised while loading a [`RulesetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ruleset configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Configuration for a [`Ruleset`](super::Ruleset).
///
/// Missing fields fall back to their defaults.
///
/// ```rust
/// use turnstile::rules::{EvaluationStrategy, RulesetConfig};
///
/// let config = RulesetConfig::from_json(r#"{ "strategy": "concurrent" }"#).unwrap();
/// assert_eq!(config.strategy, EvaluationStrategy::Concurrent);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    pub strategy: EvaluationStrategy,
}

impl RulesetConfig {
    pub fn sequential() -> Self {
        Self {
            strategy: EvaluationStrategy::Sequential,
        }
    }

    pub fn concurrent() -> Self {
        Self {
            strategy: EvaluationStrategy::Concurrent,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
