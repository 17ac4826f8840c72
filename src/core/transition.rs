//! Transition keys identifying edges of the state graph.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An edge of the state graph, from `origin` to `exit`.
///
/// Transitions are immutable values with structural equality, used as keys
/// of a [`Ruleset`](crate::rules::Ruleset).
///
/// # Example
///
/// ```rust
/// use turnstile::core::Transition;
///
/// let edge = Transition::new("draft", "review");
/// assert_eq!(edge, Transition::from(("draft", "review")));
/// assert_eq!(edge.to_string(), "draft -> review");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S> {
    origin: S,
    exit: S,
}

impl<S> Transition<S> {
    pub fn new(origin: S, exit: S) -> Self {
        Self { origin, exit }
    }

    /// The state the transition leaves.
    pub fn origin(&self) -> &S {
        &self.origin
    }

    /// The state the transition enters.
    pub fn exit(&self) -> &S {
        &self.exit
    }
}

impl<S> From<(S, S)> for Transition<S> {
    fn from((origin, exit): (S, S)) -> Self {
        Self::new(origin, exit)
    }
}

impl<S: State> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin.name(), self.exit.name())
    }
}
