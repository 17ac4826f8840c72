//! A machine pairs a ruleset with the subject it governs.

mod error;

pub use error::TransitionError;

use crate::builder::MachineBuilder;
use crate::core::{State, Subject};
use crate::rules::{Denial, Ruleset};
use std::sync::Arc;

/// Pairing of rules and a subject.
///
/// Both fields are public and may be replaced between calls, for example to
/// swap in a different policy set or to redirect the machine at another
/// subject. The machine keeps no state of its own: every call decides from
/// the subject's current state and the ruleset's current content.
pub struct Machine<Sub: Subject> {
    pub rules: Arc<Ruleset<Sub>>,
    pub subject: Sub,
}

impl<Sub: Subject> Machine<Sub> {
    pub fn new(rules: impl Into<Arc<Ruleset<Sub>>>, subject: Sub) -> Self {
        Self {
            rules: rules.into(),
            subject,
        }
    }

    pub fn builder() -> MachineBuilder<Sub> {
        MachineBuilder::new()
    }

    pub fn current_state(&self) -> Sub::State {
        self.subject.current_state()
    }

    /// Whether a transition to `goal` would currently be permitted.
    pub fn can_transition(&self, goal: &Sub::State) -> bool {
        self.rules.permitted(&self.subject, goal)
    }

    /// Attempt to move the subject to `goal`.
    ///
    /// On success the subject's `set_state` is called exactly once with
    /// `goal`. On failure the subject is not touched.
    pub fn transition(&mut self, goal: Sub::State) -> Result<(), TransitionError> {
        Ok(self.try_transition(goal)?)
    }

    /// Like [`transition`](Self::transition), but reports why a refused
    /// transition was refused.
    pub fn try_transition(&mut self, goal: Sub::State) -> Result<(), Denial> {
        self.rules.check(&self.subject, &goal)?;

        tracing::debug!(to = goal.name(), "transition committed");
        self.subject.set_state(goal);
        Ok(())
    }

    pub fn into_subject(self) -> Sub {
        self.subject
    }
}
