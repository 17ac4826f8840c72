//! Reasons a transition was refused.

use thiserror::Error;

/// Why a ruleset refused a transition.
///
/// This is the detailed form of
/// [`TransitionError::InvalidTransition`](crate::machine::TransitionError),
/// which every denial converts into.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Denial {
    #[error("no rule registered for transition '{from}' -> '{to}'")]
    NoRule { from: String, to: String },

    #[error("guard {guard} rejected transition '{from}' -> '{to}'")]
    GuardRejected {
        from: String,
        to: String,
        /// The guard's label, or `#<index>` in registration order.
        guard: String,
    },
}

impl Denial {
    pub fn is_no_rule(&self) -> bool {
        matches!(self, Self::NoRule { .. })
    }
}
