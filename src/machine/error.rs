//! Transition errors reported by a machine.

use crate::rules::Denial;
use thiserror::Error;

/// Errors that can occur when driving a machine.
///
/// Deliberately coarse: a missing rule and a rejecting guard look the same.
/// Use [`Machine::try_transition`](super::Machine::try_transition) for the
/// cause.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("invalid transition")]
    InvalidTransition,
}

impl From<Denial> for TransitionError {
    fn from(_: Denial) -> Self {
        Self::InvalidTransition
    }
}
