//! The capability a governed entity exposes to the engine.

use super::state::State;

/// An entity whose state is governed by a [`Machine`](crate::machine::Machine).
///
/// The engine never constructs a subject. It reads the current state before
/// every decision and writes the goal state only after a transition has been
/// permitted. The subject is responsible for holding a valid initial state
/// before first use.
///
/// `Sync` is required because guards may observe the subject from worker
/// threads under [`EvaluationStrategy::Concurrent`](crate::rules::EvaluationStrategy).
/// The strategy is chosen at runtime through
/// [`RulesetConfig`](crate::rules::RulesetConfig), so the bound applies to
/// sequential rulesets as well. Subjects holding `Cell` or `RefCell` state
/// should use atomics or a `Mutex` instead.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Subject;
///
/// struct Document {
///     status: &'static str,
/// }
///
/// impl Subject for Document {
///     type State = &'static str;
///
///     fn current_state(&self) -> Self::State {
///         self.status
///     }
///
///     fn set_state(&mut self, state: Self::State) {
///         self.status = state;
///     }
/// }
/// ```
pub trait Subject: Sync {
    type State: State;

    fn current_state(&self) -> Self::State;

    /// Accepts any value; the engine performs no validation of its own.
    fn set_state(&mut self, state: Self::State);
}
