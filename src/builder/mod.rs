//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent machine builder, helpers for assembling
//! rulesets, and a macro for declaring state enums with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{Subject, Transition};
use crate::rules::{Ruleset, RulesetConfig};

/// Create a ruleset with one plain edge per `(origin, exit)` pair.
///
/// Each edge is registered with [`Ruleset::add_transition`], so further
/// guards can be added to any of them afterwards.
///
/// # Example
///
/// ```
/// use turnstile::builder::edge_ruleset;
/// use turnstile::core::{Subject, Transition};
/// use turnstile::rules::{Ruleset, RulesetConfig};
/// use turnstile::state_enum;
///
/// state_enum! {
///     enum Phase {
///         Start,
///         Middle,
///         End,
///     }
/// }
///
/// struct Job(Phase);
///
/// impl Subject for Job {
///     type State = Phase;
///
///     fn current_state(&self) -> Phase {
///         self.0
///     }
///
///     fn set_state(&mut self, state: Phase) {
///         self.0 = state;
///     }
/// }
///
/// let rules: Ruleset<Job> = edge_ruleset(
///     RulesetConfig::default(),
///     [(Phase::Start, Phase::Middle), (Phase::Middle, Phase::End)],
/// );
///
/// assert!(rules.contains(&Transition::new(Phase::Start, Phase::Middle)));
/// assert!(rules.permitted(&Job(Phase::Middle), &Phase::End));
/// assert!(!rules.permitted(&Job(Phase::Start), &Phase::End));
/// ```
pub fn edge_ruleset<Sub, I>(config: RulesetConfig, edges: I) -> Ruleset<Sub>
where
    Sub: Subject,
    I: IntoIterator<Item = (Sub::State, Sub::State)>,
{
    let rules = Ruleset::with_config(config);
    for edge in edges {
        rules.add_transition(Transition::from(edge));
    }
    rules
}
