//! Transition rules and their evaluation.
//!
//! A [`Ruleset`] maps each [`Transition`] to the guards that must all pass
//! for it to be permitted. Registration and evaluation both take `&self`, so
//! a ruleset shared behind an `Arc` can gain rules at any point in its
//! lifetime, including while other threads are evaluating it.
//!
//! # Example
//!
//! ```rust
//! use turnstile::core::{Guard, Subject, Transition};
//! use turnstile::rules::Ruleset;
//!
//! struct Door {
//!     state: &'static str,
//!     locked: bool,
//! }
//!
//! impl Subject for Door {
//!     type State = &'static str;
//!
//!     fn current_state(&self) -> Self::State {
//!         self.state
//!     }
//!
//!     fn set_state(&mut self, state: Self::State) {
//!         self.state = state;
//!     }
//! }
//!
//! let rules = Ruleset::<Door>::new();
//! rules.add_transition(Transition::new("closed", "open"));
//! rules.add_rule(
//!     Transition::new("closed", "open"),
//!     [Guard::new(|door: &Door, _: &&'static str| !door.locked).named("unlocked")],
//! );
//!
//! assert!(rules.permitted(&Door { state: "closed", locked: false }, &"open"));
//! assert!(!rules.permitted(&Door { state: "closed", locked: true }, &"open"));
//! assert!(!rules.permitted(&Door { state: "open", locked: false }, &"closed"));
//! ```

mod config;
mod denial;
mod evaluation;

pub use config::{ConfigError, EvaluationStrategy, RulesetConfig};
pub use denial::Denial;

use crate::core::{Guard, State, Subject, Transition};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Registry mapping transitions to the guards that gate them.
///
/// A transition with no entry is forbidden. A registered transition is
/// permitted only when every one of its guards passes; guard order is
/// insertion order, but only the conjunction is guaranteed.
pub struct Ruleset<Sub: Subject> {
    rules: RwLock<HashMap<Transition<Sub::State>, Vec<Guard<Sub>>>>,
    config: RulesetConfig,
}

impl<Sub: Subject> Ruleset<Sub> {
    /// Create an empty ruleset with sequential evaluation.
    pub fn new() -> Self {
        Self::with_config(RulesetConfig::default())
    }

    pub fn with_config(config: RulesetConfig) -> Self {
        Self {
            rules: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RulesetConfig {
        &self.config
    }

    /// Append `guards` to the sequence for `transition`.
    ///
    /// Guards accumulate across calls and are never deduplicated. Passing no
    /// guards leaves the ruleset untouched, so an unregistered transition
    /// stays forbidden.
    pub fn add_rule<I>(&self, transition: Transition<Sub::State>, guards: I)
    where
        I: IntoIterator<Item = Guard<Sub>>,
    {
        let mut guards = guards.into_iter().peekable();
        if guards.peek().is_none() {
            return;
        }

        let mut rules = self.rules.write();
        let entry = rules.entry(transition.clone()).or_default();
        entry.extend(guards);
        tracing::trace!(
            from = transition.origin().name(),
            to = transition.exit().name(),
            guards = entry.len(),
            "rule registered"
        );
    }

    /// Register a plain edge: one guard requiring the subject to currently be
    /// in `transition.origin()`.
    pub fn add_transition(&self, transition: Transition<Sub::State>) {
        let guard = Guard::origin(transition.origin().clone());
        self.add_rule(transition, [guard]);
    }

    /// Whether `subject` may move from its current state to `goal`.
    pub fn permitted(&self, subject: &Sub, goal: &Sub::State) -> bool {
        self.check(subject, goal).is_ok()
    }

    /// Decide like [`permitted`](Self::permitted), reporting why a transition
    /// was refused.
    pub fn check(&self, subject: &Sub, goal: &Sub::State) -> Result<(), Denial> {
        let attempt = Transition::new(subject.current_state(), goal.clone());

        let Some(guards) = self.guards_for(&attempt) else {
            tracing::debug!(
                from = attempt.origin().name(),
                to = attempt.exit().name(),
                "no rule registered for transition"
            );
            return Err(no_rule(&attempt));
        };

        match evaluation::first_rejection(self.config.strategy, &guards, subject, goal) {
            None => Ok(()),
            Some(index) => {
                let denial = rejected(&attempt, index, &guards[index]);
                tracing::debug!(
                    from = attempt.origin().name(),
                    to = attempt.exit().name(),
                    guards = guards.len(),
                    "{denial}"
                );
                Err(denial)
            }
        }
    }

    /// Evaluate every guard without short-circuiting and accumulate every
    /// rejection, in registration order.
    pub fn audit(&self, subject: &Sub, goal: &Sub::State) -> Validation<(), NonEmptyVec<Denial>> {
        let attempt = Transition::new(subject.current_state(), goal.clone());

        let Some(guards) = self.guards_for(&attempt) else {
            return Validation::fail(no_rule(&attempt));
        };

        let checks: Vec<Validation<(), NonEmptyVec<Denial>>> =
            evaluation::all_outcomes(self.config.strategy, &guards, subject, goal)
                .into_iter()
                .enumerate()
                .map(|(index, passed)| {
                    if passed {
                        Validation::success(())
                    } else {
                        Validation::fail(rejected(&attempt, index, &guards[index]))
                    }
                })
                .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn contains(&self, transition: &Transition<Sub::State>) -> bool {
        self.rules.read().contains_key(transition)
    }

    /// Number of guards registered for `transition`.
    pub fn guard_count(&self, transition: &Transition<Sub::State>) -> usize {
        self.rules.read().get(transition).map_or(0, Vec::len)
    }

    /// Every registered transition, in no particular order.
    pub fn transitions(&self) -> Vec<Transition<Sub::State>> {
        self.rules.read().keys().cloned().collect()
    }

    // Snapshot taken under the read lock; guards run after it is released.
    fn guards_for(&self, transition: &Transition<Sub::State>) -> Option<Vec<Guard<Sub>>> {
        self.rules.read().get(transition).cloned()
    }
}

fn no_rule<S: State>(attempt: &Transition<S>) -> Denial {
    Denial::NoRule {
        from: attempt.origin().name().to_string(),
        to: attempt.exit().name().to_string(),
    }
}

fn rejected<Sub: Subject>(
    attempt: &Transition<Sub::State>,
    index: usize,
    guard: &Guard<Sub>,
) -> Denial {
    Denial::GuardRejected {
        from: attempt.origin().name().to_string(),
        to: attempt.exit().name().to_string(),
        guard: guard
            .label()
            .map_or_else(|| format!("#{index}"), str::to_string),
    }
}

impl<Sub: Subject> Default for Ruleset<Sub> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sub: Subject> Clone for Ruleset<Sub> {
    fn clone(&self) -> Self {
        Self {
            rules: RwLock::new(self.rules.read().clone()),
            config: self.config.clone(),
        }
    }
}

impl<Sub: Subject> fmt::Debug for Ruleset<Sub> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ruleset")
            .field("transitions", &self.rules.read().len())
            .field("config", &self.config)
            .finish()
    }
}
