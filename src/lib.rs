//! Turnstile: a guard-driven finite state machine core
//!
//! Turnstile decides whether a subject may move from its current state to a
//! requested goal state, and commits the move when it may. Decisions come
//! from a ruleset that maps each transition to a set of guards; a transition
//! is permitted only when it is registered and every one of its guards
//! passes.
//!
//! # Core Concepts
//!
//! - **State**: opaque, comparable tokens via the `State` trait
//! - **Transition**: an `(origin, exit)` edge of the state graph
//! - **Guard**: predicates over the subject and the goal state
//! - **Subject**: the entity being governed, exposing get/set of its state
//! - **Ruleset**: registry of transitions and guards, evaluated sequentially
//!   or concurrently
//! - **Machine**: a ruleset paired with a subject
//!
//! # Example
//!
//! ```rust
//! use turnstile::core::{Guard, Subject, Transition};
//! use turnstile::machine::{Machine, TransitionError};
//! use turnstile::rules::Ruleset;
//!
//! struct Article {
//!     status: String,
//! }
//!
//! impl Subject for Article {
//!     type State = String;
//!
//!     fn current_state(&self) -> String {
//!         self.status.clone()
//!     }
//!
//!     fn set_state(&mut self, state: String) {
//!         self.status = state;
//!     }
//! }
//!
//! let rules = Ruleset::<Article>::new();
//! rules.add_transition(Transition::new("draft".into(), "review".into()));
//! rules.add_rule(
//!     Transition::new("review".into(), "published".into()),
//!     [Guard::new(|_: &Article, _: &String| true)],
//! );
//!
//! let mut machine = Machine::new(rules, Article { status: "draft".into() });
//!
//! machine.transition("review".into()).unwrap();
//! machine.transition("published".into()).unwrap();
//! assert_eq!(
//!     machine.transition("draft".into()),
//!     Err(TransitionError::InvalidTransition)
//! );
//! assert_eq!(machine.current_state(), "published");
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod rules;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{Guard, State, Subject, Transition};
pub use machine::{Machine, TransitionError};
pub use rules::{Denial, EvaluationStrategy, Ruleset, RulesetConfig};
