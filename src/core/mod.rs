//! Core state machine types.
//!
//! This module contains the value types the engine is built from:
//! - State definitions via the `State` trait
//! - Transition keys identifying edges of the state graph
//! - Guard predicates for transition control
//! - The `Subject` capability the engine drives

mod guard;
mod state;
mod subject;
mod transition;

pub use guard::Guard;
pub use state::State;
pub use subject::Subject;
pub use transition::Transition;
