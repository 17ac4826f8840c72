//! Core State trait for state machine states.
//!
//! States are opaque tokens to the engine: it only compares and hashes them.
//! The name is used for logging and error messages.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. States identify one node of the state graph and
/// carry no structure beyond equality.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition keys
/// - `Eq` + `Hash`: transitions keyed by state pairs live in a hash map
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: guards may observe states from worker threads
///
/// `String` and `&'static str` implement `State` directly. For enums, see
/// [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// assert_eq!("draft".name(), "draft");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn string_states_name_themselves() {
        assert_eq!(String::from("review").name(), "review");
        assert_eq!("published".name(), "published");
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Processing;
        let state2 = TestState::Processing;
        let state3 = TestState::Complete;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }

    #[test]
    fn equal_states_hash_together() {
        let mut seen = HashSet::new();
        seen.insert(String::from("draft"));
        seen.insert("draft".to_string());

        assert_eq!(seen.len(), 1);
    }
}
