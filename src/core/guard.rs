//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions of the subject and the goal state. Every
//! guard registered for a transition must pass for the transition to be
//! permitted.

use super::subject::Subject;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type Predicate<Sub> = dyn Fn(&Sub, &<Sub as Subject>::State) -> bool + Send + Sync;

/// Predicate that determines if a transition can execute.
///
/// The engine treats guards as pure: it does not sequence or limit what a
/// guard does internally, and under concurrent evaluation guards for the
/// same transition may run in any order. Cloning a guard shares the
/// underlying closure.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Guard, Subject};
///
/// struct Account {
///     status: &'static str,
///     balance: i64,
/// }
///
/// impl Subject for Account {
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
///
/// let solvent = Guard::new(|account: &Account, _goal: &&'static str| account.balance >= 0)
///     .named("solvent");
///
/// let account = Account { status: "open", balance: 10 };
/// assert!(solvent.check(&account, &"closed"));
/// assert_eq!(solvent.label(), Some("solvent"));
/// ```
pub struct Guard<Sub: Subject> {
    predicate: Arc<Predicate<Sub>>,
    label: Option<Cow<'static, str>>,
}

impl<Sub: Subject> Guard<Sub> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate must be thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Sub, &Sub::State) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            label: None,
        }
    }

    /// Guard that passes only while the subject is in `origin`.
    ///
    /// This is the guard [`Ruleset::add_transition`](crate::rules::Ruleset::add_transition)
    /// registers for a plain edge.
    pub fn origin(origin: Sub::State) -> Self {
        Self::new(move |subject: &Sub, _goal: &Sub::State| subject.current_state() == origin)
            .named("origin")
    }

    /// Attach a label used in denials and log events.
    pub fn named(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Evaluate the predicate for `subject` moving to `goal`.
    pub fn check(&self, subject: &Sub, goal: &Sub::State) -> bool {
        (self.predicate)(subject, goal)
    }
}

impl<Sub: Subject> Clone for Guard<Sub> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            label: self.label.clone(),
        }
    }
}

impl<Sub: Subject> fmt::Debug for Guard<Sub> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticket {
        status: &'static str,
        priority: u8,
    }

    impl Subject for Ticket {
        type State = &'static str;

        fn current_state(&self) -> Self::State {
            self.status
        }

        fn set_state(&mut self, state: Self::State) {
            self.status = state;
        }
    }

    #[test]
    fn guard_sees_subject_and_goal() {
        let guard = Guard::new(|t: &Ticket, goal: &&'static str| t.priority > 2 || *goal != "urgent");
        let low = Ticket { status: "open", priority: 1 };
        let high = Ticket { status: "open", priority: 5 };

        assert!(guard.check(&low, &"closed"));
        assert!(!guard.check(&low, &"urgent"));
        assert!(guard.check(&high, &"urgent"));
    }

    #[test]
    fn origin_guard_matches_current_state_only() {
        let guard = Guard::<Ticket>::origin("open");

        assert!(guard.check(&Ticket { status: "open", priority: 0 }, &"closed"));
        assert!(!guard.check(&Ticket { status: "closed", priority: 0 }, &"closed"));
        assert_eq!(guard.label(), Some("origin"));
    }

    #[test]
    fn guard_is_deterministic() {
        let ticket = Ticket { status: "open", priority: 3 };
        let guard = Guard::new(|t: &Ticket, _: &&'static str| t.priority % 2 == 1);

        let result1 = guard.check(&ticket, &"closed");
        let result2 = guard.check(&ticket, &"closed");

        assert_eq!(result1, result2);
    }

    #[test]
    fn clones_share_the_predicate() {
        let guard = Guard::new(|t: &Ticket, _: &&'static str| t.priority == 0).named("idle");
        let copy = guard.clone();
        let ticket = Ticket { status: "open", priority: 0 };

        assert_eq!(guard.check(&ticket, &"closed"), copy.check(&ticket, &"closed"));
        assert_eq!(copy.label(), Some("idle"));
    }

    #[test]
    fn unnamed_guard_has_no_label() {
        let guard = Guard::new(|_: &Ticket, _: &&'static str| true);

        assert_eq!(guard.label(), None);
        assert!(format!("{guard:?}").contains("Guard"));
    }
}
