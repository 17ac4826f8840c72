//! Guard evaluation strategies.
//!
//! Concurrent evaluation fans out one scoped thread per guard and fans in
//! through a single unbounded channel read by the caller. The receiver
//! outlives the thread scope and the scope joins every worker, so returning
//! early on a rejection never strands a sender. A guard whose thread cannot
//! be created is evaluated on the calling thread instead.

use super::config::EvaluationStrategy;
use crate::core::{Guard, Subject};
use std::io;
use std::sync::mpsc;
use std::thread;

/// Index of a rejecting guard, or `None` when every guard passes.
///
/// Sequential evaluation reports the first rejection in registration order.
/// Concurrent evaluation reports the first rejection to arrive.
pub(crate) fn first_rejection<Sub: Subject>(
    strategy: EvaluationStrategy,
    guards: &[Guard<Sub>],
    subject: &Sub,
    goal: &Sub::State,
) -> Option<usize> {
    match strategy {
        EvaluationStrategy::Sequential => guards.iter().enumerate().find_map(|(index, guard)| {
            let passed = guard.check(subject, goal);
            tracing::trace!(guard = index, passed, "guard evaluated");
            (!passed).then_some(index)
        }),
        EvaluationStrategy::Concurrent => {
            let (tx, rx) = mpsc::channel();
            thread::scope(|scope| {
                dispatch(scope, &tx, guards, subject, goal);
                drop(tx);
                rx.iter()
                    .find_map(|(index, passed)| (!passed).then_some(index))
            })
        }
    }
}

/// Outcome of every guard, in registration order.
pub(crate) fn all_outcomes<Sub: Subject>(
    strategy: EvaluationStrategy,
    guards: &[Guard<Sub>],
    subject: &Sub,
    goal: &Sub::State,
) -> Vec<bool> {
    match strategy {
        EvaluationStrategy::Sequential => guards
            .iter()
            .enumerate()
            .map(|(index, guard)| {
                let passed = guard.check(subject, goal);
                tracing::trace!(guard = index, passed, "guard evaluated");
                passed
            })
            .collect(),
        EvaluationStrategy::Concurrent => {
            let (tx, rx) = mpsc::channel();
            let mut outcomes = vec![false; guards.len()];
            thread::scope(|scope| {
                dispatch(scope, &tx, guards, subject, goal);
                drop(tx);
                for (index, passed) in rx.iter() {
                    outcomes[index] = passed;
                }
            });
            outcomes
        }
    }
}

fn dispatch<'scope, 'env, Sub: Subject>(
    scope: &'scope thread::Scope<'scope, 'env>,
    tx: &mpsc::Sender<(usize, bool)>,
    guards: &'env [Guard<Sub>],
    subject: &'env Sub,
    goal: &'env Sub::State,
) {
    for (index, guard) in guards.iter().enumerate() {
        let worker_tx = tx.clone();
        let spawned = spawn_guard(scope, move || {
            // The receiver is still alive while the scope runs.
            let _ = worker_tx.send((index, evaluate(index, guard, subject, goal)));
        });

        if let Err(err) = spawned {
            tracing::debug!(guard = index, error = %err, "guard thread unavailable, evaluating inline");
            let _ = tx.send((index, evaluate(index, guard, subject, goal)));
        }
    }
}

fn evaluate<Sub: Subject>(index: usize, guard: &Guard<Sub>, subject: &Sub, goal: &Sub::State) -> bool {
    let passed = guard.check(subject, goal);
    tracing::trace!(guard = index, passed, "guard evaluated");
    passed
}

fn spawn_guard<'scope, 'env, F>(scope: &'scope thread::Scope<'scope, 'env>, work: F) -> io::Result<()>
where
    F: FnOnce() + Send + 'scope,
{
    if spawn_refused() {
        return Err(io::Error::new(io::ErrorKind::WouldBlock, "guard thread budget exhausted"));
    }
    thread::Builder::new()
        .name("turnstile-guard".to_string())
        .spawn_scoped(scope, work)
        .map(drop)
}

#[cfg(not(test))]
fn spawn_refused() -> bool {
    false
}

// Tests cap how many guard threads the calling thread may start.
#[cfg(test)]
thread_local! {
    static SPAWN_BUDGET: std::cell::Cell<Option<usize>> = const { std::cell::Cell::new(None) };
}

#[cfg(test)]
fn spawn_refused() -> bool {
    SPAWN_BUDGET.with(|budget| match budget.get() {
        None => false,
        Some(0) => true,
        Some(left) => {
            budget.set(Some(left - 1));
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct Probe {
        state: &'static str,
    }

    impl Subject for Probe {
        type State = &'static str;

        fn current_state(&self) -> Self::State {
            self.state
        }

        fn set_state(&mut self, state: Self::State) {
            self.state = state;
        }
    }

    fn fixed(result: bool) -> Guard<Probe> {
        Guard::new(move |_: &Probe, _: &&'static str| result)
    }

    const STRATEGIES: [EvaluationStrategy; 2] =
        [EvaluationStrategy::Sequential, EvaluationStrategy::Concurrent];

    #[test]
    fn empty_guard_list_has_no_rejection() {
        let probe = Probe { state: "a" };
        for strategy in STRATEGIES {
            assert_eq!(first_rejection(strategy, &[], &probe, &"b"), None);
            assert!(all_outcomes(strategy, &[], &probe, &"b").is_empty());
        }
    }

    #[test]
    fn sequential_reports_first_rejection_in_order() {
        let probe = Probe { state: "a" };
        let guards = vec![fixed(true), fixed(false), fixed(false)];

        assert_eq!(
            first_rejection(EvaluationStrategy::Sequential, &guards, &probe, &"b"),
            Some(1)
        );
    }

    #[test]
    fn sequential_stops_at_first_rejection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = Arc::clone(&calls);
            Guard::new(move |_: &Probe, _: &&'static str| {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            })
        };
        let guards = vec![fixed(false), counted];
        let probe = Probe { state: "a" };

        first_rejection(EvaluationStrategy::Sequential, &guards, &probe, &"b");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn concurrent_rejection_points_at_a_failing_guard() {
        let probe = Probe { state: "a" };
        let guards = vec![fixed(true), fixed(false), fixed(true), fixed(false)];

        let index = first_rejection(EvaluationStrategy::Concurrent, &guards, &probe, &"b")
            .expect("a guard rejects");
        assert!(index == 1 || index == 3);
    }

    #[test]
    fn concurrent_evaluation_joins_every_guard() {
        let finished = Arc::new(AtomicUsize::new(0));
        let slow = |result: bool| {
            let finished = Arc::clone(&finished);
            Guard::new(move |_: &Probe, _: &&'static str| {
                std::thread::sleep(Duration::from_millis(20));
                finished.fetch_add(1, Ordering::SeqCst);
                result
            })
        };
        let guards = vec![fixed(false), slow(true), slow(true)];
        let probe = Probe { state: "a" };

        assert_eq!(
            first_rejection(EvaluationStrategy::Concurrent, &guards, &probe, &"b"),
            Some(0)
        );
        assert_eq!(finished.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn outcomes_keep_registration_order() {
        let probe = Probe { state: "a" };
        let guards = vec![fixed(true), fixed(false), fixed(true), fixed(false), fixed(true)];

        for strategy in STRATEGIES {
            assert_eq!(
                all_outcomes(strategy, &guards, &probe, &"b"),
                vec![true, false, true, false, true]
            );
        }
    }

    fn with_spawn_budget<T>(budget: usize, run: impl FnOnce() -> T) -> T {
        SPAWN_BUDGET.with(|cell| cell.set(Some(budget)));
        let result = run();
        SPAWN_BUDGET.with(|cell| cell.set(None));
        result
    }

    #[test]
    fn refused_threads_fall_back_to_inline_evaluation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = |result: bool| {
            let calls = Arc::clone(&calls);
            Guard::new(move |_: &Probe, _: &&'static str| {
                calls.fetch_add(1, Ordering::SeqCst);
                result
            })
        };
        let probe = Probe { state: "a" };

        let passing: Vec<_> = (0..6).map(|_| counted(true)).collect();
        for budget in [0, 2] {
            let rejection = with_spawn_budget(budget, || {
                first_rejection(EvaluationStrategy::Concurrent, &passing, &probe, &"b")
            });
            assert_eq!(rejection, None, "budget {budget}");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 12);

        let mixed = vec![counted(true), counted(true), counted(true), counted(false)];
        let rejection = with_spawn_budget(1, || {
            first_rejection(EvaluationStrategy::Concurrent, &mixed, &probe, &"b")
        });
        assert_eq!(rejection, Some(3));

        let outcomes = with_spawn_budget(2, || {
            all_outcomes(EvaluationStrategy::Concurrent, &mixed, &probe, &"b")
        });
        assert_eq!(outcomes, vec![true, true, true, false]);
    }

    #[test]
    fn guards_see_the_goal() {
        let probe = Probe { state: "a" };
        let guards = vec![Guard::new(|p: &Probe, goal: &&'static str| {
            p.state == "a" && *goal == "b"
        })];

        for strategy in STRATEGIES {
            assert_eq!(first_rejection(strategy, &guards, &probe, &"b"), None);
            assert_eq!(first_rejection(strategy, &guards, &probe, &"c"), Some(0));
        }
    }
}
