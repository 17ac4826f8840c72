//! Document Approval Workflow
//!
//! This demo walks a document through a review pipeline whose guards are
//! evaluated concurrently.
//!
//! Key concepts:
//! - Plain edges registered with `add_transition`
//! - Extra policy stacked on an edge with `add_rule`
//! - Coarse `transition` errors versus detailed `try_transition` denials
//! - Decision logging through `tracing` (set RUST_LOG=turnstile=debug)
//!
//! Run with: cargo run --example document_workflow

use turnstile::builder::edge_ruleset;
use turnstile::core::{Guard, Subject, Transition};
use turnstile::machine::Machine;
use turnstile::rules::{Ruleset, RulesetConfig};
use turnstile::state_enum;

state_enum! {
    enum DocState {
        Draft,
        Review,
        Approved,
        Published,
    }
}

struct Document {
    state: DocState,
    word_count: usize,
    approvals: u32,
}

impl Subject for Document {
    type State = DocState;

    fn current_state(&self) -> DocState {
        self.state
    }

    fn set_state(&mut self, state: DocState) {
        println!("  [Document] {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

fn review_rules() -> Ruleset<Document> {
    let rules: Ruleset<Document> = edge_ruleset(
        RulesetConfig::concurrent(),
        [
            (DocState::Draft, DocState::Review),
            (DocState::Review, DocState::Draft),
            (DocState::Review, DocState::Approved),
            (DocState::Approved, DocState::Published),
        ],
    );

    rules.add_rule(
        Transition::new(DocState::Draft, DocState::Review),
        [Guard::new(|doc: &Document, _: &DocState| doc.word_count >= 100).named("long enough")],
    );
    rules.add_rule(
        Transition::new(DocState::Review, DocState::Approved),
        [
            Guard::new(|doc: &Document, _: &DocState| doc.approvals >= 2).named("two approvals"),
            Guard::new(|doc: &Document, _: &DocState| doc.word_count <= 5000).named("not too long"),
        ],
    );
    rules
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("turnstile=debug".parse()?),
        )
        .init();

    println!("=== Document Approval Workflow ===\n");

    let mut machine = Machine::builder()
        .rules(review_rules())
        .subject(Document {
            state: DocState::Draft,
            word_count: 40,
            approvals: 0,
        })
        .build()?;

    println!("Submitting a 40-word draft:");
    if let Err(denial) = machine.try_transition(DocState::Review) {
        println!("  refused: {denial}");
    }

    machine.subject.word_count = 800;
    println!("\nSubmitting after expanding to 800 words:");
    machine.transition(DocState::Review)?;

    println!("\nApproving with a single approval:");
    machine.subject.approvals = 1;
    if let Err(err) = machine.transition(DocState::Approved) {
        println!("  refused: {err}");
    }

    println!("\nApproving with two approvals:");
    machine.subject.approvals = 2;
    machine.transition(DocState::Approved)?;

    println!("\nPublishing:");
    machine.transition(DocState::Published)?;

    println!("\nTrying to send a published document back to draft:");
    if let Err(denial) = machine.try_transition(DocState::Draft) {
        println!("  refused: {denial}");
    }

    println!("\nFinal state: {:?}", machine.current_state());
    println!("\n=== Example Complete ===");
    Ok(())
}
