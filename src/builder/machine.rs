//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::Subject;
use crate::machine::Machine;
use crate::rules::Ruleset;
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
///
/// Each setter may be called any number of times; the last value wins.
pub struct MachineBuilder<Sub: Subject> {
    rules: Option<Arc<Ruleset<Sub>>>,
    subject: Option<Sub>,
}

impl<Sub: Subject> MachineBuilder<Sub> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rules: None,
            subject: None,
        }
    }

    /// Set the ruleset (required). Accepts an owned or shared ruleset.
    pub fn rules(mut self, rules: impl Into<Arc<Ruleset<Sub>>>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// Set the subject (required).
    pub fn subject(mut self, subject: Sub) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<Sub>, BuildError> {
        let rules = self.rules.ok_or(BuildError::MissingRules)?;
        let subject = self.subject.ok_or(BuildError::MissingSubject)?;

        Ok(Machine { rules, subject })
    }
}

impl<Sub: Subject> Default for MachineBuilder<Sub> {
    fn default() -> Self {
        Self::new()
    }
}
