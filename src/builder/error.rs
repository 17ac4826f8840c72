//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Ruleset not specified. Call .rules(ruleset) before .build()")]
    MissingRules,

    #[error("Subject not specified. Call .subject(subject) before .build()")]
    MissingSubject,
}
