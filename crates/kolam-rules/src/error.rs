//! Error types for path generation.

use thiserror::Error;

/// Errors from the rule engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// The requested rule is not registered in the rulebook.
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    /// A walk exceeded the safety step budget without closing.
    ///
    /// Shipped turn tables cannot trigger this (their walks are simple
    /// cycles); it guards against a table whose per-dot transition is not a
    /// bijection over the available headings.
    #[error("rule walk did not terminate within {bound} steps")]
    NonTerminatingRule { bound: usize },
}
