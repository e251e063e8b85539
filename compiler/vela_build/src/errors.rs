//! Build-time errors.

use thiserror::Error;
use vela_ir::Rule;

/// A concrete syntax tree that cannot be turned into an AST.
///
/// These are problems with the script itself, reported before any
/// evaluation takes place.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("malformed number `{text}`: {reason}")]
    NumberFormat { text: String, reason: String },

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("unknown operator `{text}` in {rule}")]
    UnknownOperator { rule: Rule, text: String },

    #[error("malformed {rule}: {detail}")]
    MalformedTree { rule: Rule, detail: String },
}

impl BuildError {
    pub(crate) fn malformed(rule: Rule, detail: impl Into<String>) -> Self {
        BuildError::MalformedTree {
            rule,
            detail: detail.into(),
        }
    }

    pub(crate) fn number_format(text: &str, reason: impl ToString) -> Self {
        BuildError::NumberFormat {
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}
