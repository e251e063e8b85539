//! Evaluation errors.
//!
//! Every failure during evaluation is an [`EvalError`]. Variants carry the
//! structured data of the failure; [`EvalError::category`] groups them into
//! the coarse kinds a host reports on.

use std::fmt;

use thiserror::Error;
use vela_ir::ast::ShapeError;
use vela_ir::{Name, Operation, Type};

/// Result of evaluation.
pub type EvalResult<T = crate::Operand> = Result<T, EvalError>;

/// Coarse classification of evaluation errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Type,
    Arity,
    UnboundSymbol,
    NoMatchingSelection,
    DivisionByZero,
    EmptySequence,
    Interrupted,
    RecursionLimit,
    MalformedAst,
}

impl ErrorCategory {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Arity => "ArityError",
            ErrorCategory::UnboundSymbol => "UnboundSymbolError",
            ErrorCategory::NoMatchingSelection => "NoMatchingSelectionError",
            ErrorCategory::DivisionByZero => "DivisionByZeroError",
            ErrorCategory::EmptySequence => "EmptySequenceError",
            ErrorCategory::Interrupted => "InterruptedError",
            ErrorCategory::RecursionLimit => "RecursionLimitError",
            ErrorCategory::MalformedAst => "MalformedAstError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    // Type
    #[error("operator `{}` cannot be applied to {found}", .op.as_symbol())]
    InvalidOperand { op: Operation, found: Type },

    #[error("operator `{}` cannot be applied to {left} and {right}", .op.as_symbol())]
    OperandMismatch {
        op: Operation,
        left: Type,
        right: Type,
    },

    #[error("{context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: String,
        expected: Type,
        found: Type,
    },

    #[error("cannot convert {from} to {to}")]
    Conversion { from: Type, to: Type },

    #[error("{found} value is not a function")]
    NotCallable { found: Type },

    #[error("{function}: {detail}")]
    InvalidArgument { function: String, detail: String },

    // Arity
    #[error("{function} expects {expected} argument(s), got {found}")]
    Arity {
        function: String,
        expected: usize,
        found: usize,
    },

    // Names
    #[error("unbound symbol `{name}`")]
    UnboundSymbol { name: Name },

    // Control
    #[error("no selection antecedent was true")]
    NoMatchingSelection,

    #[error("division by zero")]
    DivisionByZero,

    #[error("empty sequence has no value")]
    EmptySequence,

    #[error("evaluation interrupted")]
    Interrupted,

    #[error("call depth limit of {limit} exceeded")]
    RecursionLimit { limit: usize },

    #[error(transparent)]
    MalformedAst(#[from] ShapeError),
}

impl EvalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvalError::InvalidOperand { .. }
            | EvalError::OperandMismatch { .. }
            | EvalError::TypeMismatch { .. }
            | EvalError::Conversion { .. }
            | EvalError::NotCallable { .. }
            | EvalError::InvalidArgument { .. } => ErrorCategory::Type,
            EvalError::Arity { .. } => ErrorCategory::Arity,
            EvalError::UnboundSymbol { .. } => ErrorCategory::UnboundSymbol,
            EvalError::NoMatchingSelection => ErrorCategory::NoMatchingSelection,
            EvalError::DivisionByZero => ErrorCategory::DivisionByZero,
            EvalError::EmptySequence => ErrorCategory::EmptySequence,
            EvalError::Interrupted => ErrorCategory::Interrupted,
            EvalError::RecursionLimit { .. } => ErrorCategory::RecursionLimit,
            EvalError::MalformedAst(_) => ErrorCategory::MalformedAst,
        }
    }

    pub fn type_mismatch(context: impl Into<String>, expected: Type, found: Type) -> Self {
        EvalError::TypeMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    pub fn invalid_argument(function: impl Into<String>, detail: impl Into<String>) -> Self {
        EvalError::InvalidArgument {
            function: function.into(),
            detail: detail.into(),
        }
    }

    /// A malformed tree detected outside [`vela_ir::Ast::validate`].
    pub fn malformed(op: Operation, detail: impl Into<String>) -> Self {
        EvalError::MalformedAst(ShapeError {
            op,
            detail: detail.into(),
        })
    }
}
