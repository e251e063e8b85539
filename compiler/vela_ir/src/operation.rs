//! AST operations.
//!
//! The operation set is closed: the builders, the evaluator and the
//! pretty-printer all match on it exhaustively.

use std::fmt;

/// Number of children an internal node of a given operation carries.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Fixed(usize),
    /// Any number of children, including none.
    Variadic,
}

impl Arity {
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

/// AST operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operation {
    // Arithmetic
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    Pow,

    // Logical
    And,
    Or,
    Not,

    // Relational / equality
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    ApproximatelyEqual,
    In,

    // Special forms
    List,
    Pair,
    Sequence,
    Bind,
    Symbol,
    Fundef,
    Funcall,
    Select,
    While,
}

impl Operation {
    /// Declared child count of an internal node.
    pub const fn arity(self) -> Arity {
        match self {
            Self::Neg | Self::Not => Arity::Fixed(1),
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Pow
            | Self::And
            | Self::Or
            | Self::Equal
            | Self::NotEqual
            | Self::GreaterThan
            | Self::LessThan
            | Self::GreaterThanOrEqual
            | Self::LessThanOrEqual
            | Self::ApproximatelyEqual
            | Self::In
            | Self::Pair
            | Self::Bind
            | Self::While => Arity::Fixed(2),
            Self::Symbol => Arity::Fixed(0),
            Self::List | Self::Sequence | Self::Fundef | Self::Funcall | Self::Select => {
                Arity::Variadic
            }
        }
    }

    /// Whether evaluation departs from "evaluate all children, then apply".
    ///
    /// `And`/`Or` short-circuit; the remaining special forms bind names,
    /// defer branches or introduce frames. `List` evaluates every child but
    /// builds a value rather than applying an operator, so it is also listed.
    pub const fn is_special_form(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Or
                | Self::List
                | Self::Pair
                | Self::Sequence
                | Self::Bind
                | Self::Symbol
                | Self::Fundef
                | Self::Funcall
                | Self::Select
                | Self::While
        )
    }

    /// The binary operation denoted by an operator terminal, if any.
    ///
    /// Word operators (`and`, `or`, `in`) are matched case-insensitively.
    pub fn from_binary_symbol(symbol: &str) -> Option<Operation> {
        let op = match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "^" => Self::Pow,
            "=" => Self::Equal,
            "<>" => Self::NotEqual,
            ">" => Self::GreaterThan,
            "<" => Self::LessThan,
            ">=" => Self::GreaterThanOrEqual,
            "<=" => Self::LessThanOrEqual,
            "=~" => Self::ApproximatelyEqual,
            word if word.eq_ignore_ascii_case("and") => Self::And,
            word if word.eq_ignore_ascii_case("or") => Self::Or,
            word if word.eq_ignore_ascii_case("in") => Self::In,
            _ => return None,
        };
        Some(op)
    }

    /// Source-level spelling, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::ApproximatelyEqual => "=~",
            Self::In => "in",
            Self::List => "list",
            Self::Pair => "pair",
            Self::Sequence => "sequence",
            Self::Bind => "<-",
            Self::Symbol => "symbol",
            Self::Fundef => "function",
            Self::Funcall => "call",
            Self::Select => "select",
            Self::While => "while",
        }
    }

    /// Uppercase mnemonic used by the AST pretty-printer.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Neg => "NEG",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Pow => "POW",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::ApproximatelyEqual => "APPROXIMATELY_EQUAL",
            Self::In => "IN",
            Self::List => "LIST",
            Self::Pair => "PAIR",
            Self::Sequence => "SEQUENCE",
            Self::Bind => "BIND",
            Self::Symbol => "SYMBOL",
            Self::Fundef => "FUNDEF",
            Self::Funcall => "FUNCALL",
            Self::Select => "SELECT",
            Self::While => "WHILE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
