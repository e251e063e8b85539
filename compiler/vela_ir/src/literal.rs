//! Scalar constants held by AST leaves.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Type;

/// A literal value parsed at AST-build time.
///
/// This is the scalar subset of the runtime operand: lists and functions
/// only come into existence during evaluation. Reals compare and hash by
/// bit pattern so that trees containing them are `Eq + Hash`.
#[derive(Clone, Debug)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Str(String),
    Boolean(bool),
}

impl Literal {
    pub fn get_type(&self) -> Type {
        match self {
            Literal::Integer(_) => Type::Integer,
            Literal::Real(_) => Type::Real,
            Literal::Str(_) => Type::String,
            Literal::Boolean(_) => Type::Boolean,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Integer(a), Literal::Integer(b)) => a == b,
            (Literal::Real(a), Literal::Real(b)) => a.to_bits() == b.to_bits(),
            (Literal::Str(a), Literal::Str(b)) => a == b,
            (Literal::Boolean(a), Literal::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Literal::Integer(n) => n.hash(state),
            Literal::Real(x) => x.to_bits().hash(state),
            Literal::Str(s) => s.hash(state),
            Literal::Boolean(b) => b.hash(state),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Real(x) => write!(f, "{x:?}"),
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Boolean(true) => f.write_str("True"),
            Literal::Boolean(false) => f.write_str("False"),
        }
    }
}
