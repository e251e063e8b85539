//! Runtime values.

use std::fmt;
use std::hash::{Hash, Hasher};

use vela_ir::{Literal, Type};

use crate::{EvalError, FunctionValue, RealFormat};

/// A VeLa value: a type tag with exactly the matching payload.
#[derive(Clone, Debug)]
pub enum Operand {
    Integer(i64),
    Real(f64),
    Str(String),
    Boolean(bool),
    List(Vec<Operand>),
    Function(FunctionValue),
}

impl Operand {
    /// The empty list.
    pub const EMPTY_LIST: Operand = Operand::List(Vec::new());

    pub fn get_type(&self) -> Type {
        match self {
            Operand::Integer(_) => Type::Integer,
            Operand::Real(_) => Type::Real,
            Operand::Str(_) => Type::String,
            Operand::Boolean(_) => Type::Boolean,
            Operand::List(_) => Type::List,
            Operand::Function(_) => Type::Function,
        }
    }

    // Accessors

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Operand::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The REAL payload, widening an INTEGER.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Operand::Integer(n) => Some(widen(*n)),
            Operand::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Operand::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Operand::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Operand]> {
        match self {
            Operand::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Operand::Function(f) => Some(f),
            _ => None,
        }
    }

    // Conversion

    /// Convert in place to `required` where an implicit conversion exists.
    ///
    /// The only implicit conversion is INTEGER to REAL; every other
    /// combination leaves the operand untouched.
    pub fn convert(&mut self, required: Type) {
        if let (Operand::Integer(n), Type::Real) = (&*self, required) {
            *self = Operand::Real(widen(*n));
        }
    }

    /// By-value form of [`Operand::convert`].
    #[must_use]
    pub fn converted(mut self, required: Type) -> Self {
        self.convert(required);
        self
    }

    /// Convert a scalar in place to its STRING rendering.
    ///
    /// STRING, LIST and FUNCTION operands are rejected.
    pub fn convert_to_string(&mut self, format: &RealFormat) -> Result<(), EvalError> {
        let text = match self {
            Operand::Integer(n) => n.to_string(),
            Operand::Real(x) => format.format(*x),
            Operand::Boolean(b) => bool_text(*b).to_string(),
            Operand::Str(_) | Operand::List(_) | Operand::Function(_) => {
                return Err(EvalError::Conversion {
                    from: self.get_type(),
                    to: Type::String,
                });
            }
        };
        *self = Operand::Str(text);
        Ok(())
    }

    /// Render for display to a user: like `Display`, but a top-level string
    /// is not quoted.
    pub fn to_human_readable(&self, format: &RealFormat) -> String {
        match self {
            Operand::Str(s) => s.clone(),
            other => Formatted(other, format).to_string(),
        }
    }
}

/// INTEGER to REAL widening.
#[inline]
#[expect(clippy::cast_precision_loss, reason = "INTEGER to REAL widening")]
pub fn widen(n: i64) -> f64 {
    n as f64
}

const fn bool_text(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl From<&Literal> for Operand {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Integer(n) => Operand::Integer(*n),
            Literal::Real(x) => Operand::Real(*x),
            Literal::Str(s) => Operand::Str(s.clone()),
            Literal::Boolean(b) => Operand::Boolean(*b),
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Real(value)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Boolean(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Str(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Str(value)
    }
}

impl From<Vec<Operand>> for Operand {
    fn from(items: Vec<Operand>) -> Self {
        Operand::List(items)
    }
}

impl From<FunctionValue> for Operand {
    fn from(function: FunctionValue) -> Self {
        Operand::Function(function)
    }
}

impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operand::Integer(a), Operand::Integer(b)) => a == b,
            (Operand::Real(a), Operand::Real(b)) => a.to_bits() == b.to_bits(),
            (Operand::Str(a), Operand::Str(b)) => a == b,
            (Operand::Boolean(a), Operand::Boolean(b)) => a == b,
            (Operand::List(a), Operand::List(b)) => a == b,
            (Operand::Function(a), Operand::Function(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for Operand {}

impl Hash for Operand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Operand::Integer(n) => n.hash(state),
            Operand::Real(x) => x.to_bits().hash(state),
            Operand::Str(s) => s.hash(state),
            Operand::Boolean(b) => b.hash(state),
            Operand::List(items) => items.hash(state),
            Operand::Function(f) => f.addr().hash(state),
        }
    }
}

/// An operand paired with the REAL format to render it with.
struct Formatted<'a>(&'a Operand, &'a RealFormat);

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Formatted(operand, format) = *self;
        match operand {
            Operand::Integer(n) => write!(f, "{n}"),
            Operand::Real(x) => f.write_str(&format.format(*x)),
            Operand::Str(s) => write!(f, "\"{s}\""),
            Operand::Boolean(b) => f.write_str(bool_text(*b)),
            Operand::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", Formatted(item, format))?;
                }
                f.write_str("]")
            }
            Operand::Function(function) => write!(f, "{function}"),
        }
    }
}

/// Renders REALs with the default [`RealFormat`] and quotes strings.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Formatted(self, &RealFormat::default()))
    }
}
