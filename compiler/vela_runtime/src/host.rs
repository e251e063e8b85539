//! Exchange of values with the embedding host.

use vela_ir::Type;

use crate::{EvalError, EvalResult, Operand};

/// A plain value as the host sees it.
///
/// Functions never cross the host boundary; everything else does.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    Integer(i64),
    Real(f64),
    Str(String),
    Boolean(bool),
    List(Vec<Operand>),
}

impl HostValue {
    fn get_type(&self) -> Type {
        match self {
            HostValue::Integer(_) => Type::Integer,
            HostValue::Real(_) => Type::Real,
            HostValue::Str(_) => Type::String,
            HostValue::Boolean(_) => Type::Boolean,
            HostValue::List(_) => Type::List,
        }
    }
}

impl Operand {
    /// Wrap a host value as an operand of type `ty`.
    ///
    /// The value must carry `ty`, except that an INTEGER is accepted (and
    /// widened) where REAL is requested.
    pub fn from_host(ty: Type, value: HostValue) -> EvalResult {
        match (ty, value) {
            (Type::Integer, HostValue::Integer(n)) => Ok(Operand::Integer(n)),
            (Type::Real, HostValue::Real(x)) => Ok(Operand::Real(x)),
            (Type::Real, HostValue::Integer(n)) => Ok(Operand::Integer(n).converted(Type::Real)),
            (Type::String, HostValue::Str(s)) => Ok(Operand::Str(s)),
            (Type::Boolean, HostValue::Boolean(b)) => Ok(Operand::Boolean(b)),
            (Type::List, HostValue::List(items)) => Ok(Operand::List(items)),
            (ty, value) => Err(EvalError::type_mismatch("host value", ty, value.get_type())),
        }
    }

    /// Unwrap into a host value. FUNCTION operands cannot be unwrapped.
    pub fn to_host(&self) -> EvalResult<HostValue> {
        match self {
            Operand::Integer(n) => Ok(HostValue::Integer(*n)),
            Operand::Real(x) => Ok(HostValue::Real(*x)),
            Operand::Str(s) => Ok(HostValue::Str(s.clone())),
            Operand::Boolean(b) => Ok(HostValue::Boolean(*b)),
            Operand::List(items) => Ok(HostValue::List(items.clone())),
            Operand::Function(f) => Err(EvalError::invalid_argument(
                f.display_name(),
                "functions cannot be passed to the host",
            )),
        }
    }
}
