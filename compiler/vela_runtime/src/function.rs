//! Function values: user-defined closures and native intrinsics.

use std::fmt;
use std::rc::Rc;

use vela_ir::{Ast, Name, Type};

use crate::{Environment, EvalResult, Operand};

/// Native implementation of an intrinsic.
///
/// Arguments arrive already checked against the intrinsic's arity and
/// parameter types, with INTEGER arguments widened where REAL is declared.
pub type IntrinsicFn = Rc<dyn Fn(&[Operand]) -> EvalResult>;

/// A user-defined function together with its defining environment.
pub struct Closure {
    name: Option<Name>,
    params: Vec<(Name, Type)>,
    return_type: Option<Type>,
    /// The `SEQUENCE` body of the defining `FUNDEF`.
    body: Ast,
    env: Environment,
}

impl Closure {
    pub fn new(
        name: Option<Name>,
        params: Vec<(Name, Type)>,
        return_type: Option<Type>,
        body: Ast,
        env: Environment,
    ) -> Self {
        Closure {
            name,
            params,
            return_type,
            body,
            env,
        }
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn params(&self) -> &[(Name, Type)] {
        &self.params
    }

    pub fn return_type(&self) -> Option<Type> {
        self.return_type
    }

    pub fn body(&self) -> &Ast {
        &self.body
    }

    /// The environment in effect where the function was defined.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

/// A function implemented by the host.
pub struct Intrinsic {
    name: Name,
    /// Declared parameter types; `None` accepts any type.
    params: Vec<Option<Type>>,
    return_type: Option<Type>,
    func: IntrinsicFn,
}

impl Intrinsic {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn params(&self) -> &[Option<Type>] {
        &self.params
    }

    pub fn return_type(&self) -> Option<Type> {
        self.return_type
    }

    pub fn call(&self, args: &[Operand]) -> EvalResult {
        (self.func)(args)
    }
}

/// A callable value.
///
/// Cloning shares the underlying function; equality is identity.
#[derive(Clone)]
pub enum FunctionValue {
    Closure(Rc<Closure>),
    Intrinsic(Rc<Intrinsic>),
}

impl FunctionValue {
    pub fn closure(closure: Closure) -> Self {
        FunctionValue::Closure(Rc::new(closure))
    }

    pub fn intrinsic<F>(
        name: &str,
        params: Vec<Option<Type>>,
        return_type: Option<Type>,
        func: F,
    ) -> Self
    where
        F: Fn(&[Operand]) -> EvalResult + 'static,
    {
        FunctionValue::Intrinsic(Rc::new(Intrinsic {
            name: Name::new(name),
            params,
            return_type,
            func: Rc::new(func),
        }))
    }

    pub fn name(&self) -> Option<&Name> {
        match self {
            FunctionValue::Closure(c) => c.name(),
            FunctionValue::Intrinsic(i) => Some(i.name()),
        }
    }

    /// Name for diagnostics; anonymous functions are reported as `lambda`.
    pub fn display_name(&self) -> String {
        self.name()
            .map_or_else(|| "lambda".to_string(), ToString::to_string)
    }

    pub fn arity(&self) -> usize {
        match self {
            FunctionValue::Closure(c) => c.params.len(),
            FunctionValue::Intrinsic(i) => i.params.len(),
        }
    }

    /// Declared parameter types, `None` where any type is accepted.
    pub fn param_types(&self) -> Vec<Option<Type>> {
        match self {
            FunctionValue::Closure(c) => c.params.iter().map(|(_, ty)| Some(*ty)).collect(),
            FunctionValue::Intrinsic(i) => i.params.clone(),
        }
    }

    pub fn return_type(&self) -> Option<Type> {
        match self {
            FunctionValue::Closure(c) => c.return_type,
            FunctionValue::Intrinsic(i) => i.return_type,
        }
    }

    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        match (self, other) {
            (FunctionValue::Closure(a), FunctionValue::Closure(b)) => Rc::ptr_eq(a, b),
            (FunctionValue::Intrinsic(a), FunctionValue::Intrinsic(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub(crate) fn addr(&self) -> usize {
        match self {
            FunctionValue::Closure(c) => Rc::as_ptr(c).cast::<()>() as usize,
            FunctionValue::Intrinsic(i) => Rc::as_ptr(i).cast::<()>() as usize,
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.display_name())?;
        match self {
            FunctionValue::Closure(c) => {
                for (index, (name, ty)) in c.params.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}:{ty}")?;
                }
            }
            FunctionValue::Intrinsic(i) => {
                for (index, ty) in i.params.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    match ty {
                        Some(ty) => write!(f, "{ty}")?,
                        None => f.write_str("ANY")?,
                    }
                }
            }
        }
        f.write_str(")")?;
        if let Some(ty) = self.return_type() {
            write!(f, ":{ty}")?;
        }
        Ok(())
    }
}

// Closures capture environments that may contain the closure itself, so
// Debug stops at the signature.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({self})")
    }
}
