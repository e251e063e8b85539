//! Function definition and application.
//!
//! Calls are lexically scoped: the callee's frame is a child of the
//! environment the function was defined in, never of the caller's.
//! Arguments are evaluated in the caller's environment, left to right,
//! then checked against the declared parameter types after INTEGER to
//! REAL widening. A declared return type is checked the same way.

use vela_ir::{Name, Node, Operation, Type};
use vela_runtime::{Closure, Environment, EvalError, EvalResult, FunctionValue, Operand};

use super::Interpreter;

impl Interpreter {
    /// Create a closure over `env`; a named definition is also bound there.
    pub(super) fn eval_fundef(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let parts = node.fundef_parts()?;
        let params = parts
            .params
            .into_iter()
            .map(|(name, ty)| Ok((name, resolve_type(&ty)?)))
            .collect::<EvalResult<Vec<_>>>()?;
        let return_type = parts.return_type.as_ref().map(resolve_type).transpose()?;

        let closure = Closure::new(
            node.token().cloned(),
            params,
            return_type,
            parts.body,
            env.clone(),
        );
        let function = Operand::Function(FunctionValue::closure(closure));
        if let Some(name) = node.token() {
            env.bind_name(name.clone(), function.clone());
        }
        Ok(function)
    }

    /// `FUNCALL`: resolve the callee, evaluate the arguments, apply.
    pub(super) fn eval_funcall(&mut self, node: &Node, env: &Environment) -> EvalResult {
        let (callee, actuals) = match node.token() {
            Some(name) => {
                let callee = env
                    .lookup_name(name)
                    .ok_or_else(|| EvalError::UnboundSymbol { name: name.clone() })?;
                (callee, node.children())
            }
            None => {
                let Some((fundef, actuals)) = node.children().split_first() else {
                    return Err(EvalError::malformed(
                        Operation::Funcall,
                        "anonymous call without a function",
                    ));
                };
                (self.eval(fundef, env)?, actuals)
            }
        };
        let Operand::Function(function) = callee else {
            return Err(EvalError::NotCallable {
                found: callee.get_type(),
            });
        };

        let args = actuals
            .iter()
            .map(|actual| self.eval(actual, env))
            .collect::<EvalResult<Vec<_>>>()?;
        self.call(&function, args)
    }

    /// Apply a function to already evaluated arguments.
    ///
    /// Hosts use this to invoke a function value a script returned.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %function.display_name()))]
    pub fn call(&mut self, function: &FunctionValue, args: Vec<Operand>) -> EvalResult {
        self.interrupt.check()?;
        let args = check_arguments(function, args)?;
        self.check_recursion_limit()?;

        self.call_depth += 1;
        let result = match function {
            FunctionValue::Closure(closure) => self.call_closure(closure, args),
            FunctionValue::Intrinsic(intrinsic) => intrinsic.call(&args),
        };
        self.call_depth -= 1;

        check_result(function, result?)
    }

    fn call_closure(&mut self, closure: &Closure, args: Vec<Operand>) -> EvalResult {
        let frame = closure.env().child();
        for ((name, _), value) in closure.params().iter().zip(args) {
            frame.bind_name(name.clone(), value);
        }
        self.eval(closure.body(), &frame)
    }

    fn check_recursion_limit(&self) -> EvalResult<()> {
        if let Some(limit) = self.config.max_call_depth {
            if self.call_depth >= limit {
                return Err(EvalError::RecursionLimit { limit });
            }
        }
        Ok(())
    }
}

fn resolve_type(name: &Name) -> EvalResult<Type> {
    Type::from_name(name.as_str()).ok_or_else(|| {
        EvalError::malformed(Operation::Fundef, format!("unknown type `{name}`"))
    })
}

fn check_arguments(function: &FunctionValue, mut args: Vec<Operand>) -> EvalResult<Vec<Operand>> {
    let expected = function.arity();
    if args.len() != expected {
        return Err(EvalError::Arity {
            function: function.display_name(),
            expected,
            found: args.len(),
        });
    }
    for (index, (arg, ty)) in args.iter_mut().zip(function.param_types()).enumerate() {
        let Some(ty) = ty else { continue };
        let found = arg.get_type();
        if !found.conforms_to(ty) {
            return Err(EvalError::type_mismatch(
                format!("argument {} of {}", index + 1, function.display_name()),
                ty,
                found,
            ));
        }
        arg.convert(ty);
    }
    Ok(args)
}

fn check_result(function: &FunctionValue, mut result: Operand) -> EvalResult {
    if let Some(ty) = function.return_type() {
        let found = result.get_type();
        if !found.conforms_to(ty) {
            return Err(EvalError::type_mismatch(
                format!("result of {}", function.display_name()),
                ty,
                found,
            ));
        }
        result.convert(ty);
    }
    Ok(result)
}
