//! The built-in function library.
//!
//! Intrinsics are ordinary FUNCTION operands bound in the root environment,
//! so a script or host binding of the same name made earlier takes
//! precedence (bindings are first-bind-wins). Arguments reach the bodies
//! below already checked against the declared parameter types, with
//! INTEGER widened where REAL is declared.
//!
//! | name       | parameters          | result  |
//! |------------|---------------------|---------|
//! | `PI`, `E`  | (constants)         | REAL    |
//! | `LENGTH`   | LIST                | INTEGER |
//! | `HEAD`     | LIST                | any     |
//! | `TAIL`     | LIST                | LIST    |
//! | `NTH`      | LIST, INTEGER       | any     |
//! | `CONCAT`   | LIST, LIST          | LIST    |
//! | `APPEND`   | LIST, any           | LIST    |
//! | `CHR`      | INTEGER             | STRING  |
//! | `ORD`      | STRING              | INTEGER |
//! | `TOSTRING` | any                 | STRING  |
//! | `TOREAL`   | INTEGER             | REAL    |
//! | `SQRT`, `SIN`, `COS`, `TAN`, `LOG`, `EXP` | REAL | REAL |

use tracing::debug;
use vela_ir::Type;
use vela_runtime::{
    widen, Environment, EvalError, EvalResult, FunctionValue, Operand, RealFormat,
};

use crate::EvalConfig;

/// Bind every intrinsic into `env`.
pub fn install(env: &Environment, config: &EvalConfig) {
    env.bind("PI", Operand::Real(std::f64::consts::PI));
    env.bind("E", Operand::Real(std::f64::consts::E));
    install_list_functions(env);
    install_string_functions(env, config.real_format);
    install_math_functions(env);
    debug!(depth = env.depth(), "intrinsics installed");
}

fn define<F>(env: &Environment, name: &str, params: Vec<Option<Type>>, ret: Option<Type>, func: F)
where
    F: Fn(&[Operand]) -> EvalResult + 'static,
{
    let function = FunctionValue::intrinsic(name, params, ret, func);
    env.bind(name, Operand::Function(function));
}

// Lists

fn install_list_functions(env: &Environment) {
    define(env, "LENGTH", vec![Some(Type::List)], Some(Type::Integer), |args| {
        let list = list_arg("LENGTH", args, 0)?;
        i64::try_from(list.len())
            .map(Operand::Integer)
            .map_err(|_| EvalError::invalid_argument("LENGTH", "list too long"))
    });

    // The empty list stands in for a missing element.
    define(env, "HEAD", vec![Some(Type::List)], None, |args| {
        let list = list_arg("HEAD", args, 0)?;
        Ok(list.first().cloned().unwrap_or(Operand::EMPTY_LIST))
    });

    define(env, "TAIL", vec![Some(Type::List)], Some(Type::List), |args| {
        let list = list_arg("TAIL", args, 0)?;
        Ok(list
            .get(1..)
            .map_or(Operand::EMPTY_LIST, |rest| Operand::List(rest.to_vec())))
    });

    define(
        env,
        "NTH",
        vec![Some(Type::List), Some(Type::Integer)],
        None,
        |args| {
            let list = list_arg("NTH", args, 0)?;
            let index = integer_arg("NTH", args, 1)?;
            if list.is_empty() {
                return Ok(Operand::EMPTY_LIST);
            }
            usize::try_from(index)
                .ok()
                .and_then(|i| list.get(i))
                .cloned()
                .ok_or_else(|| {
                    EvalError::invalid_argument(
                        "NTH",
                        format!("index {index} out of range for a list of {}", list.len()),
                    )
                })
        },
    );

    define(
        env,
        "CONCAT",
        vec![Some(Type::List), Some(Type::List)],
        Some(Type::List),
        |args| {
            let first = list_arg("CONCAT", args, 0)?;
            let second = list_arg("CONCAT", args, 1)?;
            Ok(Operand::List([first, second].concat()))
        },
    );

    define(
        env,
        "APPEND",
        vec![Some(Type::List), None],
        Some(Type::List),
        |args| {
            let list = list_arg("APPEND", args, 0)?;
            let item = args
                .get(1)
                .ok_or_else(|| EvalError::invalid_argument("APPEND", "missing item"))?;
            let mut items = list.to_vec();
            items.push(item.clone());
            Ok(Operand::List(items))
        },
    );
}

// Strings

fn install_string_functions(env: &Environment, format: RealFormat) {
    // Negative code points produce the empty string.
    define(env, "CHR", vec![Some(Type::Integer)], Some(Type::String), |args| {
        let code = integer_arg("CHR", args, 0)?;
        if code < 0 {
            return Ok(Operand::Str(String::new()));
        }
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .map(|c| Operand::Str(c.to_string()))
            .ok_or_else(|| EvalError::invalid_argument("CHR", format!("{code} is not a character")))
    });

    define(env, "ORD", vec![Some(Type::String)], Some(Type::Integer), |args| {
        let text = str_arg("ORD", args, 0)?;
        text.chars()
            .next()
            .map(|c| Operand::Integer(i64::from(u32::from(c))))
            .ok_or_else(|| EvalError::invalid_argument("ORD", "empty string"))
    });

    define(env, "TOSTRING", vec![None], Some(Type::String), move |args| {
        let mut value = args
            .first()
            .cloned()
            .ok_or_else(|| EvalError::invalid_argument("TOSTRING", "missing argument"))?;
        if value.get_type() != Type::String {
            value.convert_to_string(&format)?;
        }
        Ok(value)
    });
}

// Numbers

fn install_math_functions(env: &Environment) {
    define(env, "TOREAL", vec![Some(Type::Integer)], Some(Type::Real), |args| {
        Ok(Operand::Real(widen(integer_arg("TOREAL", args, 0)?)))
    });

    let unary: [(&str, fn(f64) -> f64); 6] = [
        ("SQRT", f64::sqrt),
        ("SIN", f64::sin),
        ("COS", f64::cos),
        ("TAN", f64::tan),
        ("LOG", f64::ln),
        ("EXP", f64::exp),
    ];
    for (name, func) in unary {
        define(env, name, vec![Some(Type::Real)], Some(Type::Real), move |args| {
            Ok(Operand::Real(func(real_arg(name, args, 0)?)))
        });
    }
}

// Argument unpacking

fn list_arg<'a>(function: &str, args: &'a [Operand], index: usize) -> EvalResult<&'a [Operand]> {
    args.get(index)
        .and_then(Operand::as_list)
        .ok_or_else(|| bad_argument(function, index, Type::List))
}

fn integer_arg(function: &str, args: &[Operand], index: usize) -> EvalResult<i64> {
    args.get(index)
        .and_then(Operand::as_integer)
        .ok_or_else(|| bad_argument(function, index, Type::Integer))
}

fn real_arg(function: &str, args: &[Operand], index: usize) -> EvalResult<f64> {
    args.get(index)
        .and_then(Operand::as_real)
        .ok_or_else(|| bad_argument(function, index, Type::Real))
}

fn str_arg<'a>(function: &str, args: &'a [Operand], index: usize) -> EvalResult<&'a str> {
    args.get(index)
        .and_then(Operand::as_str)
        .ok_or_else(|| bad_argument(function, index, Type::String))
}

#[cold]
fn bad_argument(function: &str, index: usize, expected: Type) -> EvalError {
    EvalError::invalid_argument(function, format!("argument {} must be {expected}", index + 1))
}
