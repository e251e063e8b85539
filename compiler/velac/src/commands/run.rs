//! The `run` command: build and evaluate a serialised syntax tree.

use tracing::warn;
use vela_eval::{Environment, Interpreter, Operand, VelaError};
use vela_ir::Cst;

use super::{read_tree, RunOptions};
use crate::report::RunReport;

/// Run the tree stored at `options.path`, print the outcome and return the
/// process exit code.
pub fn run_file(options: &RunOptions) -> i32 {
    let report = match read_tree(&options.path) {
        Ok(tree) => evaluate_tree(&tree, options),
        Err(message) => RunReport::input_error(message),
    };

    if options.json {
        println!("{}", report.to_json());
    } else if report.success {
        println!("{}", report.to_text());
    } else {
        eprintln!("{}", report.to_text());
    }
    report.exit_code()
}

/// Bind the `--bind` values in a fresh root frame, then build and
/// evaluate `tree`.
pub fn evaluate_tree(tree: &Cst, options: &RunOptions) -> RunReport {
    let format = options.config.real_format;
    let env = match bind_host_values(options) {
        Ok(env) => env,
        Err(err) => return RunReport::from_result(&Err(err), &format),
    };

    let mut interpreter = Interpreter::builder()
        .env(env)
        .config(options.config.clone())
        .build_options(options.build_options)
        .build();
    let result = interpreter.run(tree, options.builder);
    let report = RunReport::from_result(&result, &format);

    // Named functions close over the root frame they are bound in.
    interpreter.env().clear();
    report
}

fn bind_host_values(options: &RunOptions) -> Result<Environment, VelaError> {
    let env = Environment::new();
    for binding in &options.bindings {
        let value = Operand::from_host(binding.ty, binding.value.clone())?;
        if !env.bind(&binding.name, value) {
            warn!(name = %binding.name, "repeated --bind ignored; the first value stands");
        }
    }
    Ok(env)
}
