//! Command handlers for the `vela` CLI.
//!
//! Each submodule implements one command. Reading and decoding tree files
//! is shared and lives here.

use vela_ir::Cst;

mod ast;
mod options;
mod run;

pub use ast::{ast_file, describe_tree};
pub use options::{parse_ast_options, parse_binding, parse_run_options, Binding, RunOptions};
pub use run::{evaluate_tree, run_file};

/// Exit code for a usage error (bad flags, missing path).
pub const EXIT_USAGE: i32 = 2;

/// Read a JSON-serialised concrete syntax tree from `path`.
pub fn read_tree(path: &str) -> Result<Cst, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))?;
    parse_tree(&text)
}

/// Decode a concrete syntax tree from JSON text.
pub fn parse_tree(json: &str) -> Result<Cst, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid syntax tree: {e}"))
}

#[cfg(test)]
mod tests;
