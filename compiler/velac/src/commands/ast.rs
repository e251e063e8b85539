//! The `ast` command: show what a syntax tree builds to.

use vela_build::{build, BuildError, BuildOptions, BuilderKind};
use vela_ir::Cst;

use super::read_tree;

/// Print the AST built from the tree at `path`; returns the exit code.
pub fn ast_file(path: &str, kind: BuilderKind) -> i32 {
    let tree = match read_tree(path) {
        Ok(tree) => tree,
        Err(message) => {
            eprintln!("error: {message}");
            return 1;
        }
    };
    match describe_tree(&tree, kind) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("build error: {err}");
            1
        }
    }
}

/// The S-expression of the built AST, followed by its determinism.
pub fn describe_tree(tree: &Cst, kind: BuilderKind) -> Result<String, BuildError> {
    let ast = build(tree, kind, &BuildOptions::default())?;
    let deterministic = if ast.is_deterministic() { "yes" } else { "no" };
    Ok(format!("{ast}\ndeterministic: {deterministic}"))
}
