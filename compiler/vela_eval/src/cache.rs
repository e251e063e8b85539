//! Memoised results of deterministic trees.

use rustc_hash::FxHashMap;
use vela_ir::Ast;
use vela_runtime::Operand;

/// Results keyed by the tree that produced them.
///
/// Only trees for which [`Ast::is_deterministic`] holds are stored, since
/// anything else may evaluate differently next time. Each interpreter owns
/// its own cache.
#[derive(Default)]
pub struct ResultCache {
    results: FxHashMap<Ast, Operand>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ast: &Ast) -> Option<&Operand> {
        self.results.get(ast)
    }

    /// Remember `value` as the result of `ast`. Returns whether it was
    /// stored; non-deterministic trees are refused.
    pub fn insert(&mut self, ast: &Ast, value: Operand) -> bool {
        if !ast.is_deterministic() {
            return false;
        }
        self.results.insert(ast.clone(), value);
        true
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}
