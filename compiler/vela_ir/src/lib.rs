//! VeLa IR - the tree representations of the VStar expression Language.
//!
//! This crate contains the data structures shared by every VeLa stage:
//! - [`Type`]: the six value types and their conversion classification
//! - [`Name`]: canonical (uppercase) symbol names
//! - [`Literal`]: scalar constants carried by AST leaves
//! - [`Operation`]: the closed set of AST operations with arity metadata
//! - [`Ast`]: the abstract syntax tree consumed by the evaluator
//! - [`Cst`]: the concrete syntax tree produced by an external parser,
//!   plus the [`CstListener`] callback protocol and its [`walk`] driver
//!
//! # Design
//!
//! - **Closed enums everywhere**: adding an `Operation` or `Rule` is a
//!   compile error in every consumer until it is handled.
//! - **Hashable trees**: floats are compared by bit pattern so `Ast` is
//!   `Eq + Hash` and can key a result cache.
//! - **Shared subtrees**: internal nodes sit behind `Arc`, so closures keep
//!   their bodies alive without copying.

pub mod ast;
pub mod cst;
mod literal;
mod name;
mod operation;
mod types;

pub use ast::{Ast, FundefParts, LiteralLeaf, Node, ShapeError};
pub use cst::{walk, Cst, CstListener, Rule};
pub use literal::Literal;
pub use name::Name;
pub use operation::{Arity, Operation};
pub use types::Type;
