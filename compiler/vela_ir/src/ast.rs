//! Abstract syntax tree.
//!
//! An [`Ast`] is either a leaf (a literal or a bare symbol) or an internal
//! [`Node`] tagged with an [`Operation`]. Nodes are reference-counted so
//! that subtrees, in particular function bodies captured by closures, can be
//! shared without copying.
//!
//! # Node shapes
//!
//! | operation            | children                                            |
//! |----------------------|-----------------------------------------------------|
//! | binary operators     | `left, right`                                       |
//! | `NEG`, `NOT`         | `operand`                                           |
//! | `LIST`, `SEQUENCE`   | any number of expressions                           |
//! | `SELECT`             | any number of `PAIR(antecedent, consequent)`        |
//! | `BIND`               | `Symbol, value`                                     |
//! | `WHILE`              | `condition, SEQUENCE`                               |
//! | `FUNDEF`             | `PAIR(Symbol, Symbol type)*, [Symbol type], SEQUENCE` |
//! | `FUNCALL` (named)    | actual parameters; callee name in `token`           |
//! | `FUNCALL` (anonymous)| `FUNDEF`, then actual parameters                    |

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use vela_stack::ensure_sufficient_stack;

use crate::{Arity, Literal, Name, Operation};

/// A node of the abstract syntax tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Ast {
    /// A literal constant and the token text it was parsed from.
    Literal(LiteralLeaf),
    /// A bare symbol reference.
    Symbol(Name),
    /// An operation applied to child trees.
    Node(Arc<Node>),
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct LiteralLeaf {
    pub token: String,
    pub value: Literal,
}

/// An internal node.
///
/// Comparison, hashing and drop walk the whole subtree, so all three are
/// written out to stay within the stack on long operator chains.
#[derive(Clone, Debug)]
pub struct Node {
    op: Operation,
    /// Function name of a named `FUNDEF` or named `FUNCALL`.
    token: Option<Name>,
    children: Vec<Ast>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| {
            self.op == other.op && self.token == other.token && self.children == other.children
        })
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            self.op.hash(state);
            self.token.hash(state);
            self.children.hash(state);
        });
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach uniquely owned descendants into a worklist so each node
        // is dropped with no children left to recurse into.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ast::Node(node) = child {
                if let Some(mut node) = Arc::into_inner(node) {
                    pending.append(&mut node.children);
                }
            }
        }
    }
}

/// A tree that violates the shape its operation requires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError {
    pub op: Operation,
    pub detail: String,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed {} node: {}", self.op, self.detail)
    }
}

impl std::error::Error for ShapeError {}

/// The parts of a `FUNDEF` node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundefParts {
    /// Formal parameter names paired with their declared type names.
    pub params: Vec<(Name, Name)>,
    pub return_type: Option<Name>,
    /// The body `SEQUENCE`.
    pub body: Ast,
}

impl Node {
    #[inline]
    pub fn op(&self) -> Operation {
        self.op
    }

    #[inline]
    pub fn token(&self) -> Option<&Name> {
        self.token.as_ref()
    }

    #[inline]
    pub fn children(&self) -> &[Ast] {
        &self.children
    }

    /// Both children of a two-child node.
    pub fn pair(&self) -> Result<(&Ast, &Ast), ShapeError> {
        match self.children.as_slice() {
            [left, right] => Ok((left, right)),
            other => Err(self.shape_error(format!("expected 2 children, found {}", other.len()))),
        }
    }

    /// The only child of a one-child node.
    pub fn single(&self) -> Result<&Ast, ShapeError> {
        match self.children.as_slice() {
            [child] => Ok(child),
            other => Err(self.shape_error(format!("expected 1 child, found {}", other.len()))),
        }
    }

    /// Whether this is a `FUNCALL` that names its callee.
    #[inline]
    pub fn is_call_by_reference(&self) -> bool {
        self.op == Operation::Funcall && self.token.is_some()
    }

    /// Decompose a `FUNDEF` node into formals, return type and body.
    pub fn fundef_parts(&self) -> Result<FundefParts, ShapeError> {
        if self.op != Operation::Fundef {
            return Err(self.shape_error("not a function definition".to_string()));
        }
        let Some((body, rest)) = self.children.split_last() else {
            return Err(self.shape_error("missing body".to_string()));
        };
        if body.op() != Some(Operation::Sequence) {
            return Err(self.shape_error("body is not a sequence".to_string()));
        }

        let mut params = Vec::with_capacity(rest.len());
        let mut return_type = None;
        for (index, child) in rest.iter().enumerate() {
            match child {
                Ast::Node(pair) if pair.op == Operation::Pair => match pair.children.as_slice() {
                    [Ast::Symbol(name), Ast::Symbol(ty)] => params.push((name.clone(), ty.clone())),
                    _ => return Err(self.shape_error("malformed formal parameter".to_string())),
                },
                Ast::Symbol(ty) if index + 1 == rest.len() => return_type = Some(ty.clone()),
                _ => {
                    return Err(self.shape_error(format!("unexpected child at position {index}")));
                }
            }
        }

        Ok(FundefParts {
            params,
            return_type,
            body: body.clone(),
        })
    }

    fn shape_error(&self, detail: String) -> ShapeError {
        ShapeError {
            op: self.op,
            detail,
        }
    }
}

impl Ast {
    // Construction

    pub fn literal(token: impl Into<String>, value: Literal) -> Self {
        Ast::Literal(LiteralLeaf {
            token: token.into(),
            value,
        })
    }

    pub fn integer(value: i64) -> Self {
        Ast::literal(value.to_string(), Literal::Integer(value))
    }

    pub fn real(value: f64) -> Self {
        Ast::literal(format!("{value:?}"), Literal::Real(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        Ast::literal(value.clone(), Literal::Str(value))
    }

    pub fn boolean(value: bool) -> Self {
        Ast::literal(if value { "TRUE" } else { "FALSE" }, Literal::Boolean(value))
    }

    pub fn symbol(name: &str) -> Self {
        Ast::Symbol(Name::new(name))
    }

    /// An internal node without a name token.
    pub fn node(op: Operation, children: Vec<Ast>) -> Self {
        Ast::Node(Arc::new(Node {
            op,
            token: None,
            children,
        }))
    }

    /// An internal node carrying a function name (named `FUNDEF`/`FUNCALL`).
    pub fn named_node(op: Operation, name: Name, children: Vec<Ast>) -> Self {
        Ast::Node(Arc::new(Node {
            op,
            token: Some(name),
            children,
        }))
    }

    pub fn binary(op: Operation, left: Ast, right: Ast) -> Self {
        Ast::node(op, vec![left, right])
    }

    pub fn unary(op: Operation, operand: Ast) -> Self {
        Ast::node(op, vec![operand])
    }

    // Inspection

    /// The operation of an internal node; `Symbol` for symbol leaves and
    /// `None` for literals.
    pub fn op(&self) -> Option<Operation> {
        match self {
            Ast::Literal(_) => None,
            Ast::Symbol(_) => Some(Operation::Symbol),
            Ast::Node(node) => Some(node.op),
        }
    }

    pub fn as_symbol(&self) -> Option<&Name> {
        match self {
            Ast::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Ast::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Children of an internal node; empty for leaves.
    pub fn children(&self) -> &[Ast] {
        match self {
            Ast::Node(node) => &node.children,
            _ => &[],
        }
    }

    /// Whether evaluating this tree always yields the same value.
    ///
    /// False when the subtree contains a symbol reference or a call by
    /// function name anywhere, since both depend on the environment.
    pub fn is_deterministic(&self) -> bool {
        ensure_sufficient_stack(|| match self {
            Ast::Literal(_) => true,
            Ast::Symbol(_) => false,
            Ast::Node(node) => {
                !node.is_call_by_reference() && node.children.iter().all(Ast::is_deterministic)
            }
        })
    }

    /// Check child counts against operation arities, recursively.
    pub fn validate(&self) -> Result<(), ShapeError> {
        ensure_sufficient_stack(|| {
            let Ast::Node(node) = self else {
                return Ok(());
            };
            let arity = node.op.arity();
            if !arity.accepts(node.children.len()) {
                let expected = match arity {
                    Arity::Fixed(n) => n,
                    Arity::Variadic => 0,
                };
                return Err(node.shape_error(format!(
                    "expected {expected} children, found {}",
                    node.children.len()
                )));
            }
            match node.op {
                Operation::Symbol => {
                    return Err(node.shape_error("symbols must be leaves".to_string()));
                }
                Operation::Select => {
                    if let Some(bad) = node.children.iter().find(|c| c.op() != Some(Operation::Pair)) {
                        return Err(node.shape_error(format!("expected PAIR, found {bad}")));
                    }
                }
                Operation::Bind => {
                    if node.children[0].as_symbol().is_none() {
                        return Err(node.shape_error("binding target is not a symbol".to_string()));
                    }
                }
                Operation::Fundef => {
                    node.fundef_parts()?;
                }
                Operation::Funcall if node.token.is_none() => {
                    if node.children.first().and_then(Ast::op) != Some(Operation::Fundef) {
                        return Err(node.shape_error("anonymous call without a function".to_string()));
                    }
                }
                _ => {}
            }
            node.children.iter().try_for_each(Ast::validate)
        })
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Ast::Literal(leaf) => write!(f, "{}", leaf.value),
            Ast::Symbol(name) => write!(f, "{name}"),
            Ast::Node(node) => {
                write!(f, "({}", node.op)?;
                if let Some(token) = &node.token {
                    write!(f, " {token}")?;
                }
                for child in &node.children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
        })
    }
}
