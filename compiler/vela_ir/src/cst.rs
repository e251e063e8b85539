//! Concrete syntax trees.
//!
//! VeLa source text is parsed by an external grammar; what reaches this
//! workspace is the parse tree, expressed as [`Cst`]. A tree is a rule node
//! with ordered children, or a terminal holding the exact token text.
//!
//! Trees are consumed two ways. The visitor builder matches on nodes
//! directly. The listener builder drives [`walk`], which calls a
//! [`CstListener`] on entry to and exit from every rule node and for every
//! terminal, in document order.

use std::fmt;

use vela_stack::ensure_sufficient_stack;

/// Grammar rules a parse tree can contain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Rule {
    Sequence,
    Binding,
    WhileLoop,
    NamedFundef,
    AnonFundef,
    FormalParameter,
    Type,
    Expression,
    SelectionExpression,
    Consequent,
    BooleanExpression,
    ConjunctiveExpression,
    LogicalNegationExpression,
    RelationalExpression,
    AdditiveExpression,
    MultiplicativeExpression,
    UnaryExpression,
    ExponentiationExpression,
    Factor,
    Funcall,
    Funobj,
    Block,
    List,
    Integer,
    Real,
    Bool,
    String,
    Symbol,
}

impl Rule {
    /// The rule name as spelled in serialized trees.
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Sequence => "sequence",
            Rule::Binding => "binding",
            Rule::WhileLoop => "while_loop",
            Rule::NamedFundef => "named_fundef",
            Rule::AnonFundef => "anon_fundef",
            Rule::FormalParameter => "formal_parameter",
            Rule::Type => "type",
            Rule::Expression => "expression",
            Rule::SelectionExpression => "selection_expression",
            Rule::Consequent => "consequent",
            Rule::BooleanExpression => "boolean_expression",
            Rule::ConjunctiveExpression => "conjunctive_expression",
            Rule::LogicalNegationExpression => "logical_negation_expression",
            Rule::RelationalExpression => "relational_expression",
            Rule::AdditiveExpression => "additive_expression",
            Rule::MultiplicativeExpression => "multiplicative_expression",
            Rule::UnaryExpression => "unary_expression",
            Rule::ExponentiationExpression => "exponentiation_expression",
            Rule::Factor => "factor",
            Rule::Funcall => "funcall",
            Rule::Funobj => "funobj",
            Rule::Block => "block",
            Rule::List => "list",
            Rule::Integer => "integer",
            Rule::Real => "real",
            Rule::Bool => "bool",
            Rule::String => "string",
            Rule::Symbol => "symbol",
        }
    }

    /// Leaf rules whose only child is a single terminal.
    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            Rule::Integer | Rule::Real | Rule::Bool | Rule::String | Rule::Symbol | Rule::Type
        )
    }

    /// Rules that chain operands with operator terminals.
    pub const fn is_dyadic(self) -> bool {
        matches!(
            self,
            Rule::BooleanExpression
                | Rule::ConjunctiveExpression
                | Rule::RelationalExpression
                | Rule::AdditiveExpression
                | Rule::MultiplicativeExpression
                | Rule::ExponentiationExpression
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete syntax tree node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Cst {
    Rule {
        rule: Rule,
        #[cfg_attr(feature = "serde", serde(default))]
        children: Vec<Cst>,
    },
    Terminal {
        text: String,
    },
}

impl Drop for Cst {
    fn drop(&mut self) {
        // Flatten nested rule nodes into a worklist; recursive drop glue
        // would overflow on deeply parenthesised input.
        let Cst::Rule { children, .. } = self else {
            return;
        };
        if children.iter().all(|child| child.children().is_empty()) {
            return;
        }
        let mut pending = std::mem::take(children);
        while let Some(mut child) = pending.pop() {
            if let Cst::Rule { children, .. } = &mut child {
                pending.append(children);
            }
        }
    }
}

impl Cst {
    pub fn rule(rule: Rule, children: Vec<Cst>) -> Self {
        Cst::Rule { rule, children }
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Cst::Terminal { text: text.into() }
    }

    /// A lexical rule wrapping one terminal, e.g. `integer("42")`.
    pub fn lexical(rule: Rule, text: impl Into<String>) -> Self {
        Cst::rule(rule, vec![Cst::terminal(text)])
    }

    pub fn rule_kind(&self) -> Option<Rule> {
        match self {
            Cst::Rule { rule, .. } => Some(*rule),
            Cst::Terminal { .. } => None,
        }
    }

    /// Children of a rule node; empty for terminals.
    pub fn children(&self) -> &[Cst] {
        match self {
            Cst::Rule { children, .. } => children,
            Cst::Terminal { .. } => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Cst::Rule { .. } => None,
            Cst::Terminal { text } => Some(text),
        }
    }

    /// Whether this is a terminal spelling `keyword`, ignoring ASCII case.
    pub fn is_terminal(&self, keyword: &str) -> bool {
        self.text().is_some_and(|text| text.eq_ignore_ascii_case(keyword))
    }
}

/// Callbacks for a depth-first walk of a [`Cst`].
///
/// Every callback may fail; the walk stops at the first error and returns
/// it.
pub trait CstListener {
    type Error;

    fn enter_rule(&mut self, rule: Rule, children: &[Cst]) -> Result<(), Self::Error> {
        let _ = (rule, children);
        Ok(())
    }

    fn exit_rule(&mut self, rule: Rule, children: &[Cst]) -> Result<(), Self::Error>;

    fn visit_terminal(&mut self, text: &str) -> Result<(), Self::Error> {
        let _ = text;
        Ok(())
    }
}

/// Walk `tree` depth-first, notifying `listener`.
pub fn walk<L: CstListener + ?Sized>(listener: &mut L, tree: &Cst) -> Result<(), L::Error> {
    ensure_sufficient_stack(|| match tree {
        Cst::Terminal { text } => listener.visit_terminal(text),
        Cst::Rule { rule, children } => {
            listener.enter_rule(*rule, children)?;
            for child in children {
                walk(listener, child)?;
            }
            listener.exit_rule(*rule, children)
        }
    })
}
