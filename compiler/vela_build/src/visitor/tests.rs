use super::*;
use crate::test_helpers::*;
use pretty_assertions::assert_eq;

fn visit(tree: &Cst) -> Result<Ast, BuildError> {
    AstVisitor::new(&BuildOptions::default()).visit(tree)
}

#[test]
fn test_visit_exponentiation_nests_right() {
    let tree = chain(
        Rule::ExponentiationExpression,
        int("2"),
        vec![("^", int("3")), ("^", int("2"))],
    );
    assert_eq!(visit(&tree).map(|a| a.to_string()), Ok("(POW 2 (POW 3 2))".to_string()));
}

#[test]
fn test_visit_subtraction_nests_left() {
    let tree = chain(
        Rule::AdditiveExpression,
        int("10"),
        vec![("-", int("3")), ("-", int("2"))],
    );
    assert_eq!(visit(&tree).map(|a| a.to_string()), Ok("(SUB (SUB 10 3) 2)".to_string()));
}

#[test]
fn test_visit_rejects_operator_from_other_level() {
    let tree = chain(Rule::AdditiveExpression, int("1"), vec![("*", int("2"))]);
    assert_eq!(
        visit(&tree),
        Err(BuildError::UnknownOperator {
            rule: Rule::AdditiveExpression,
            text: "*".into()
        })
    );
}

#[test]
fn test_visit_rejects_dangling_operator() {
    let tree = Cst::rule(Rule::AdditiveExpression, vec![int("1"), t("+")]);
    assert!(matches!(visit(&tree), Err(BuildError::MalformedTree { .. })));
}

#[test]
fn test_visit_rejects_terminal_root() {
    assert!(matches!(visit(&t("1")), Err(BuildError::MalformedTree { .. })));
}

#[test]
fn test_visit_deeply_nested_parentheses() {
    let mut tree = int("7");
    for _ in 0..1_000 {
        tree = paren(tree);
    }
    assert_eq!(visit(&tree), Ok(Ast::integer(7)));
}
