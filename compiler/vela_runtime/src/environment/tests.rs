use super::*;
use crate::FunctionValue;
use pretty_assertions::assert_eq;

#[test]
fn test_bind_lookup() {
    let env = Environment::new();
    assert!(env.bind("x", Operand::Integer(42)));
    assert_eq!(env.lookup("x"), Some(Operand::Integer(42)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_names_are_case_insensitive() {
    let env = Environment::new();
    env.bind("Count", Operand::Integer(1));
    assert_eq!(env.lookup("COUNT"), Some(Operand::Integer(1)));
    assert_eq!(env.lookup_name(&Name::new("count")), Some(Operand::Integer(1)));
    assert!(env.is_bound_locally("count"));
}

#[test]
fn test_first_bind_wins() {
    let env = Environment::new();
    assert!(env.bind("x", Operand::Integer(1)));
    assert!(!env.bind("x", Operand::Integer(2)));
    assert_eq!(env.lookup("x"), Some(Operand::Integer(1)));
}

#[test]
fn test_child_shadows_parent() {
    let parent = Environment::new();
    parent.bind("x", Operand::Integer(1));

    let child = parent.child();
    assert_eq!(child.lookup("x"), Some(Operand::Integer(1)));
    assert!(child.bind("x", Operand::Integer(2)));
    assert_eq!(child.lookup("x"), Some(Operand::Integer(2)));
    assert_eq!(parent.lookup("x"), Some(Operand::Integer(1)));
}

#[test]
fn test_child_binding_invisible_to_parent() {
    let parent = Environment::new();
    let child = parent.child();
    child.bind("local", Operand::Boolean(true));
    assert_eq!(parent.lookup("local"), None);
    assert!(!parent.is_bound_locally("local"));
}

#[test]
fn test_depth_and_parent() {
    let root = Environment::new();
    let grandchild = root.child().child();
    assert_eq!(root.depth(), 0);
    assert_eq!(grandchild.depth(), 2);
    assert!(grandchild
        .parent()
        .and_then(|p| p.parent())
        .is_some_and(|p| p.ptr_eq(&root)));
}

#[test]
fn test_local_names_sorted() {
    let env = Environment::new();
    env.bind("b", Operand::Integer(2));
    env.bind("a", Operand::Integer(1));
    assert_eq!(env.local_names(), vec![Name::new("A"), Name::new("B")]);
}

#[test]
fn test_clear_breaks_self_reference() {
    let env = Environment::new();
    // A value that keeps the environment alive from inside it.
    let captured = env.clone();
    let f = FunctionValue::intrinsic("self_ref", vec![], None, move |_| {
        Ok(Operand::Integer(captured.depth() as i64))
    });
    env.bind("f", Operand::Function(f));
    assert_eq!(Rc::strong_count(&env.0), 2);

    env.clear();
    assert_eq!(Rc::strong_count(&env.0), 1);
    assert_eq!(env.lookup("f"), None);
}
