#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use vela_build::{BuildOptions, BuilderKind};
use vela_eval::{EvalConfig, HostValue, RealFormat};
use vela_ir::{Cst, Rule, Type};

use super::*;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn run_options(items: &[&str]) -> RunOptions {
    parse_run_options(&args(items)).unwrap()
}

fn int(text: &str) -> Cst {
    Cst::lexical(Rule::Integer, text)
}

fn sym(text: &str) -> Cst {
    Cst::lexical(Rule::Symbol, text)
}

fn bin(rule: Rule, left: Cst, op: &str, right: Cst) -> Cst {
    Cst::rule(rule, vec![left, Cst::terminal(op), right])
}

mod option_parsing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = run_options(&["tree.json"]);
        assert_eq!(options.path, "tree.json");
        assert_eq!(options.builder, BuilderKind::Visitor);
        assert_eq!(options.config, EvalConfig::default());
        assert_eq!(options.build_options, BuildOptions::default());
        assert!(options.bindings.is_empty());
        assert!(!options.json);
    }

    #[test]
    fn test_all_flags() {
        let options = run_options(&[
            "--builder=listener",
            "tree.json",
            "--precision=2",
            "--tolerance=0.01",
            "--max-depth=50",
            "--no-intrinsics",
            "--json",
        ]);
        assert_eq!(options.builder, BuilderKind::Listener);
        assert_eq!(options.config.real_format, RealFormat::new(2));
        assert_eq!(options.config.approx_tolerance, 0.01);
        assert_eq!(options.config.max_call_depth, Some(50));
        assert!(!options.config.install_intrinsics);
        assert!(options.json);
    }

    #[test]
    fn test_usage_errors() {
        assert!(parse_run_options(&args(&[])).is_err());
        assert!(parse_run_options(&args(&["a.json", "b.json"])).is_err());
        assert!(parse_run_options(&args(&["a.json", "--fast"])).is_err());
        assert!(parse_run_options(&args(&["a.json", "--builder=parser"])).is_err());
        assert!(parse_run_options(&args(&["a.json", "--precision=-1"])).is_err());
        assert!(parse_run_options(&args(&["a.json", "--tolerance=-1"])).is_err());
        assert!(parse_run_options(&args(&["a.json", "--decimal-separator=ab"])).is_err());
        assert!(parse_run_options(&args(&["a.json", "--bind=novalue"])).is_err());
    }

    #[test]
    fn test_decimal_separator_applies_to_earlier_bindings() {
        let options = run_options(&["--bind=X=2,5", "a.json", "--decimal-separator=,"]);
        assert_eq!(options.build_options.decimal_separator, ',');
        assert_eq!(options.bindings[0].value, HostValue::Real(2.5));
    }

    #[test]
    fn test_ast_options() {
        assert_eq!(
            parse_ast_options(&args(&["t.json", "--builder=listener"])),
            Ok(("t.json".to_string(), BuilderKind::Listener))
        );
        assert!(parse_ast_options(&args(&["--json"])).is_err());
        assert!(parse_ast_options(&args(&[])).is_err());
    }
}

mod host_bindings {
    use super::*;
    use pretty_assertions::assert_eq;

    fn binding(text: &str) -> (Type, HostValue) {
        let binding = parse_binding(text, &BuildOptions::default()).unwrap();
        (binding.ty, binding.value)
    }

    #[test]
    fn test_literal_kinds() {
        assert_eq!(binding("N=42"), (Type::Integer, HostValue::Integer(42)));
        assert_eq!(binding("X=-1.5e2"), (Type::Real, HostValue::Real(-150.0)));
        assert_eq!(binding("B=true"), (Type::Boolean, HostValue::Boolean(true)));
        assert_eq!(binding("B=#F"), (Type::Boolean, HostValue::Boolean(false)));
        assert_eq!(
            binding("S=\"a=b\""),
            (Type::String, HostValue::Str("a=b".to_string()))
        );
        assert_eq!(
            binding("S=plain"),
            (Type::String, HostValue::Str("plain".to_string()))
        );
    }

    #[test]
    fn test_name_is_trimmed_and_required() {
        let parsed = parse_binding(" RATE =3", &BuildOptions::default()).unwrap();
        assert_eq!(parsed.name, "RATE");
        assert!(parse_binding("=3", &BuildOptions::default()).is_err());
    }
}

mod evaluation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_evaluates_with_bindings() {
        // 2 * X
        let tree = bin(Rule::MultiplicativeExpression, int("2"), "*", sym("X"));
        let options = run_options(&["t.json", "--bind=X=2.25"]);
        let report = evaluate_tree(&tree, &options);
        assert!(report.success);
        assert_eq!(report.output, "4.5");
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_both_builders_agree() {
        let tree = bin(Rule::AdditiveExpression, int("1"), "+", int("2"));
        for builder in ["--builder=listener", "--builder=visitor"] {
            let report = evaluate_tree(&tree, &run_options(&["t.json", builder]));
            assert_eq!(report.output, "3");
        }
    }

    #[test]
    fn test_runtime_error_report() {
        let tree = bin(Rule::MultiplicativeExpression, int("1"), "/", int("0"));
        let report = evaluate_tree(&tree, &run_options(&["t.json"]));
        assert!(!report.success);
        assert_eq!(report.error_type.as_deref(), Some("runtime"));
        assert_eq!(report.error_kind.as_deref(), Some("DivisionByZeroError"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_build_error_report() {
        let tree = Cst::lexical(Rule::Integer, "12x");
        let report = evaluate_tree(&tree, &run_options(&["t.json"]));
        assert_eq!(report.error_type.as_deref(), Some("build"));
        assert_eq!(report.error_kind.as_deref(), Some("NumberFormatError"));
    }

    #[test]
    fn test_without_intrinsics() {
        let tree = Cst::rule(
            Rule::Funcall,
            vec![
                Cst::rule(Rule::Funobj, vec![sym("LENGTH")]),
                Cst::terminal("("),
                Cst::rule(Rule::List, vec![Cst::terminal("["), Cst::terminal("]")]),
                Cst::terminal(")"),
            ],
        );
        let report = evaluate_tree(&tree, &run_options(&["t.json"]));
        assert_eq!(report.output, "0");

        let report = evaluate_tree(&tree, &run_options(&["t.json", "--no-intrinsics"]));
        assert_eq!(report.error_kind.as_deref(), Some("UnboundSymbolError"));
    }

    #[test]
    fn test_first_binding_wins() {
        let options = run_options(&["t.json", "--bind=X=1", "--bind=X=2"]);
        let report = evaluate_tree(&sym("X"), &options);
        assert_eq!(report.output, "1");
    }

    #[test]
    fn test_unreadable_file() {
        let options = run_options(&["/nonexistent/tree.json", "--json"]);
        assert_eq!(run_file(&options), 1);
    }
}

mod trees {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tree_from_json() {
        let json = r#"{"rule":"additive_expression","children":[
            {"rule":"integer","children":[{"text":"1"}]},
            {"text":"+"},
            {"rule":"symbol","children":[{"text":"X"}]}
        ]}"#;
        let tree = parse_tree(json).unwrap();
        assert_eq!(
            tree,
            bin(Rule::AdditiveExpression, int("1"), "+", sym("X"))
        );
        assert_eq!(
            describe_tree(&tree, BuilderKind::Listener).unwrap(),
            "(ADD 1 X)\ndeterministic: no"
        );
    }

    #[test]
    fn test_describe_deterministic_tree() {
        let tree = bin(Rule::AdditiveExpression, int("1"), "+", int("2"));
        assert_eq!(
            describe_tree(&tree, BuilderKind::Visitor).unwrap(),
            "(ADD 1 2)\ndeterministic: yes"
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_tree("{\"rule\":\"no_such_rule\"}").unwrap_err();
        assert!(err.starts_with("invalid syntax tree"));
        assert!(read_tree("/nonexistent/tree.json").is_err());
    }
}
