#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use vela_build::BuildError;
use vela_eval::{EvalError, Operand, RealFormat, VelaError};

use super::RunReport;

#[test]
fn test_success_is_human_readable() {
    let value = Operand::List(vec![Operand::Real(1.0 / 3.0), Operand::from("s")]);
    let report = RunReport::from_result(&Ok(value), &RealFormat::new(2));
    assert_eq!(report.output, "[0.33 \"s\"]");
    assert_eq!(report.to_text(), "[0.33 \"s\"]");

    let report = RunReport::from_result(&Ok(Operand::from("plain")), &RealFormat::default());
    assert_eq!(report.output, "plain");
}

#[test]
fn test_json_shape() {
    let report = RunReport::from_result(&Ok(Operand::Integer(7)), &RealFormat::default());
    assert_eq!(
        report.to_json(),
        r#"{"success":true,"output":"7","error":null,"error_type":null,"error_kind":null}"#
    );

    let err = VelaError::from(EvalError::DivisionByZero);
    let report = RunReport::from_result(&Err(err), &RealFormat::default());
    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "division by zero");
    assert_eq!(json["error_type"], "runtime");
}

#[test]
fn test_error_text_names_phase_and_kind() {
    let err = VelaError::from(BuildError::UnknownType("COMPLEX".to_string()));
    let report = RunReport::from_result(&Err(err), &RealFormat::default());
    assert_eq!(
        report.to_text(),
        "build error[SyntaxError]: unknown type `COMPLEX`"
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_input_error() {
    let report = RunReport::input_error("cannot read 'x.json'");
    assert!(!report.success);
    assert_eq!(report.to_text(), "input error: cannot read 'x.json'");
}
