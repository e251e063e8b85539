//! Outcome of a `vela run`, printable for people or as JSON for tools.

use serde::Serialize;
use vela_eval::{Operand, RealFormat, VelaError};

/// Result of building and evaluating one tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub success: bool,
    /// The value in human-readable form; empty on failure.
    pub output: String,
    pub error: Option<String>,
    /// `"build"` or `"runtime"`.
    pub error_type: Option<String>,
    /// Error kind such as `DivisionByZeroError`.
    pub error_kind: Option<String>,
}

impl RunReport {
    pub fn from_result(result: &Result<Operand, VelaError>, format: &RealFormat) -> Self {
        match result {
            Ok(value) => RunReport {
                success: true,
                output: value.to_human_readable(format),
                error: None,
                error_type: None,
                error_kind: None,
            },
            Err(err) => RunReport {
                success: false,
                output: String::new(),
                error: Some(err.to_string()),
                error_type: Some(err.phase().to_string()),
                error_kind: Some(err.kind_name().to_string()),
            },
        }
    }

    /// Report a failure that happened before any tree was built.
    pub fn input_error(message: impl Into<String>) -> Self {
        RunReport {
            success: false,
            output: String::new(),
            error: Some(message.into()),
            error_type: Some("input".to_string()),
            error_kind: None,
        }
    }

    /// Process exit code: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.success)
    }

    pub fn to_json(&self) -> String {
        // A struct of strings and booleans always serialises.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// One line for a terminal: the value, or `error[kind]: message`.
    pub fn to_text(&self) -> String {
        if self.success {
            return self.output.clone();
        }
        let message = self.error.as_deref().unwrap_or("unknown error");
        match (&self.error_type, &self.error_kind) {
            (Some(phase), Some(kind)) => format!("{phase} error[{kind}]: {message}"),
            (Some(phase), None) => format!("{phase} error: {message}"),
            _ => format!("error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests;
