//! Text rendering of dispatch outcomes.
//!
//! This is the single place where `DispatchError` turns into caller-facing text:
//!
//! ```text
//! Vagrant Up:
//! Command: vagrant up web
//! Return Code: 0
//!
//! Output:
//! <captured stdout>
//! ```
//!
//! Failures end with `Error:` and the captured stderr instead. Status reports
//! also name the working directory. Caller errors are a single `Error: <msg>` line.

use super::operation::Operation;
use super::params::Invocation;
use super::result::{DispatchError, ExecutionResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub is_error: bool,
}

impl Report {
    pub fn render(
        invocation: &Invocation,
        outcome: &Result<ExecutionResult, DispatchError>,
    ) -> Self {
        let result = match outcome {
            Ok(r) => r,
            Err(e) => match e.execution() {
                Some(r) => r,
                None => return Self::caller_error(e),
            },
        };

        let mut text = format!(
            "{}:\nCommand: {}\n",
            invocation.title(),
            result.command_line()
        );
        if invocation.operation() == Operation::Status {
            text.push_str(&format!("Working Directory: {}\n", result.working_directory));
        }
        text.push_str(&format!("Return Code: {}\n\n", result.return_code));
        if result.success {
            text.push_str("Output:\n");
            text.push_str(&result.stdout);
        } else {
            text.push_str("Error:\n");
            text.push_str(&result.stderr);
        }

        Self {
            text,
            is_error: !result.success,
        }
    }

    pub fn caller_error(err: &DispatchError) -> Self {
        Self {
            text: format!("Error: {err}"),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    impl Report {
        /// Everything after the `Output:`/`Error:` header line.
        fn body(&self) -> &str {
            let marker = if self.is_error { "\n\nError:\n" } else { "\n\nOutput:\n" };
            match self.text.find(marker) {
                Some(i) => &self.text[i + marker.len()..],
                None => &self.text,
            }
        }
    }

    fn invocation(tool: &str, args: serde_json::Value) -> Invocation {
        Invocation::from_tool(tool, args.as_object().unwrap()).unwrap()
    }

    fn result(code: i32, stdout: &str, stderr: &str) -> ExecutionResult {
        ExecutionResult::completed(
            vec!["vagrant".into(), "up".into(), "web".into()],
            "/vagrant-projects".into(),
            code,
            stdout.into(),
            stderr.into(),
        )
    }

    #[test]
    fn success_report_layout() {
        let inv = invocation("vagrant_up", json!({"machine_name":"web"}));
        let r = Report::render(&inv, &Ok(result(0, "Bringing machine 'web' up\n", "warn")));
        assert!(!r.is_error);
        assert_eq!(
            r.text,
            "Vagrant Up:\nCommand: vagrant up web\nReturn Code: 0\n\nOutput:\nBringing machine 'web' up\n"
        );
        assert_eq!(r.body(), "Bringing machine 'web' up\n");
    }

    #[test]
    fn failure_report_uses_stderr_verbatim() {
        let inv = invocation("vagrant_up", json!({"machine_name":"web"}));
        let failed = result(1, "partial", "The provider 'virtualbox' could not be found.\n");
        let r = Report::render(&inv, &Err(DispatchError::ToolFailure(failed)));
        assert!(r.is_error);
        assert!(r.text.contains("Return Code: 1\n\nError:\n"));
        assert_eq!(r.body(), "The provider 'virtualbox' could not be found.\n");
    }

    #[test]
    fn status_report_names_working_directory() {
        let inv = invocation("vagrant_status", json!({}));
        let r = Report::render(&inv, &Ok(result(0, "running", "")));
        assert!(r.text.starts_with("Vagrant Status:\nCommand: "));
        assert!(r.text.contains("\nWorking Directory: /vagrant-projects\nReturn Code: 0\n"));
    }

    #[test]
    fn preflight_report_shows_synthetic_code() {
        let inv = invocation("vagrant_halt", json!({}));
        let synthetic = ExecutionResult::synthetic(
            vec!["vagrant".into(), "halt".into()],
            "/missing".into(),
            "Directory does not exist: /missing".into(),
        );
        let r = Report::render(&inv, &Err(DispatchError::Preflight(synthetic)));
        assert!(r.is_error);
        assert!(r.text.starts_with("Vagrant Halt:\nCommand: vagrant halt\nReturn Code: -1\n"));
        assert_eq!(r.body(), "Directory does not exist: /missing");
    }

    #[test]
    fn caller_error_is_single_line() {
        let r = Report::caller_error(&DispatchError::caller("action parameter is required"));
        assert!(r.is_error);
        assert_eq!(r.text, "Error: action parameter is required");
    }

    #[test]
    fn empty_output_body() {
        let inv = invocation("vagrant_global_status", json!({}));
        let r = Report::render(&inv, &Ok(result(0, "", "")));
        assert_eq!(r.body(), "");
        assert!(r.text.starts_with("Vagrant Global Status:\n"));
    }
}
