//! Execution outcome types.
//!
//! `ExecutionResult` is what one `vagrant` invocation produced (real or synthetic).
//! `DispatchError` classifies why a dispatch did not succeed; every variant except
//! `Caller` still carries the result so the report can be rendered from it.

use serde::Serialize;
use thiserror::Error;

/// Exit code recorded when no real one exists (pre-flight, spawn failure, signal).
pub const SYNTHETIC_EXIT_CODE: i32 = -1;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Program followed by its arguments.
    pub argv: Vec<String>,
    pub return_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub working_directory: String,
}

impl ExecutionResult {
    pub fn completed(
        argv: Vec<String>,
        working_directory: String,
        return_code: i32,
        stdout: String,
        stderr: String,
    ) -> Self {
        Self {
            argv,
            success: return_code == 0,
            return_code,
            stdout,
            stderr,
            working_directory,
        }
    }

    /// A failed result that never reached (or never finished) a real process.
    pub fn synthetic(argv: Vec<String>, working_directory: String, message: String) -> Self {
        Self::completed(
            argv,
            working_directory,
            SYNTHETIC_EXIT_CODE,
            String::new(),
            message,
        )
    }

    /// Command line as shown in reports: plain space join, no quoting.
    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Missing or invalid caller-supplied parameter. Nothing was spawned.
    #[error("{0}")]
    Caller(String),

    /// Project directory or `Vagrantfile` missing. Nothing was spawned.
    #[error("pre-flight check failed: {}", .0.stderr)]
    Preflight(ExecutionResult),

    /// The tool binary could not be launched (or its streams failed).
    #[error("failed to run vagrant command: {}", .0.stderr)]
    Spawn(ExecutionResult),

    /// The tool ran and exited non-zero.
    #[error("vagrant exited with code {}", .0.return_code)]
    ToolFailure(ExecutionResult),
}

impl DispatchError {
    pub fn caller(msg: impl Into<String>) -> Self {
        DispatchError::Caller(msg.into())
    }

    /// The execution result behind this error, if a command line was built.
    pub fn execution(&self) -> Option<&ExecutionResult> {
        match self {
            DispatchError::Caller(_) => None,
            DispatchError::Preflight(r) | DispatchError::Spawn(r) | DispatchError::ToolFailure(r) => {
                Some(r)
            }
        }
    }
}
