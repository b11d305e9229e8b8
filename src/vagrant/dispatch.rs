/*!
dispatch.rs - runs one validated `Invocation` as a `vagrant` child process.

Flow per call:
  1. pre-flight: project directory exists; `Vagrantfile` present (except global-status)
  2. spawn `<bin> <args...>` in the project directory, stdout/stderr piped
  3. destroy without force: write `y\n` to stdin, then close it
  4. wait (no timeout), decode output lossily, classify by exit code

Every failure after validation still yields an `ExecutionResult`, wrapped in
the matching `DispatchError` variant.
*/

use std::process::Stdio;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::params::Invocation;
use super::report::Report;
use super::result::{DispatchError, ExecutionResult, SYNTHETIC_EXIT_CODE};
use crate::config::Config;

pub const MARKER_FILE: &str = "Vagrantfile";

#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Arc<Config>,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a tool name, validate its arguments and run it.
    pub async fn dispatch(
        &self,
        tool_name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<ExecutionResult, DispatchError> {
        let invocation = Invocation::from_tool(tool_name, arguments)?;
        self.run(&invocation).await
    }

    /// Dispatch and convert every outcome into the text response sent to the caller.
    pub async fn respond(&self, tool_name: &str, arguments: &Map<String, Value>) -> Report {
        match Invocation::from_tool(tool_name, arguments) {
            Ok(invocation) => {
                let outcome = self.run(&invocation).await;
                Report::render(&invocation, &outcome)
            }
            Err(e) => Report::caller_error(&e),
        }
    }

    /// Run an already validated invocation. `Ok` only when the tool exited 0.
    pub async fn run(&self, invocation: &Invocation) -> Result<ExecutionResult, DispatchError> {
        let program = self.config.vagrant_bin();
        let mut argv = Vec::with_capacity(8);
        argv.push(program.to_string());
        argv.extend(invocation.args());

        let cwd = self.config.projects_dir();
        let cwd_display = cwd.display().to_string();

        if !cwd.exists() {
            return Err(DispatchError::Preflight(ExecutionResult::synthetic(
                argv,
                cwd_display.clone(),
                format!("Directory does not exist: {cwd_display}"),
            )));
        }
        if invocation.operation().requires_vagrantfile() && !cwd.join(MARKER_FILE).exists() {
            return Err(DispatchError::Preflight(ExecutionResult::synthetic(
                argv,
                cwd_display.clone(),
                format!("No Vagrantfile found in: {cwd_display}"),
            )));
        }

        tracing::info!("Running command: {} in {}", argv.join(" "), cwd_display);

        let input = invocation.stdin_input();
        let mut cmd = Command::new(program);
        cmd.args(&argv[1..])
            .current_dir(cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let output = match spawn_and_collect(&mut cmd, input).await {
            Ok(output) => output,
            Err(e) => {
                tracing::error!("Failed to run vagrant command: {e}");
                return Err(DispatchError::Spawn(ExecutionResult::synthetic(
                    argv,
                    cwd_display,
                    e.to_string(),
                )));
            }
        };

        let result = ExecutionResult::completed(
            argv,
            cwd_display,
            output.status.code().unwrap_or(SYNTHETIC_EXIT_CODE),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );
        tracing::debug!(
            return_code = result.return_code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "vagrant finished"
        );

        if result.success {
            Ok(result)
        } else {
            Err(DispatchError::ToolFailure(result))
        }
    }
}

async fn spawn_and_collect(
    cmd: &mut Command,
    input: Option<&str>,
) -> std::io::Result<std::process::Output> {
    let mut child = cmd.spawn()?;
    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        // The tool may exit without reading its prompt; a broken pipe is not fatal.
        if let Err(e) = stdin.write_all(text.as_bytes()).await {
            tracing::debug!("stdin write failed: {e}");
        }
        drop(stdin);
    }
    child.wait_with_output().await
}
