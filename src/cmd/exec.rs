/*!
`exec.rs`

Implements `vagrant-mcp-server exec <TOOL>`: runs one tool through the same
dispatcher the MCP server uses, printing the same text report. Handy for
checking a host's setup (project mount, `vagrant` on PATH) without a client.

Parameter injection:
  --param KEY=VALUE               (repeatable)
  --param-file params.(json|yaml) (merged; --param overrides file entries)
Values are coerced by the tool's schema type (e.g. `provision=false` -> bool).

JSON Output (--json):
{
  "status": "ok" | "error",
  "tool": "vagrant_up",
  "arguments": { ... },
  "result": { "argv": [...], "return_code": 0, "stdout": "...", ... }
}
Caller errors have no "result", only "error".
*/

use anyhow::{Context, Result};
use clap::Args;

use crate::cmd::shared::{
    build_arguments, load_param_file_into_map, parse_param_flags, resolve_tool,
};
use crate::config::Config;
use crate::vagrant::{DispatchError, Dispatcher, ExecutionResult, Invocation, Report};

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Tool to invoke (e.g. vagrant_status, or just `status`)
    #[arg(value_name = "TOOL")]
    pub tool: String,

    /// Provide parameter (KEY=VALUE), repeatable
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Load parameters from file (JSON or YAML). CLI --param overrides file entries
    #[arg(long = "param-file", value_name = "PATH")]
    pub param_file: Option<String>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute_exec(args: ExecArgs, config: Config) -> Result<()> {
    let op = resolve_tool(&args.tool)
        .ok_or_else(|| anyhow::anyhow!("unknown tool: '{}'", args.tool.trim()))?;

    let mut provided = parse_param_flags(&args.params)?;
    if let Some(ref pf) = args.param_file {
        load_param_file_into_map(pf, &mut provided)?;
    }
    let arguments = build_arguments(op, &provided);
    tracing::debug!(tool = op.tool_name(), ?arguments, "exec");

    // Caller errors reach the terminal once, through main's error exit.
    let invocation = match Invocation::parse(op, &arguments) {
        Ok(inv) => inv,
        Err(e) => {
            if args.json {
                print_json(&serde_json::json!({
                    "status": "error",
                    "tool": op.tool_name(),
                    "arguments": arguments,
                    "error": e.to_string(),
                }));
            }
            return Err(e.into());
        }
    };

    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    let dispatcher = Dispatcher::new(config);
    let outcome = rt.block_on(dispatcher.run(&invocation));

    if args.json {
        let result: Option<&ExecutionResult> = match &outcome {
            Ok(r) => Some(r),
            Err(e) => e.execution(),
        };
        print_json(&serde_json::json!({
            "status": if outcome.is_ok() { "ok" } else { "error" },
            "tool": op.tool_name(),
            "arguments": arguments,
            "result": result,
        }));
    } else {
        let report = Report::render(&invocation, &outcome);
        print!("{}", report.text);
        if !report.text.ends_with('\n') {
            println!();
        }
    }

    match outcome {
        Ok(_) => Ok(()),
        Err(e @ DispatchError::ToolFailure(_)) => Err(e.into()),
        Err(e) => {
            Err(anyhow::Error::new(e).context(format!("{} did not run", op.tool_name())))
        }
    }
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}
