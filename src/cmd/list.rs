/*!
`list.rs`

Implements `vagrant-mcp-server list`: prints the tool catalogue the server
advertises over `tools/list`, without starting the server.

JSON Output Shape:
{
  "status": "ok",
  "count": 9,
  "tools": [
    { "name": "vagrant_status", "description": "...", "input_schema": { ... } },
    ...
  ]
}
*/

use anyhow::Result;
use clap::Args;

use crate::cmd::format::{Role, StyleOptions, color, table};
use crate::mcp::catalog::{self, parameter_types, required_parameters};
use crate::vagrant::Operation;

/// CLI arguments for `vagrant-mcp-server list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(args: ListArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog_json())?);
        return Ok(());
    }

    let style = StyleOptions::detect();
    let ops = Operation::variants();
    println!(
        "{}",
        color(Role::Primary, format!("Tools ({})", ops.len()), &style)
    );

    let rows: Vec<Vec<String>> = ops
        .iter()
        .map(|op| {
            vec![
                op.tool_name().to_string(),
                param_summary(*op),
                catalog::description(*op).to_string(),
            ]
        })
        .collect();
    println!("{}", table(&["NAME", "PARAMS", "DESCRIPTION"], &rows, &style));
    println!(
        "\n{}",
        color(Role::Dim, "* = required; `directory` is accepted but ignored", &style)
    );
    Ok(())
}

fn catalog_json() -> serde_json::Value {
    let tools: Vec<serde_json::Value> = Operation::variants()
        .iter()
        .map(|op| {
            serde_json::json!({
                "name": op.tool_name(),
                "description": catalog::description(*op),
                "input_schema": catalog::input_schema(*op),
            })
        })
        .collect();
    serde_json::json!({
        "status": "ok",
        "count": tools.len(),
        "tools": tools,
    })
}

/// `name:type` pairs, required ones starred, `directory` omitted.
fn param_summary(op: Operation) -> String {
    let required = required_parameters(op);
    let pairs: Vec<String> = parameter_types(op)
        .into_iter()
        .filter(|(name, _)| name != "directory")
        .map(|(name, ty)| {
            let star = if required.contains(&name) { "*" } else { "" };
            format!("{name}{star}:{ty}")
        })
        .collect();
    if pairs.is_empty() {
        "-".to_string()
    } else {
        pairs.join(", ")
    }
}
