/*!
shared.rs - helpers shared by CLI subcommands.

Focus:
  - resolve_tool: tool-name lookup with a few operator-friendly spellings
  - build_arguments: KEY=VALUE strings -> JSON arguments, coerced by schema type
  - load_param_file_into_map: JSON / YAML parameter files
*/

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::mcp::catalog::parameter_types;
use crate::vagrant::Operation;

/// Accepts the exact tool name, any casing of it, or the bare verb
/// (`up` -> `vagrant_up`).
pub fn resolve_tool(name: &str) -> Option<Operation> {
    let norm = name.trim().to_ascii_lowercase();
    let prefixed = if norm.starts_with("vagrant_") {
        norm
    } else {
        format!("vagrant_{}", norm.replace('-', "_"))
    };
    Operation::from_tool_name(&prefixed)
}

/// Parse repeated `--param KEY=VALUE` flags.
pub fn parse_param_flags(params: &[String]) -> Result<HashMap<String, String>> {
    let mut provided = HashMap::new();
    for kv in params {
        let Some((k, v)) = kv.split_once('=') else {
            anyhow::bail!("invalid --param (expected KEY=VALUE): {kv}");
        };
        let key = k.trim();
        if key.is_empty() {
            anyhow::bail!("invalid --param (empty key): {kv}");
        }
        provided.insert(key.to_string(), v.trim().to_string());
    }
    Ok(provided)
}

/// Build a JSON arguments object for `op`.
///
/// Values for declared parameters are coerced using the schema `type`
/// (boolean / integer / number / string). Keys the schema does not declare are
/// passed through as strings; the dispatcher ignores them.
pub fn build_arguments(
    op: Operation,
    provided: &HashMap<String, String>,
) -> serde_json::Map<String, serde_json::Value> {
    let types: HashMap<String, String> = parameter_types(op).into_iter().collect();
    provided
        .iter()
        .map(|(k, raw)| {
            let ty = types.get(k).map(String::as_str).unwrap_or("string");
            (k.clone(), coerce_value(raw, ty))
        })
        .collect()
}

/// Attempt to coerce a raw string into a JSON value using a primitive type hint.
/// Unparseable values stay strings so the dispatcher can report the mismatch.
pub fn coerce_value(raw: &str, type_hint: &str) -> serde_json::Value {
    use serde_json::Value;
    match type_hint {
        "integer" => raw
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or_else(|_| Value::String(raw.to_string())),
        "number" => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        "boolean" => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Value::Bool(true),
            "false" | "0" | "no" | "n" => Value::Bool(false),
            _ => Value::String(raw.to_string()),
        },
        _ => Value::String(raw.to_string()),
    }
}

/// Merge a JSON or YAML object into `provided`. Keys already present (from
/// `--param`) win over the file; `null` entries count as absent.
pub fn load_param_file_into_map(path: &str, provided: &mut HashMap<String, String>) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read param file: {path}"))?;
    let lower = path.to_ascii_lowercase();

    let value: serde_json::Value = if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        let yaml_v: serde_yaml::Value =
            serde_yaml::from_str(&raw).context("failed to parse YAML param file")?;
        serde_json::to_value(yaml_v).context("failed to convert YAML to JSON")?
    } else {
        serde_json::from_str(&raw).context("failed to parse JSON param file")?
    };

    let obj = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("param file root must be an object"))?;

    for (k, v) in obj {
        if provided.contains_key(k) {
            continue;
        }
        let s = match v {
            serde_json::Value::Null => continue,
            serde_json::Value::String(sv) => sv.clone(),
            _ => v.to_string(),
        };
        provided.insert(k.clone(), s);
    }
    Ok(())
}
