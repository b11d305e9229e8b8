//! Static tool catalogue: one MCP tool per `Operation`, with its input schema.
//!
//! The schemas still advertise a `directory` property on most tools; it is
//! accepted and ignored (every command runs in the configured project directory).

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde_json::{Value, json};

use crate::vagrant::Operation;
use crate::vagrant::params::SnapshotAction;

const DIRECTORY_IGNORED: &str =
    "Directory parameter (ignored in containerized mode - uses mounted volume)";
const DIRECTORY: &str = "Directory containing Vagrantfile";

/// All tools, in a stable order.
pub fn catalog() -> Vec<Tool> {
    Operation::variants().iter().map(|op| tool(*op)).collect()
}

pub fn tool(op: Operation) -> Tool {
    let mut tool = Tool::new(op.tool_name(), description(op), Arc::new(input_schema(op)));
    tool.annotations = Some(annotations(op));
    tool
}

pub fn description(op: Operation) -> &'static str {
    match op {
        Operation::Status => "Get the status of Vagrant machines in the current directory",
        Operation::Start => "Start and provision Vagrant machines",
        Operation::Stop => "Stop Vagrant machines gracefully",
        Operation::Destroy => "Destroy Vagrant machines and remove all traces",
        Operation::RemoteExecute => "Execute commands via SSH on Vagrant machine",
        Operation::Provision => "Run provisioners on Vagrant machines",
        Operation::Reload => "Restart Vagrant machines and reload Vagrantfile",
        Operation::Snapshot => "Manage Vagrant snapshots",
        Operation::GlobalStatus => "Get global status of all Vagrant environments",
    }
}

/// JSON schema (`type: object`) describing the tool arguments.
pub fn input_schema(op: Operation) -> JsonObject {
    let schema = match op {
        Operation::Status => json!({
            "type": "object",
            "properties": {
                "directory": {"type": "string", "description": DIRECTORY_IGNORED}
            }
        }),
        Operation::Start => json!({
            "type": "object",
            "properties": {
                "machine_name": {
                    "type": "string",
                    "description": "Name of specific machine to start (optional)"
                },
                "directory": {"type": "string", "description": DIRECTORY_IGNORED},
                "provider": {
                    "type": "string",
                    "description": "Vagrant provider to use (e.g., virtualbox, vmware)"
                },
                "provision": {
                    "type": "boolean",
                    "description": "Whether to run provisioners",
                    "default": true
                }
            }
        }),
        Operation::Stop => json!({
            "type": "object",
            "properties": {
                "machine_name": {
                    "type": "string",
                    "description": "Name of specific machine to stop (optional)"
                },
                "directory": {"type": "string", "description": DIRECTORY},
                "force": {
                    "type": "boolean",
                    "description": "Force halt the machine",
                    "default": false
                }
            }
        }),
        Operation::Destroy => json!({
            "type": "object",
            "properties": {
                "machine_name": {
                    "type": "string",
                    "description": "Name of specific machine to destroy (optional)"
                },
                "directory": {"type": "string", "description": DIRECTORY},
                "force": {
                    "type": "boolean",
                    "description": "Force destroy without confirmation",
                    "default": false
                }
            }
        }),
        Operation::RemoteExecute => json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "Command to execute on the machine"
                },
                "machine_name": {
                    "type": "string",
                    "description": "Name of machine to SSH into (optional if only one machine)"
                },
                "directory": {"type": "string", "description": DIRECTORY}
            },
            "required": ["command"]
        }),
        Operation::Provision => json!({
            "type": "object",
            "properties": {
                "machine_name": {
                    "type": "string",
                    "description": "Name of specific machine to provision (optional)"
                },
                "directory": {"type": "string", "description": DIRECTORY},
                "provision_with": {
                    "type": "string",
                    "description": "Specific provisioner to run"
                }
            }
        }),
        Operation::Reload => json!({
            "type": "object",
            "properties": {
                "machine_name": {
                    "type": "string",
                    "description": "Name of specific machine to reload (optional)"
                },
                "directory": {"type": "string", "description": DIRECTORY},
                "provision": {
                    "type": "boolean",
                    "description": "Whether to run provisioners after reload",
                    "default": false
                }
            }
        }),
        Operation::Snapshot => json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "enum": SnapshotAction::NAMES,
                    "description": "Snapshot action to perform"
                },
                "snapshot_name": {
                    "type": "string",
                    "description": "Name of the snapshot (required for save, restore, delete)"
                },
                "machine_name": {
                    "type": "string",
                    "description": "Name of machine for snapshot operation"
                },
                "directory": {"type": "string", "description": DIRECTORY}
            },
            "required": ["action"]
        }),
        Operation::GlobalStatus => json!({
            "type": "object",
            "properties": {
                "prune": {
                    "type": "boolean",
                    "description": "Prune invalid entries",
                    "default": false
                }
            }
        }),
    };
    match schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

fn annotations(op: Operation) -> ToolAnnotations {
    let read_only = matches!(op, Operation::Status | Operation::GlobalStatus);
    let destructive = matches!(op, Operation::Destroy | Operation::Snapshot);
    let idempotent = matches!(
        op,
        Operation::Status | Operation::Start | Operation::Stop | Operation::Destroy
    );
    ToolAnnotations {
        title: Some(op.title().to_string()),
        read_only_hint: Some(read_only),
        destructive_hint: Some(destructive),
        idempotent_hint: Some(idempotent),
        // ssh can reach anything the guest can
        open_world_hint: Some(op == Operation::RemoteExecute),
    }
}

/// Parameter names and their declared `type`.
pub fn parameter_types(op: Operation) -> Vec<(String, String)> {
    input_schema(op)
        .get("properties")
        .and_then(|v| v.as_object())
        .map(|props| {
            props
                .iter()
                .map(|(name, p)| {
                    let ty = p.get("type").and_then(|t| t.as_str()).unwrap_or("string");
                    (name.clone(), ty.to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Names listed under `required`.
pub fn required_parameters(op: Operation) -> Vec<String> {
    input_schema(op)
        .get("required")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|x| x.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_tools_with_unique_names() {
        let tools = catalog();
        assert_eq!(tools.len(), 9);
        let mut names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn required_lists() {
        for op in Operation::variants() {
            let required = required_parameters(*op);
            match op {
                Operation::RemoteExecute => assert_eq!(required, vec!["command"]),
                Operation::Snapshot => assert_eq!(required, vec!["action"]),
                _ => assert!(required.is_empty(), "{op} should have no required params"),
            }
        }
    }

    #[test]
    fn snapshot_action_enum() {
        let schema = input_schema(Operation::Snapshot);
        assert_eq!(
            schema["properties"]["action"]["enum"],
            json!(["save", "restore", "list", "delete"])
        );
    }

    #[test]
    fn defaults_are_advertised() {
        assert_eq!(
            input_schema(Operation::Start)["properties"]["provision"]["default"],
            json!(true)
        );
        assert_eq!(
            input_schema(Operation::Reload)["properties"]["provision"]["default"],
            json!(false)
        );
        assert_eq!(
            input_schema(Operation::GlobalStatus)["properties"]["prune"]["default"],
            json!(false)
        );
    }

    #[test]
    fn parameter_types_cover_booleans() {
        let types = parameter_types(Operation::Start);
        assert!(types.contains(&("provision".to_string(), "boolean".to_string())));
        assert!(types.contains(&("machine_name".to_string(), "string".to_string())));
        assert!(parameter_types(Operation::GlobalStatus)
            .iter()
            .all(|(name, _)| name != "directory"));
    }

    #[test]
    fn destroy_is_flagged_destructive() {
        let t = tool(Operation::Destroy);
        let a = t.annotations.unwrap();
        assert_eq!(a.destructive_hint, Some(true));
        assert_eq!(a.read_only_hint, Some(false));
    }
}
