/*!
Typed parameters per operation, and translation into `vagrant` arguments.

Incoming MCP arguments are a loose JSON object. Each operation decodes them into
its own struct (unknown keys such as `directory` are ignored), validates required
fields, and then `Invocation::args` produces the exact argument list.

Empty strings count as absent, so `{"machine_name": ""}` targets all machines.
*/

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::operation::Operation;
use super::result::DispatchError;

/* ---- Parameter structs ---- */

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpParams {
    pub machine_name: Option<String>,
    pub provider: Option<String>,
    /// Run provisioners (default: true).
    pub provision: Option<bool>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ForceParams {
    pub machine_name: Option<String>,
    /// Default: false.
    pub force: Option<bool>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SshParams {
    pub machine_name: Option<String>,
    pub command: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProvisionParams {
    pub machine_name: Option<String>,
    pub provision_with: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReloadParams {
    pub machine_name: Option<String>,
    /// Re-run provisioners after reload (default: false).
    pub provision: Option<bool>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SnapshotParams {
    pub action: Option<String>,
    pub snapshot_name: Option<String>,
    pub machine_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalStatusParams {
    /// Default: false.
    pub prune: Option<bool>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SnapshotAction {
    Save,
    Restore,
    List,
    Delete,
}

impl SnapshotAction {
    pub const NAMES: [&'static str; 4] = ["save", "restore", "list", "delete"];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "save" => Some(SnapshotAction::Save),
            "restore" => Some(SnapshotAction::Restore),
            "list" => Some(SnapshotAction::List),
            "delete" => Some(SnapshotAction::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotAction::Save => "save",
            SnapshotAction::Restore => "restore",
            SnapshotAction::List => "list",
            SnapshotAction::Delete => "delete",
        }
    }

    pub fn needs_snapshot_name(&self) -> bool {
        !matches!(self, SnapshotAction::List)
    }
}

/* ---- Validated invocation ---- */

/// A fully validated request, ready to become a `vagrant` command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Status,
    Start(UpParams),
    Stop(ForceParams),
    Destroy(ForceParams),
    RemoteExecute {
        machine_name: Option<String>,
        command: String,
    },
    Provision(ProvisionParams),
    Reload(ReloadParams),
    Snapshot {
        action: SnapshotAction,
        snapshot_name: Option<String>,
        machine_name: Option<String>,
    },
    GlobalStatus(GlobalStatusParams),
}

impl Invocation {
    /// Resolve an MCP tool name, then decode and validate its arguments.
    pub fn from_tool(
        tool_name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Self, DispatchError> {
        let op = Operation::from_tool_name(tool_name)
            .ok_or_else(|| DispatchError::caller(format!("Unknown tool: {tool_name}")))?;
        Self::parse(op, arguments)
    }

    /// Decode and validate `arguments` for `op`. Fails only with `DispatchError::Caller`.
    pub fn parse(op: Operation, arguments: &Map<String, Value>) -> Result<Self, DispatchError> {
        let inv = match op {
            Operation::Status => Invocation::Status,
            Operation::Start => {
                let mut p: UpParams = decode(op, arguments)?;
                p.machine_name = non_empty(p.machine_name);
                p.provider = non_empty(p.provider);
                Invocation::Start(p)
            }
            Operation::Stop | Operation::Destroy => {
                let mut p: ForceParams = decode(op, arguments)?;
                p.machine_name = non_empty(p.machine_name);
                if op == Operation::Stop {
                    Invocation::Stop(p)
                } else {
                    Invocation::Destroy(p)
                }
            }
            Operation::RemoteExecute => {
                let p: SshParams = decode(op, arguments)?;
                let command = non_empty(p.command)
                    .ok_or_else(|| DispatchError::caller("command parameter is required"))?;
                Invocation::RemoteExecute {
                    machine_name: non_empty(p.machine_name),
                    command,
                }
            }
            Operation::Provision => {
                let mut p: ProvisionParams = decode(op, arguments)?;
                p.machine_name = non_empty(p.machine_name);
                p.provision_with = non_empty(p.provision_with);
                Invocation::Provision(p)
            }
            Operation::Reload => {
                let mut p: ReloadParams = decode(op, arguments)?;
                p.machine_name = non_empty(p.machine_name);
                Invocation::Reload(p)
            }
            Operation::Snapshot => {
                let p: SnapshotParams = decode(op, arguments)?;
                let raw_action = non_empty(p.action)
                    .ok_or_else(|| DispatchError::caller("action parameter is required"))?;
                let action = SnapshotAction::parse(&raw_action).ok_or_else(|| {
                    DispatchError::caller(format!(
                        "invalid snapshot action '{raw_action}' (expected one of: {})",
                        SnapshotAction::NAMES.join(", ")
                    ))
                })?;
                let snapshot_name = non_empty(p.snapshot_name);
                if action.needs_snapshot_name() && snapshot_name.is_none() {
                    return Err(DispatchError::caller(format!(
                        "snapshot_name is required for {} action",
                        action.as_str()
                    )));
                }
                Invocation::Snapshot {
                    action,
                    snapshot_name,
                    machine_name: non_empty(p.machine_name),
                }
            }
            Operation::GlobalStatus => Invocation::GlobalStatus(decode(op, arguments)?),
        };
        Ok(inv)
    }

    pub fn operation(&self) -> Operation {
        match self {
            Invocation::Status => Operation::Status,
            Invocation::Start(_) => Operation::Start,
            Invocation::Stop(_) => Operation::Stop,
            Invocation::Destroy(_) => Operation::Destroy,
            Invocation::RemoteExecute { .. } => Operation::RemoteExecute,
            Invocation::Provision(_) => Operation::Provision,
            Invocation::Reload(_) => Operation::Reload,
            Invocation::Snapshot { .. } => Operation::Snapshot,
            Invocation::GlobalStatus(_) => Operation::GlobalStatus,
        }
    }

    /// Report title, e.g. `Vagrant Up` or `Vagrant Snapshot Restore`.
    pub fn title(&self) -> String {
        match self {
            Invocation::Snapshot { action, .. } => {
                format!("{} {}", Operation::Snapshot.title(), title_case(action.as_str()))
            }
            other => other.operation().title().to_string(),
        }
    }

    /// Arguments passed to the tool binary (program name not included).
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();
        match self {
            Invocation::Status => args.push("status".into()),
            Invocation::Start(p) => {
                args.push("up".into());
                args.extend(p.machine_name.clone());
                if let Some(provider) = &p.provider {
                    args.push("--provider".into());
                    args.push(provider.clone());
                }
                if p.provision == Some(false) {
                    args.push("--no-provision".into());
                }
            }
            Invocation::Stop(p) | Invocation::Destroy(p) => {
                let verb = if matches!(self, Invocation::Stop(_)) {
                    "halt"
                } else {
                    "destroy"
                };
                args.push(verb.into());
                args.extend(p.machine_name.clone());
                if p.force.unwrap_or(false) {
                    args.push("--force".into());
                }
            }
            Invocation::RemoteExecute {
                machine_name,
                command,
            } => {
                args.push("ssh".into());
                args.extend(machine_name.clone());
                args.push("-c".into());
                args.push(command.clone());
            }
            Invocation::Provision(p) => {
                args.push("provision".into());
                args.extend(p.machine_name.clone());
                if let Some(name) = &p.provision_with {
                    args.push("--provision-with".into());
                    args.push(name.clone());
                }
            }
            Invocation::Reload(p) => {
                args.push("reload".into());
                args.extend(p.machine_name.clone());
                if p.provision.unwrap_or(false) {
                    args.push("--provision".into());
                }
            }
            Invocation::Snapshot {
                action,
                snapshot_name,
                machine_name,
            } => {
                args.push("snapshot".into());
                args.push(action.as_str().into());
                args.extend(snapshot_name.clone());
                args.extend(machine_name.clone());
            }
            Invocation::GlobalStatus(p) => {
                args.push("global-status".into());
                if p.prune.unwrap_or(false) {
                    args.push("--prune".into());
                }
            }
        }
        args
    }

    /// Text piped to the child's stdin. Only `destroy` without `--force` answers
    /// the interactive confirmation prompt.
    pub fn stdin_input(&self) -> Option<&'static str> {
        match self {
            Invocation::Destroy(p) if !p.force.unwrap_or(false) => Some("y\n"),
            _ => None,
        }
    }
}

/* ---- Helpers ---- */

fn decode<T: DeserializeOwned>(
    op: Operation,
    arguments: &Map<String, Value>,
) -> Result<T, DispatchError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| DispatchError::caller(format!("invalid arguments for {op}: {e}")))
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    fn args_for(op: Operation, v: Value) -> Vec<String> {
        Invocation::parse(op, &obj(v)).unwrap().args()
    }

    #[test]
    fn zero_parameter_forms() {
        let empty = json!({});
        assert_eq!(args_for(Operation::Status, empty.clone()), ["status"]);
        assert_eq!(args_for(Operation::Start, empty.clone()), ["up"]);
        assert_eq!(args_for(Operation::Stop, empty.clone()), ["halt"]);
        assert_eq!(args_for(Operation::Destroy, empty.clone()), ["destroy"]);
        assert_eq!(args_for(Operation::Provision, empty.clone()), ["provision"]);
        assert_eq!(args_for(Operation::Reload, empty.clone()), ["reload"]);
        assert_eq!(args_for(Operation::GlobalStatus, empty), ["global-status"]);
    }

    #[test]
    fn start_with_everything() {
        let args = args_for(
            Operation::Start,
            json!({"machine_name":"web","provider":"virtualbox","provision":false}),
        );
        assert_eq!(args, ["up", "web", "--provider", "virtualbox", "--no-provision"]);
    }

    #[test]
    fn start_provision_true_adds_nothing() {
        let args = args_for(Operation::Start, json!({"provision":true}));
        assert_eq!(args, ["up"]);
    }

    #[test]
    fn halt_and_destroy_force() {
        assert_eq!(
            args_for(Operation::Stop, json!({"machine_name":"db","force":true})),
            ["halt", "db", "--force"]
        );
        assert_eq!(
            args_for(Operation::Destroy, json!({"machine_name":"db","force":true})),
            ["destroy", "db", "--force"]
        );
    }

    #[test]
    fn ssh_always_appends_command() {
        assert_eq!(
            args_for(Operation::RemoteExecute, json!({"command":"uname -a"})),
            ["ssh", "-c", "uname -a"]
        );
        assert_eq!(
            args_for(
                Operation::RemoteExecute,
                json!({"command":"uptime","machine_name":"web"})
            ),
            ["ssh", "web", "-c", "uptime"]
        );
    }

    #[test]
    fn provision_with_and_reload_provision() {
        assert_eq!(
            args_for(
                Operation::Provision,
                json!({"machine_name":"web","provision_with":"shell"})
            ),
            ["provision", "web", "--provision-with", "shell"]
        );
        assert_eq!(
            args_for(Operation::Reload, json!({"machine_name":"web","provision":true})),
            ["reload", "web", "--provision"]
        );
    }

    #[test]
    fn snapshot_orders_name_before_machine() {
        assert_eq!(
            args_for(
                Operation::Snapshot,
                json!({"action":"save","snapshot_name":"clean","machine_name":"web"})
            ),
            ["snapshot", "save", "clean", "web"]
        );
        assert_eq!(
            args_for(Operation::Snapshot, json!({"action":"list"})),
            ["snapshot", "list"]
        );
    }

    #[test]
    fn global_status_prune() {
        assert_eq!(
            args_for(Operation::GlobalStatus, json!({"prune":true})),
            ["global-status", "--prune"]
        );
    }

    #[test]
    fn directory_parameter_is_ignored() {
        assert_eq!(
            args_for(Operation::Status, json!({"directory":"/elsewhere"})),
            ["status"]
        );
        assert_eq!(
            args_for(Operation::Start, json!({"directory":"/elsewhere","machine_name":"web"})),
            ["up", "web"]
        );
    }

    #[test]
    fn empty_and_null_strings_are_absent() {
        assert_eq!(
            args_for(Operation::Start, json!({"machine_name":"","provider":null})),
            ["up"]
        );
    }

    #[test]
    fn ssh_without_command_is_caller_error() {
        for v in [json!({}), json!({"command":""}), json!({"command":null})] {
            let err = Invocation::parse(Operation::RemoteExecute, &obj(v)).unwrap_err();
            assert!(matches!(err, DispatchError::Caller(ref m) if m.contains("command")));
        }
    }

    #[test]
    fn snapshot_validation() {
        let err = Invocation::parse(Operation::Snapshot, &obj(json!({}))).unwrap_err();
        assert!(matches!(err, DispatchError::Caller(ref m) if m.contains("action")));

        for action in ["save", "restore", "delete"] {
            let err = Invocation::parse(Operation::Snapshot, &obj(json!({"action":action})))
                .unwrap_err();
            assert!(
                matches!(err, DispatchError::Caller(ref m) if m.contains("snapshot_name")),
                "{action} should require snapshot_name"
            );
        }

        let err = Invocation::parse(Operation::Snapshot, &obj(json!({"action":"push"})))
            .unwrap_err();
        assert!(matches!(err, DispatchError::Caller(ref m) if m.contains("push")));
    }

    #[test]
    fn wrong_types_are_caller_errors() {
        let err = Invocation::parse(Operation::Start, &obj(json!({"provision":"no"}))).unwrap_err();
        assert!(matches!(err, DispatchError::Caller(ref m) if m.contains("vagrant_up")));
    }

    #[test]
    fn only_unforced_destroy_confirms() {
        let unforced = Invocation::parse(Operation::Destroy, &obj(json!({}))).unwrap();
        assert_eq!(unforced.stdin_input(), Some("y\n"));
        let forced = Invocation::parse(Operation::Destroy, &obj(json!({"force":true}))).unwrap();
        assert_eq!(forced.stdin_input(), None);
        let halt = Invocation::parse(Operation::Stop, &obj(json!({}))).unwrap();
        assert_eq!(halt.stdin_input(), None);
    }

    #[test]
    fn titles() {
        let up = Invocation::parse(Operation::Start, &obj(json!({}))).unwrap();
        assert_eq!(up.title(), "Vagrant Up");
        let snap = Invocation::parse(
            Operation::Snapshot,
            &obj(json!({"action":"restore","snapshot_name":"s1"})),
        )
        .unwrap();
        assert_eq!(snap.title(), "Vagrant Snapshot Restore");
    }
}
