/*!
Operation enum: the fixed set of Vagrant actions exposed as MCP tools.

Each variant knows:
  - its MCP tool name (`vagrant_up`, ...)
  - the report title used in the text response
  - whether it needs a `Vagrantfile` in the project directory
*/

use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Status,
    Start,
    Stop,
    Destroy,
    RemoteExecute,
    Provision,
    Reload,
    Snapshot,
    GlobalStatus,
}

impl Operation {
    /// All operations, in catalogue order.
    pub const fn variants() -> &'static [Operation] {
        &[
            Operation::Status,
            Operation::Start,
            Operation::Stop,
            Operation::Destroy,
            Operation::RemoteExecute,
            Operation::Provision,
            Operation::Reload,
            Operation::Snapshot,
            Operation::GlobalStatus,
        ]
    }

    pub fn tool_name(&self) -> &'static str {
        match self {
            Operation::Status => "vagrant_status",
            Operation::Start => "vagrant_up",
            Operation::Stop => "vagrant_halt",
            Operation::Destroy => "vagrant_destroy",
            Operation::RemoteExecute => "vagrant_ssh",
            Operation::Provision => "vagrant_provision",
            Operation::Reload => "vagrant_reload",
            Operation::Snapshot => "vagrant_snapshot",
            Operation::GlobalStatus => "vagrant_global_status",
        }
    }

    /// Exact tool-name lookup (MCP names are case sensitive).
    pub fn from_tool_name(name: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|op| op.tool_name() == name)
    }

    /// Title line for the text report. Snapshot titles also carry the action,
    /// see [`crate::vagrant::Invocation::title`].
    pub fn title(&self) -> &'static str {
        match self {
            Operation::Status => "Vagrant Status",
            Operation::Start => "Vagrant Up",
            Operation::Stop => "Vagrant Halt",
            Operation::Destroy => "Vagrant Destroy",
            Operation::RemoteExecute => "Vagrant SSH Command",
            Operation::Provision => "Vagrant Provision",
            Operation::Reload => "Vagrant Reload",
            Operation::Snapshot => "Vagrant Snapshot",
            Operation::GlobalStatus => "Vagrant Global Status",
        }
    }

    /// `global-status` works from anywhere; everything else needs a project.
    pub fn requires_vagrantfile(&self) -> bool {
        !matches!(self, Operation::GlobalStatus)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

#[cfg(test)]
mod tests {
    use super::Operation;

    #[test]
    fn tool_names_resolve_back() {
        for op in Operation::variants() {
            assert_eq!(Operation::from_tool_name(op.tool_name()), Some(*op));
        }
    }

    #[test]
    fn unknown_and_case_mismatch_rejected() {
        assert_eq!(Operation::from_tool_name("vagrant_push"), None);
        assert_eq!(Operation::from_tool_name("VAGRANT_UP"), None);
    }

    #[test]
    fn only_global_status_skips_vagrantfile() {
        let skipping: Vec<_> = Operation::variants()
            .iter()
            .filter(|op| !op.requires_vagrantfile())
            .collect();
        assert_eq!(skipping, vec![&Operation::GlobalStatus]);
    }
}
