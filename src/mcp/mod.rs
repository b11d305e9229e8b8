//! MCP server surface (stdio).
//!
//! VagrantServer implements `rmcp::ServerHandler`:
//!   initialize -> server info + tools capability
//!   tools/list -> static catalogue (see `catalog`)
//!   tools/call -> `Dispatcher::respond`, always answered with text content
//!
//! Transport framing and capability negotiation belong to rmcp.

pub mod catalog;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
};

use crate::vagrant::{Dispatcher, Report};

pub const SERVER_NAME: &str = "vagrant-mcp-server";

#[derive(Debug, Clone)]
pub struct VagrantServer {
    dispatcher: Dispatcher,
}

impl VagrantServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Handle one `tools/call`. Caller, pre-flight, spawn and tool failures all
    /// come back as text with `is_error` set; nothing becomes a protocol error.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let arguments = arguments.unwrap_or_default();
        let report = self.dispatcher.respond(name, &arguments).await;
        if report.is_error {
            tracing::error!("Error executing tool {name}: {}", first_line(&report));
        }
        into_tool_result(report)
    }
}

impl ServerHandler for VagrantServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();
        ServerInfo {
            server_info,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(format!(
                "Runs Vagrant commands in the project at {} and returns their output. \
                 Use vagrant_status to inspect machines, vagrant_up / vagrant_halt / \
                 vagrant_reload to control them, vagrant_ssh to run a command inside one, \
                 and vagrant_global_status to see every known environment.",
                self.dispatcher.config().projects_dir().display()
            )),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(catalog::catalog())) }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { Ok(self.call(&request.name, request.arguments).await) }
    }
}

fn into_tool_result(report: Report) -> CallToolResult {
    let content = vec![Content::text(report.text)];
    if report.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

fn first_line(report: &Report) -> &str {
    report.text.lines().next().unwrap_or_default()
}
