use crate::catalog::SEQUENTIAL_THINKING_TOOL;
use crate::server::SequentialToolsServer;
use crate::thinking::{ThoughtFailure, ThoughtOutcome};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo, Tool, ToolsCapability,
    },
    service::{RequestContext, RoleServer},
};
use tracing::{info, warn};

pub const CLEAR_THOUGHT_HISTORY_TOOL: &str = "clear_thought_history";
pub const LIST_AVAILABLE_TOOLS_TOOL: &str = "list_available_tools";

impl SequentialToolsServer {
    /// Tools this server answers `tools/call` for.
    pub fn own_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: SEQUENTIAL_THINKING_TOOL.into(),
                title: Some("Sequential Thinking with Tools".into()),
                description: Some(crate::schemas::SEQUENTIAL_THINKING_DESCRIPTION.into()),
                input_schema: crate::schemas::sequential_thinking_schema(),
                icons: None,
                annotations: None,
                output_schema: None, // success and failure payloads differ in shape
                meta: None,
            },
            Tool {
                name: CLEAR_THOUGHT_HISTORY_TOOL.into(),
                title: Some("Clear Thought History".into()),
                description: Some(
                    "Discard all retained thoughts and branches to free memory".into(),
                ),
                input_schema: crate::schemas::clear_thought_history_schema(),
                icons: None,
                annotations: None,
                output_schema: Some(crate::schemas::clear_thought_history_output_schema()),
                meta: None,
            },
            Tool {
                name: LIST_AVAILABLE_TOOLS_TOOL.into(),
                title: Some("List Available Tools".into()),
                description: Some(
                    "List the tool descriptors known to this server for use in step recommendations"
                        .into(),
                ),
                input_schema: crate::schemas::list_available_tools_schema(),
                icons: None,
                annotations: None,
                output_schema: Some(crate::schemas::list_available_tools_output_schema()),
                meta: None,
            },
        ]
    }

    /// Route a tool call by name. Unknown names get a failure payload, not a protocol error.
    pub async fn dispatch(
        &self,
        request: CallToolRequestParam,
    ) -> std::result::Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            SEQUENTIAL_THINKING_TOOL => self
                .handle_sequential_thinking(request)
                .await
                .map_err(|e| e.into()),
            CLEAR_THOUGHT_HISTORY_TOOL => self
                .handle_clear_thought_history(request)
                .await
                .map_err(|e| e.into()),
            LIST_AVAILABLE_TOOLS_TOOL => self
                .handle_list_available_tools(request)
                .await
                .map_err(|e| e.into()),
            other => {
                warn!("call for unknown tool '{}'", other);
                Ok(unknown_tool_result(other))
            }
        }
    }
}

/// Failure payload for a tool name this server does not serve.
pub fn unknown_tool_result(name: &str) -> CallToolResult {
    let failure = ThoughtFailure::new(format!("Unknown tool: {}", name));
    CallToolResult::structured_error(ThoughtOutcome::Rejected(failure).to_value())
}

impl ServerHandler for SequentialToolsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "sequential-tools".to_string(),
                title: Some("Sequential Thinking Tools".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("tools/list requested");
        Ok(ListToolsResult {
            tools: self.own_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatch(request).await
    }
}
