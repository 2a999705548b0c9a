//! list_available_tools handler: read-only view of the tool catalog

use crate::error::Result;
use crate::server::SequentialToolsServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::json;

impl SequentialToolsServer {
    pub async fn handle_list_available_tools(
        &self,
        _request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        self.list_available_tools()
    }

    pub fn list_available_tools(&self) -> Result<CallToolResult> {
        let tools = serde_json::to_value(self.catalog.list())?;
        tracing::debug!("list_available_tools returning {} tool(s)", self.catalog.len());
        Ok(CallToolResult::structured(json!({
            "tools": tools,
            "count": self.catalog.len()
        })))
    }
}
