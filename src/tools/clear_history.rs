//! clear_thought_history handler for manual memory cleanup

use crate::error::Result;
use crate::server::SequentialToolsServer;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::json;

impl SequentialToolsServer {
    pub async fn handle_clear_thought_history(
        &self,
        _request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        Ok(self.clear_thought_history().await)
    }

    pub async fn clear_thought_history(&self) -> CallToolResult {
        let mut engine = self.engine.lock().await;
        let cleared = engine.clear();
        CallToolResult::structured(json!({
            "cleared": true,
            "thoughts_removed": cleared.thoughts,
            "branches_removed": cleared.branches,
            "thought_history_length": engine.ledger().size()
        }))
    }
}
