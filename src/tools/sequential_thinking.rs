//! sequentialthinking_tools handler: one thought per call

use crate::error::Result;
use crate::server::SequentialToolsServer;
use crate::thinking::ThoughtOutcome;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use serde_json::{Map, Value};

impl SequentialToolsServer {
    /// Handle the sequentialthinking_tools tool call
    pub async fn handle_sequential_thinking(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult> {
        Ok(self.sequential_thinking(request.arguments).await)
    }

    /// Run one thought through the pipeline. Missing arguments are treated as an
    /// empty object so the caller gets a field-specific failure.
    pub async fn sequential_thinking(
        &self,
        arguments: Option<Map<String, Value>>,
    ) -> CallToolResult {
        let args = arguments.unwrap_or_default();
        let available_tools = self.catalog.names();

        let outcome = {
            let mut engine = self.engine.lock().await;
            engine.process_thought(&args, &available_tools)
        };

        match &outcome {
            ThoughtOutcome::Recorded(summary) => {
                tracing::info!(
                    "sequentialthinking_tools recorded thought {}/{} (history={}, branches={})",
                    summary.thought_number,
                    summary.total_thoughts,
                    summary.thought_history_length,
                    summary.branches.len()
                );
                CallToolResult::structured(outcome.to_value())
            }
            ThoughtOutcome::Rejected(failure) => {
                tracing::info!("sequentialthinking_tools rejected: {}", failure.error);
                CallToolResult::structured_error(outcome.to_value())
            }
        }
    }
}
