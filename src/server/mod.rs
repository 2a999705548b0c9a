//! Server module containing the SequentialToolsServer implementation

use crate::catalog::ToolCatalog;
use crate::config::Config;
use crate::thinking::{EvictionPolicy, ThinkingEngine};
use std::sync::Arc;
use tokio::sync::Mutex;

// Submodules
pub mod router;

/// Main sequential-tools server implementation
#[derive(Clone)]
pub struct SequentialToolsServer {
    /// Single critical section for validate/append/evict/index and clear
    pub engine: Arc<Mutex<ThinkingEngine>>,
    pub catalog: Arc<ToolCatalog>,
}

impl SequentialToolsServer {
    pub fn new(config: &Config) -> Self {
        let policy = EvictionPolicy::new(config.system.max_history_size);
        let engine =
            ThinkingEngine::new(policy).with_thought_rendering(config.runtime.thought_logging);
        let catalog = ToolCatalog::new(config.tools.iter().cloned());

        tracing::info!(
            "sequential-tools ready (max_history_size={}, catalog={} tool(s))",
            policy.max_history_size(),
            catalog.len()
        );

        Self {
            engine: Arc::new(Mutex::new(engine)),
            catalog: Arc::new(catalog),
        }
    }

    /// Current retained history length.
    pub async fn history_len(&self) -> usize {
        self.engine.lock().await.ledger().size()
    }
}
