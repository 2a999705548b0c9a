//! Tool catalog: descriptors the calling agent can pick from when it builds
//! step recommendations.
//!
//! The catalog always contains the sequential-thinking tool itself, plus any
//! descriptors supplied through configuration at startup. It is read-only once
//! built.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Name of the sequential-thinking tool exposed by this server.
pub const SEQUENTIAL_THINKING_TOOL: &str = "sequentialthinking_tools";

/// Name, description and input-shape declaration of one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_input_schema")]
    pub input_schema: Map<String, Value>,
}

fn default_input_schema() -> Map<String, Value> {
    json!({"type": "object", "properties": {}})
        .as_object()
        .cloned()
        .unwrap_or_default()
}

impl ToolDescriptor {
    /// Self-descriptor of the sequential-thinking tool.
    pub fn sequential_thinking() -> Self {
        Self {
            name: SEQUENTIAL_THINKING_TOOL.to_string(),
            description: crate::schemas::SEQUENTIAL_THINKING_DESCRIPTION.to_string(),
            input_schema: crate::schemas::sequential_thinking_schema().as_ref().clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolDescriptor>,
}

impl ToolCatalog {
    /// Build the catalog. Later duplicates replace earlier ones; nothing may
    /// replace the sequential-thinking self-descriptor.
    pub fn new(external: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        let mut tools = BTreeMap::new();
        let own = ToolDescriptor::sequential_thinking();
        tools.insert(own.name.clone(), own);

        for descriptor in external {
            if descriptor.name == SEQUENTIAL_THINKING_TOOL {
                tracing::warn!(
                    "ignoring configured tool '{}': name is reserved",
                    descriptor.name
                );
                continue;
            }
            if let Some(previous) = tools.insert(descriptor.name.clone(), descriptor) {
                tracing::warn!(
                    "duplicate tool descriptor '{}' in config, keeping the last one",
                    previous.name
                );
            }
        }

        tracing::debug!("tool catalog built with {} descriptor(s)", tools.len());
        Self { tools }
    }

    /// All descriptors, sorted by name.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.values().cloned().collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, description: &str) -> ToolDescriptor {
        ToolDescriptor {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: default_input_schema(),
        }
    }

    #[test]
    fn always_contains_self_descriptor() {
        let catalog = ToolCatalog::default();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.names(), vec![SEQUENTIAL_THINKING_TOOL.to_string()]);
        let own = catalog.get(SEQUENTIAL_THINKING_TOOL).unwrap();
        assert_eq!(own.input_schema["type"], "object");
    }

    #[test]
    fn external_descriptors_sorted_and_deduplicated() {
        let catalog = ToolCatalog::new(vec![
            descriptor("web_search", "first"),
            descriptor("read_file", "read"),
            descriptor("web_search", "second"),
        ]);
        assert_eq!(
            catalog.names(),
            vec!["read_file", "sequentialthinking_tools", "web_search"]
        );
        assert_eq!(catalog.get("web_search").unwrap().description, "second");
    }

    #[test]
    fn self_descriptor_cannot_be_shadowed() {
        let catalog = ToolCatalog::new(vec![descriptor(SEQUENTIAL_THINKING_TOOL, "fake")]);
        assert_eq!(catalog.len(), 1);
        assert_ne!(
            catalog.get(SEQUENTIAL_THINKING_TOOL).unwrap().description,
            "fake"
        );
    }

    #[test]
    fn listing_is_idempotent() {
        let catalog = ToolCatalog::new(vec![descriptor("read_file", "read")]);
        assert_eq!(catalog.list(), catalog.list());
    }
}
