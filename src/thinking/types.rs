//! Shared types for the thinking module
//!
//! Thought records and the step/tool recommendations attached to them. All text
//! fields are opaque to the server; only their shape is checked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single suggested external capability for a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecommendation {
    pub tool_name: String,
    #[serde(deserialize_with = "crate::deserializers::de_confidence")]
    pub confidence: f64,
    pub rationale: String,
    #[serde(deserialize_with = "crate::deserializers::de_priority_forgiving")]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_inputs: Option<Map<String, Value>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::deserializers::de_option_string_list"
    )]
    pub alternatives: Option<Vec<String>>,
}

/// Guidance for what to do next, attached to a thought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecommendation {
    pub step_description: String,
    pub recommended_tools: Vec<ToolRecommendation>,
    pub expected_outcome: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::deserializers::de_option_string_list"
    )]
    pub next_step_conditions: Option<Vec<String>>,
}

/// One validated reasoning step as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtRecord {
    pub thought: String,
    pub thought_number: u32,
    pub total_thoughts: u32,
    pub next_thought_needed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_revision: Option<bool>,
    #[serde(
        default,
        deserialize_with = "crate::deserializers::de_option_u32_forgiving",
        skip_serializing_if = "Option::is_none"
    )]
    pub revises_thought: Option<u32>,
    #[serde(
        default,
        deserialize_with = "crate::deserializers::de_option_u32_forgiving",
        skip_serializing_if = "Option::is_none"
    )]
    pub branch_from_thought: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<StepRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_steps: Option<Vec<StepRecommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_steps: Option<Vec<String>>,
}

impl ThoughtRecord {
    /// Minimal record with only the required fields set.
    pub fn new(
        thought: impl Into<String>,
        thought_number: u32,
        total_thoughts: u32,
        next_thought_needed: bool,
    ) -> Self {
        Self {
            thought: thought.into(),
            thought_number,
            total_thoughts,
            next_thought_needed,
            is_revision: None,
            revises_thought: None,
            branch_from_thought: None,
            branch_id: None,
            needs_more_thoughts: None,
            current_step: None,
            previous_steps: None,
            remaining_steps: None,
        }
    }

    /// Branch id when both halves of the branch pair are present.
    pub fn branch_key(&self) -> Option<&str> {
        match (self.branch_from_thought, self.branch_id.as_deref()) {
            (Some(_), Some(id)) => Some(id),
            _ => None,
        }
    }

    pub fn is_revision(&self) -> bool {
        self.is_revision.unwrap_or(false)
    }
}

/// Success payload of `process_thought`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThoughtSummary {
    pub thought_number: u32,
    pub total_thoughts: u32,
    pub next_thought_needed: bool,
    pub branches: Vec<String>,
    pub thought_history_length: usize,
    pub available_mcp_tools: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_step: Option<StepRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_steps: Option<Vec<StepRecommendation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_steps: Option<Vec<String>>,
}

/// Marker carried by every failure payload.
pub const FAILED_STATUS: &str = "failed";

/// Failure payload of `process_thought` and of unknown tool calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThoughtFailure {
    pub error: String,
    pub status: &'static str,
}

impl ThoughtFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: FAILED_STATUS,
        }
    }
}

/// Outcome of one request through the thinking pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ThoughtOutcome {
    Recorded(ThoughtSummary),
    Rejected(ThoughtFailure),
}

impl ThoughtOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ThoughtOutcome::Rejected(_))
    }

    /// Structured JSON for the tool result.
    pub fn to_value(&self) -> Value {
        let serialized = match self {
            ThoughtOutcome::Recorded(summary) => serde_json::to_value(summary),
            ThoughtOutcome::Rejected(failure) => serde_json::to_value(failure),
        };
        serialized.unwrap_or_else(|e| {
            serde_json::json!({ "error": e.to_string(), "status": FAILED_STATUS })
        })
    }
}
