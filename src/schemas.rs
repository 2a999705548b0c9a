use serde_json::{Map, Value, json};
use std::sync::Arc;

pub const SEQUENTIAL_THINKING_DESCRIPTION: &str = "A detailed tool for dynamic and reflective problem-solving through thoughts, \
with recommendations for which tools to use at each step. Thoughts can build on, question, or revise \
earlier ones, branch into alternatives, and extend past the initial estimate. Each call records one \
thought and returns the running state: thought and total counts, known branch ids, history length, \
and the current, previous, and remaining steps. Set next_thought_needed to false only when a \
satisfactory answer has been reached.";

fn into_map(schema: Value) -> Arc<Map<String, Value>> {
    Arc::new(schema.as_object().cloned().unwrap_or_else(Map::new))
}

fn tool_recommendation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "tool_name": {"type": "string", "description": "Name of the tool being recommended"},
            "confidence": {"type": "number", "minimum": 0, "maximum": 1, "description": "0-1 indicating confidence in recommendation"},
            "rationale": {"type": "string", "description": "Why this tool is recommended"},
            "priority": {"type": "number", "description": "Order in the recommendation sequence"},
            "suggested_inputs": {"type": "object", "description": "Optional suggested parameters"},
            "alternatives": {"type": "array", "items": {"type": "string"}, "description": "Alternative tools that could be used"}
        },
        "required": ["tool_name", "confidence", "rationale", "priority"]
    })
}

fn step_recommendation_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "step_description": {"type": "string", "description": "What needs to be done"},
            "recommended_tools": {"type": "array", "items": tool_recommendation_schema(), "description": "Tools recommended for this step"},
            "expected_outcome": {"type": "string", "description": "What to expect from this step"},
            "next_step_conditions": {"type": "array", "items": {"type": "string"}, "description": "Conditions to consider for the next step"}
        },
        "required": ["step_description", "recommended_tools", "expected_outcome"]
    })
}

pub fn sequential_thinking_schema() -> Arc<Map<String, Value>> {
    let schema = json!({
        "type": "object",
        "properties": {
            "thought": {"type": "string", "description": "Your current thinking step"},
            "next_thought_needed": {"type": "boolean", "description": "Whether another thought step is needed"},
            "thought_number": {"type": "integer", "minimum": 1, "description": "Current thought number"},
            "total_thoughts": {"type": "integer", "minimum": 1, "description": "Estimated total thoughts needed"},
            "is_revision": {"type": "boolean", "description": "Whether this revises previous thinking"},
            "revises_thought": {"type": "integer", "minimum": 1, "description": "Which thought is being reconsidered"},
            "branch_from_thought": {"type": "integer", "minimum": 1, "description": "Branching point thought number"},
            "branch_id": {"type": "string", "description": "Branch identifier"},
            "needs_more_thoughts": {"type": "boolean", "description": "If more thoughts are needed"},
            "current_step": step_recommendation_schema(),
            "previous_steps": {"type": "array", "items": step_recommendation_schema(), "description": "Steps already recommended"},
            "remaining_steps": {"type": "array", "items": {"type": "string"}, "description": "High-level descriptions of upcoming steps"}
        },
        "required": ["thought", "next_thought_needed", "thought_number", "total_thoughts"]
    });
    into_map(schema)
}

pub fn clear_thought_history_schema() -> Arc<Map<String, Value>> {
    into_map(json!({
        "type": "object",
        "properties": {}
    }))
}

pub fn list_available_tools_schema() -> Arc<Map<String, Value>> {
    into_map(json!({
        "type": "object",
        "properties": {}
    }))
}

pub fn clear_thought_history_output_schema() -> Arc<Map<String, Value>> {
    into_map(json!({
        "type": "object",
        "properties": {
            "cleared": {"type": "boolean"},
            "thoughts_removed": {"type": "integer"},
            "branches_removed": {"type": "integer"},
            "thought_history_length": {"type": "integer"}
        },
        "required": ["cleared", "thoughts_removed", "branches_removed", "thought_history_length"]
    }))
}

pub fn list_available_tools_output_schema() -> Arc<Map<String, Value>> {
    into_map(json!({
        "type": "object",
        "properties": {
            "tools": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "description": {"type": "string"},
                        "input_schema": {"type": "object"}
                    },
                    "required": ["name", "description", "input_schema"]
                }
            },
            "count": {"type": "integer"}
        },
        "required": ["tools", "count"]
    }))
}
