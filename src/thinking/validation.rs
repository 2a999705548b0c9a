//! Validation of untrusted `sequentialthinking_tools` arguments.
//!
//! Required fields are checked in a fixed order (thought, thought_number,
//! total_thoughts, next_thought_needed) so the first missing one is always the
//! one reported. Optional fields are decoded structurally and never
//! cross-checked against the ledger.

use super::types::{StepRecommendation, ThoughtRecord};
use crate::deserializers::de_option_u32_forgiving;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons an incoming thought is rejected. Every message names its field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid thought: must be a non-empty string")]
    Thought,

    #[error("Invalid thought_number: must be a number greater than or equal to 1")]
    ThoughtNumber,

    #[error("Invalid total_thoughts: must be a number greater than or equal to 1")]
    TotalThoughts,

    #[error("Invalid next_thought_needed: must be a boolean")]
    NextThoughtNeeded,

    #[error("Invalid {field}: must be at most {}", u32::MAX)]
    OutOfRange { field: &'static str },

    #[error("Invalid {field}: must be an array")]
    NotAnArray { field: &'static str },

    #[error("Invalid {field}: {reason}")]
    Malformed { field: &'static str, reason: String },
}

impl ValidationError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Thought => "thought",
            ValidationError::ThoughtNumber => "thought_number",
            ValidationError::TotalThoughts => "total_thoughts",
            ValidationError::NextThoughtNeeded => "next_thought_needed",
            ValidationError::OutOfRange { field }
            | ValidationError::NotAnArray { field }
            | ValidationError::Malformed { field, .. } => field,
        }
    }
}

/// Convert untrusted arguments into a well-formed thought record.
pub fn validate_thought_data(input: &Map<String, Value>) -> Result<ThoughtRecord, ValidationError> {
    let thought = match input.get("thought") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(ValidationError::Thought),
    };
    let thought_number = positive_count(input, "thought_number", ValidationError::ThoughtNumber)?;
    let total_thoughts = positive_count(input, "total_thoughts", ValidationError::TotalThoughts)?;
    let next_thought_needed = match input.get("next_thought_needed") {
        Some(Value::Bool(b)) => *b,
        _ => return Err(ValidationError::NextThoughtNeeded),
    };

    for field in ["previous_steps", "remaining_steps"] {
        if let Some(v) = present(input, field)
            && !v.is_array()
        {
            return Err(ValidationError::NotAnArray { field });
        }
    }

    Ok(ThoughtRecord {
        thought,
        thought_number,
        total_thoughts,
        next_thought_needed,
        is_revision: optional(input, "is_revision")?,
        revises_thought: thought_reference(input, "revises_thought")?,
        branch_from_thought: thought_reference(input, "branch_from_thought")?,
        branch_id: optional(input, "branch_id")?,
        needs_more_thoughts: optional(input, "needs_more_thoughts")?,
        current_step: optional::<StepRecommendation>(input, "current_step")?,
        previous_steps: optional(input, "previous_steps")?,
        remaining_steps: optional(input, "remaining_steps")?,
    })
}

/// A field counts as present unless missing or explicitly null.
fn present<'a>(input: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    input.get(field).filter(|v| !v.is_null())
}

fn optional<T: DeserializeOwned>(
    input: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, ValidationError> {
    let Some(v) = present(input, field) else {
        return Ok(None);
    };
    serde_json::from_value(v.clone())
        .map(Some)
        .map_err(|e| ValidationError::Malformed {
            field,
            reason: e.to_string(),
        })
}

/// Optional thought number, decoded as forgivingly as nested priorities.
fn thought_reference(
    input: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<u32>, ValidationError> {
    let Some(v) = present(input, field) else {
        return Ok(None);
    };
    de_option_u32_forgiving(v.clone()).map_err(|e| ValidationError::Malformed {
        field,
        reason: e.to_string(),
    })
}

/// Whole JSON number >= 1. Values past u32::MAX get their own error.
fn positive_count(
    input: &Map<String, Value>,
    field: &'static str,
    invalid: ValidationError,
) -> Result<u32, ValidationError> {
    let Some(Value::Number(n)) = input.get(field) else {
        return Err(invalid);
    };
    let whole = match (n.as_u64(), n.as_f64()) {
        (Some(u), _) => u,
        (None, Some(f)) if f.fract() == 0.0 && f >= 1.0 => f as u64,
        _ => return Err(invalid),
    };
    if whole == 0 {
        return Err(invalid);
    }
    u32::try_from(whole).map_err(|_| ValidationError::OutOfRange { field })
}
