//! thinking module: the thought-state model behind `sequentialthinking_tools`
//!
//! Submodules:
//! - `types`: Thought records, step and tool recommendations, response payloads
//! - `validation`: Untrusted arguments to a typed record
//! - `ledger`: Retained history and the branch index
//! - `eviction`: Bounded retention policy
//! - `recommendation`: Step aggregation and plain-text rendering

pub mod eviction;
pub mod ledger;
pub mod recommendation;
pub mod types;
pub mod validation;

pub use eviction::{DEFAULT_MAX_HISTORY_SIZE, EvictionPolicy};
pub use ledger::{ClearedCounts, ThoughtLedger, normalize_total_thoughts};
pub use recommendation::{aggregate_step, format_recommendation, format_thought};
pub use types::{
    FAILED_STATUS, StepRecommendation, ThoughtFailure, ThoughtOutcome, ThoughtRecord,
    ThoughtSummary, ToolRecommendation,
};
pub use validation::{ValidationError, validate_thought_data};

use serde_json::{Map, Value};

/// Runs one thought through validate → normalize → aggregate → append → respond.
#[derive(Debug, Clone, Default)]
pub struct ThinkingEngine {
    ledger: ThoughtLedger,
    render_thoughts: bool,
}

impl ThinkingEngine {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            ledger: ThoughtLedger::new(policy),
            render_thoughts: false,
        }
    }

    /// Emit each accepted thought, rendered, at debug level.
    pub fn with_thought_rendering(mut self, enabled: bool) -> Self {
        self.render_thoughts = enabled;
        self
    }

    /// Process one candidate thought. A rejected thought leaves the ledger untouched.
    pub fn process_thought(
        &mut self,
        input: &Map<String, Value>,
        available_tools: &[String],
    ) -> ThoughtOutcome {
        let mut record = match validate_thought_data(input) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("rejected thought ({}): {}", e.field(), e);
                return ThoughtOutcome::Rejected(ThoughtFailure::new(e.to_string()));
            }
        };

        normalize_total_thoughts(&mut record);
        aggregate_step(&mut record);

        if self.render_thoughts {
            tracing::debug!("\n{}", format_thought(&record));
        }

        let mut summary = ThoughtSummary {
            thought_number: record.thought_number,
            total_thoughts: record.total_thoughts,
            next_thought_needed: record.next_thought_needed,
            branches: Vec::new(),
            thought_history_length: 0,
            available_mcp_tools: available_tools.to_vec(),
            current_step: record.current_step.clone(),
            previous_steps: record.previous_steps.clone(),
            remaining_steps: record.remaining_steps.clone(),
        };

        self.ledger.append(record);

        summary.branches = self.ledger.branch_ids();
        summary.thought_history_length = self.ledger.size();
        ThoughtOutcome::Recorded(summary)
    }

    pub fn clear(&mut self) -> ClearedCounts {
        let cleared = self.ledger.clear();
        tracing::info!(
            "cleared thought history ({} thoughts, {} branches)",
            cleared.thoughts,
            cleared.branches
        );
        cleared
    }

    pub fn ledger(&self) -> &ThoughtLedger {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn rejected_thought_leaves_ledger_unchanged() {
        let mut engine = ThinkingEngine::default();
        let ok = engine.process_thought(
            &args(json!({"thought": "a", "thought_number": 1, "total_thoughts": 2, "next_thought_needed": true})),
            &[],
        );
        assert!(!ok.is_rejected());
        let bad = engine.process_thought(&args(json!({"thought": "b"})), &[]);
        assert!(bad.is_rejected());
        assert_eq!(engine.ledger().size(), 1);
    }

    #[test]
    fn summary_reports_normalized_total() {
        let mut engine = ThinkingEngine::default();
        let outcome = engine.process_thought(
            &args(json!({"thought": "a", "thought_number": 5, "total_thoughts": 2, "next_thought_needed": false})),
            &[],
        );
        match outcome {
            ThoughtOutcome::Recorded(summary) => assert_eq!(summary.total_thoughts, 5),
            ThoughtOutcome::Rejected(f) => panic!("unexpected failure: {}", f.error),
        }
        assert_eq!(engine.ledger().last().unwrap().total_thoughts, 5);
    }
}
