//! Step recommendation aggregation and plain-text rendering.
//!
//! Rendering is presentation only. It feeds the log stream and never touches
//! stored state.

use super::types::{StepRecommendation, ThoughtRecord};

/// Append the record's `current_step` to its own `previous_steps`.
pub fn aggregate_step(record: &mut ThoughtRecord) {
    if let Some(step) = record.current_step.clone() {
        record.previous_steps.get_or_insert_with(Vec::new).push(step);
    }
}

/// Human-readable rendering of a step recommendation.
pub fn format_recommendation(step: &StepRecommendation) -> String {
    let mut out = format!("Step: {}\n", step.step_description);
    out.push_str("Recommended Tools:\n");
    for tool in &step.recommended_tools {
        out.push_str(&format!(
            "  - {} (priority: {}, confidence: {:.2})\n",
            tool.tool_name, tool.priority, tool.confidence
        ));
        out.push_str(&format!("    Rationale: {}\n", tool.rationale));
        if let Some(alternatives) = tool.alternatives.as_ref().filter(|a| !a.is_empty()) {
            out.push_str(&format!("    Alternatives: {}\n", alternatives.join(", ")));
        }
        if let Some(inputs) = tool.suggested_inputs.as_ref().filter(|m| !m.is_empty()) {
            let dump = serde_json::to_string_pretty(inputs).unwrap_or_default();
            out.push_str("    Suggested inputs:\n");
            for line in dump.lines() {
                out.push_str("      ");
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out.push_str(&format!("Expected Outcome: {}\n", step.expected_outcome));
    if let Some(conditions) = step.next_step_conditions.as_ref().filter(|c| !c.is_empty()) {
        out.push_str("Conditions for next step:\n");
        for condition in conditions {
            out.push_str(&format!("  - {}\n", condition));
        }
    }
    out
}

/// Header line for a thought: plain, revision, or branch.
pub fn thought_header(record: &ThoughtRecord) -> String {
    let position = format!("{}/{}", record.thought_number, record.total_thoughts);
    if record.is_revision() {
        match record.revises_thought {
            Some(target) => format!("Revision {position} (revising thought {target})"),
            None => format!("Revision {position}"),
        }
    } else if let (Some(from), Some(id)) = (record.branch_from_thought, &record.branch_id) {
        format!("Branch {position} (from thought {from}, ID: {id})")
    } else {
        format!("Thought {position}")
    }
}

/// Full rendering of a thought for the log stream.
pub fn format_thought(record: &ThoughtRecord) -> String {
    let mut out = format!("{}\n{}\n", thought_header(record), record.thought);
    if let Some(step) = &record.current_step {
        out.push_str(&format_recommendation(step));
    }
    if let Some(remaining) = record.remaining_steps.as_ref().filter(|r| !r.is_empty()) {
        out.push_str("Remaining steps:\n");
        for step in remaining {
            out.push_str(&format!("  - {}\n", step));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thinking::ToolRecommendation;
    use serde_json::json;

    fn step(description: &str) -> StepRecommendation {
        StepRecommendation {
            step_description: description.to_string(),
            recommended_tools: vec![ToolRecommendation {
                tool_name: "search_docs".into(),
                confidence: 0.9,
                rationale: "docs first".into(),
                priority: 1,
                suggested_inputs: json!({"query": "tokio mutex"}).as_object().cloned(),
                alternatives: Some(vec!["web_search".into()]),
            }],
            expected_outcome: "API usage found".into(),
            next_step_conditions: Some(vec!["docs are current".into()]),
        }
    }

    #[test]
    fn aggregate_appends_after_existing_steps() {
        let mut record = ThoughtRecord::new("t", 2, 3, true);
        record.previous_steps = Some(vec![step("s0")]);
        record.current_step = Some(step("s1"));
        aggregate_step(&mut record);
        let descriptions: Vec<&str> = record
            .previous_steps
            .as_ref()
            .unwrap()
            .iter()
            .map(|s| s.step_description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["s0", "s1"]);
    }

    #[test]
    fn aggregate_initializes_previous_steps() {
        let mut record = ThoughtRecord::new("t", 1, 3, true);
        record.current_step = Some(step("first"));
        aggregate_step(&mut record);
        assert_eq!(record.previous_steps.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn aggregate_without_current_step_is_noop() {
        let mut record = ThoughtRecord::new("t", 1, 3, true);
        aggregate_step(&mut record);
        assert_eq!(record.previous_steps, None);
    }

    #[test]
    fn recommendation_rendering_includes_every_part() {
        let text = format_recommendation(&step("Look up the API"));
        assert!(text.starts_with("Step: Look up the API\n"));
        assert!(text.contains("search_docs (priority: 1, confidence: 0.90)"));
        assert!(text.contains("Rationale: docs first"));
        assert!(text.contains("Alternatives: web_search"));
        assert!(text.contains("\"query\": \"tokio mutex\""));
        assert!(text.contains("Expected Outcome: API usage found"));
        assert!(text.contains("Conditions for next step:\n  - docs are current"));
    }

    #[test]
    fn headers_reflect_revision_and_branch() {
        let mut revision = ThoughtRecord::new("t", 3, 4, true);
        revision.is_revision = Some(true);
        revision.revises_thought = Some(1);
        assert_eq!(
            thought_header(&revision),
            "Revision 3/4 (revising thought 1)"
        );

        let mut branch = ThoughtRecord::new("t", 4, 4, false);
        branch.branch_from_thought = Some(2);
        branch.branch_id = Some("alt".into());
        assert_eq!(thought_header(&branch), "Branch 4/4 (from thought 2, ID: alt)");

        assert_eq!(
            thought_header(&ThoughtRecord::new("t", 1, 2, true)),
            "Thought 1/2"
        );
    }
}
