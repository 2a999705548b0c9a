//! Thought ledger: retained history plus the branch index.
//!
//! Branch membership is additive. A branch keeps its records even after the
//! main history has evicted them, so `branch(id)` can outlive `history()`.

use super::eviction::EvictionPolicy;
use super::types::ThoughtRecord;
use std::collections::{BTreeMap, VecDeque};

/// Counts removed by [`ThoughtLedger::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearedCounts {
    pub thoughts: usize,
    pub branches: usize,
}

/// Raise `total_thoughts` to `thought_number` when the estimate fell behind.
pub fn normalize_total_thoughts(record: &mut ThoughtRecord) {
    if record.thought_number > record.total_thoughts {
        record.total_thoughts = record.thought_number;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThoughtLedger {
    history: VecDeque<ThoughtRecord>,
    branches: BTreeMap<String, Vec<ThoughtRecord>>,
    policy: EvictionPolicy,
}

impl ThoughtLedger {
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            history: VecDeque::new(),
            branches: BTreeMap::new(),
            policy,
        }
    }

    /// Store a record, trim to capacity, then index it under its branch.
    /// Returns the number of records evicted from the front.
    pub fn append(&mut self, mut record: ThoughtRecord) -> usize {
        normalize_total_thoughts(&mut record);

        let branch_entry = record
            .branch_key()
            .map(|id| (id.to_owned(), record.clone()));
        self.history.push_back(record);

        let evicted = self.policy.enforce(&mut self.history);
        if evicted > 0 {
            tracing::debug!(
                "evicted {} thought(s), retaining {}",
                evicted,
                self.history.len()
            );
        }

        if let Some((id, record)) = branch_entry {
            self.branches.entry(id).or_default().push(record);
        }
        evicted
    }

    pub fn clear(&mut self) -> ClearedCounts {
        let cleared = ClearedCounts {
            thoughts: self.history.len(),
            branches: self.branches.len(),
        };
        self.history.clear();
        self.branches.clear();
        cleared
    }

    /// Known branch identifiers, sorted.
    pub fn branch_ids(&self) -> Vec<String> {
        self.branches.keys().cloned().collect()
    }

    pub fn size(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn history(&self) -> impl ExactSizeIterator<Item = &ThoughtRecord> {
        self.history.iter()
    }

    pub fn branch(&self, id: &str) -> Option<&[ThoughtRecord]> {
        self.branches.get(id).map(Vec::as_slice)
    }

    pub fn last(&self) -> Option<&ThoughtRecord> {
        self.history.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: u32) -> ThoughtRecord {
        ThoughtRecord::new(format!("thought {n}"), n, 5, true)
    }

    fn branched(n: u32, from: u32, id: &str) -> ThoughtRecord {
        let mut r = numbered(n);
        r.branch_from_thought = Some(from);
        r.branch_id = Some(id.to_string());
        r
    }

    #[test]
    fn raises_total_to_thought_number() {
        let mut ledger = ThoughtLedger::default();
        ledger.append(ThoughtRecord::new("late", 7, 3, true));
        assert_eq!(ledger.last().unwrap().total_thoughts, 7);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut ledger = ThoughtLedger::new(EvictionPolicy::new(2));
        for n in 1..=3 {
            ledger.append(numbered(n));
        }
        let kept: Vec<u32> = ledger.history().map(|r| r.thought_number).collect();
        assert_eq!(kept, vec![2, 3]);
        assert_eq!(ledger.size(), 2);
    }

    #[test]
    fn branch_needs_both_fields() {
        let mut ledger = ThoughtLedger::default();
        let mut only_id = numbered(1);
        only_id.branch_id = Some("A".into());
        ledger.append(only_id);
        let mut only_from = numbered(2);
        only_from.branch_from_thought = Some(1);
        ledger.append(only_from);
        assert!(ledger.branch_ids().is_empty());

        ledger.append(branched(4, 3, "A"));
        assert_eq!(ledger.branch_ids(), vec!["A".to_string()]);
        assert_eq!(ledger.branch("A").unwrap()[0].thought_number, 4);
        assert_eq!(ledger.size(), 3);
    }

    #[test]
    fn branches_survive_history_eviction() {
        let mut ledger = ThoughtLedger::new(EvictionPolicy::new(1));
        ledger.append(branched(2, 1, "alt"));
        ledger.append(numbered(3));
        assert_eq!(ledger.size(), 1);
        assert_eq!(ledger.branch("alt").map(<[_]>::len), Some(1));
    }

    #[test]
    fn clear_empties_everything() {
        let mut ledger = ThoughtLedger::default();
        ledger.append(numbered(1));
        ledger.append(branched(2, 1, "A"));
        ledger.append(branched(3, 1, "B"));
        let cleared = ledger.clear();
        assert_eq!(
            cleared,
            ClearedCounts {
                thoughts: 3,
                branches: 2
            }
        );
        assert!(ledger.is_empty());
        assert!(ledger.branch_ids().is_empty());
    }
}
