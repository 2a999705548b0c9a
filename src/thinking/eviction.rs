//! Bounded retention for the thought history.

use std::collections::VecDeque;

/// Default ceiling on retained thoughts.
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 1000;

/// Keeps at most `max_history_size` of the most recent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionPolicy {
    max_history_size: usize,
}

impl EvictionPolicy {
    /// A zero ceiling is raised to one; config validation rejects it earlier.
    pub fn new(max_history_size: usize) -> Self {
        Self {
            max_history_size: max_history_size.max(1),
        }
    }

    pub fn max_history_size(&self) -> usize {
        self.max_history_size
    }

    /// Drop the oldest entries until the bound holds. Returns how many were dropped.
    pub fn enforce<T>(&self, history: &mut VecDeque<T>) -> usize {
        let excess = history.len().saturating_sub(self.max_history_size);
        history.drain(..excess);
        excess
    }
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY_SIZE)
    }
}
