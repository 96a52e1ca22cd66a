//! Bounded, newest-first log of analysis results.

use std::collections::VecDeque;

use crate::models::AnalysisResult;

pub const HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    entries: VecDeque<AnalysisResult>,
    capacity: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuilds a store from a persisted newest-first list, dropping
    /// anything past capacity.
    pub fn from_entries(entries: Vec<AnalysisResult>) -> Self {
        let mut store = Self::new();
        store.entries.extend(entries);
        store.trim();
        store
    }

    pub fn append(&mut self, result: AnalysisResult) {
        self.entries.push_front(result);
        self.trim();
    }

    /// Same as calling [`append`](Self::append) for each item in order, but
    /// trims once at the end. The last item of the batch ends up newest, and
    /// a batch larger than the capacity evicts its own earliest members.
    pub fn append_many<I>(&mut self, results: I)
    where
        I: IntoIterator<Item = AnalysisResult>,
    {
        for result in results {
            self.entries.push_front(result);
        }
        self.trim();
    }

    pub fn all(&self) -> Vec<AnalysisResult> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.entries.iter()
    }

    /// Newest-first window `[start, start + len)`, empty when out of range.
    pub fn slice(&self, start: usize, len: usize) -> Vec<AnalysisResult> {
        self.entries.iter().skip(start).take(len).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn trim(&mut self) {
        self.entries.truncate(self.capacity);
    }
}
