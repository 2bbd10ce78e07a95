use std::collections::HashMap;
use std::hash::Hash;

use super::history::SelectionHistory;

/// Selection histories for every open buffer, keyed by the host's buffer id.
///
/// The owner drives the lifecycle: `open` when a buffer view is created,
/// `close` when it goes away. Closing discards the history.
pub struct HistoryStore<K> {
    histories: HashMap<K, SelectionHistory>,
}

impl<K> Default for HistoryStore<K> {
    fn default() -> Self {
        Self {
            histories: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> HistoryStore<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `buffer`. An existing history is kept.
    pub fn open(&mut self, buffer: K) -> &mut SelectionHistory {
        self.histories.entry(buffer).or_default()
    }

    /// Stop tracking `buffer`, returning its history.
    pub fn close(&mut self, buffer: &K) -> Option<SelectionHistory> {
        self.histories.remove(buffer)
    }

    pub fn get(&self, buffer: &K) -> Option<&SelectionHistory> {
        self.histories.get(buffer)
    }

    pub fn get_mut(&mut self, buffer: &K) -> Option<&mut SelectionHistory> {
        self.histories.get_mut(buffer)
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}
