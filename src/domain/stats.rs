use crate::store::Store;
use serde::{Deserialize, Serialize};

/// Lifetime achievement counters. Increment-only: un-checking a completed
/// task does not decrement `done` — completions are a lifetime count, not a
/// live count of currently-checked tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub done: u64,
    #[serde(default)]
    pub pomos: u64,
}

impl Stats {
    pub const STORE_KEY: &'static str = "stats";

    /// Load from the store; absent or malformed data yields zeroed counters
    pub fn load(store: &Store) -> Self {
        store.read(Self::STORE_KEY, Stats::default())
    }

    /// Count one completed task and persist
    pub fn increment_done(&mut self, store: &Store) {
        self.done += 1;
        store.write(Self::STORE_KEY, self);
    }

    /// Count one finished work interval and persist
    pub fn increment_pomodoro(&mut self, store: &Store) {
        self.pomos += 1;
        store.write(Self::STORE_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path());
        (dir, store)
    }

    #[test]
    fn test_defaults_to_zero() {
        let (_dir, store) = test_store();
        let stats = Stats::load(&store);
        assert_eq!(stats, Stats { done: 0, pomos: 0 });
    }

    #[test]
    fn test_increments_persist() {
        let (_dir, store) = test_store();
        let mut stats = Stats::load(&store);

        stats.increment_done(&store);
        stats.increment_pomodoro(&store);
        stats.increment_pomodoro(&store);

        let reloaded = Stats::load(&store);
        assert_eq!(reloaded, Stats { done: 1, pomos: 2 });
    }

    #[test]
    fn test_partial_record_fills_missing_field() {
        let (dir, store) = test_store();
        std::fs::write(dir.path().join("stats.json"), r#"{"done": 5}"#).unwrap();

        let stats = Stats::load(&store);
        assert_eq!(stats, Stats { done: 5, pomos: 0 });
    }

    #[test]
    fn test_malformed_record_resets_to_zero() {
        let (dir, store) = test_store();
        std::fs::write(dir.path().join("stats.json"), r#"{"done": "many"}"#).unwrap();

        let stats = Stats::load(&store);
        assert_eq!(stats, Stats::default());
    }
}
