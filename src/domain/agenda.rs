use crate::store::Store;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dated agenda entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaEntry {
    pub id: Uuid,
    pub text: String,
    /// ISO-8601 date (YYYY-MM-DD) or empty when no date was given
    #[serde(default)]
    pub when: String,
}

impl AgendaEntry {
    pub fn new(text: String, when: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            when,
        }
    }
}

/// The agenda collection. Insertion order is irrelevant: the list is viewed
/// through `sorted()`, ascending by date with undated entries first.
#[derive(Debug, Default)]
pub struct Agenda {
    entries: Vec<AgendaEntry>,
}

impl Agenda {
    pub const STORE_KEY: &'static str = "agenda";

    /// Load from the store; malformed stored data yields an empty agenda
    pub fn load(store: &Store) -> Self {
        Self {
            entries: store.read(Self::STORE_KEY, Vec::new()),
        }
    }

    /// Add a new entry. Blank text is a no-op; a `when` that is not a valid
    /// YYYY-MM-DD date is normalized to empty. Returns whether an entry was
    /// added.
    pub fn add(&mut self, text: &str, when: &str, store: &Store) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries
            .insert(0, AgendaEntry::new(text.to_string(), normalize_when(when)));
        self.save(store);
        true
    }

    /// Remove the entry with the given id; an absent id is a no-op
    pub fn remove(&mut self, id: Uuid, store: &Store) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.save(store);
        }
    }

    /// Entries in display order: ascending by `when`, lexicographic on the
    /// ISO date string, so undated (empty) entries sort first
    pub fn sorted(&self) -> Vec<&AgendaEntry> {
        let mut view: Vec<&AgendaEntry> = self.entries.iter().collect();
        view.sort_by(|a, b| a.when.cmp(&b.when));
        view
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self, store: &Store) {
        store.write(Self::STORE_KEY, &self.entries);
    }
}

/// Keep `when` only when it is a real ISO date; anything else becomes empty
fn normalize_when(when: &str) -> String {
    let when = when.trim();
    match chrono::NaiveDate::parse_from_str(when, "%Y-%m-%d") {
        Ok(_) => when.to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(dir.path());
        (dir, store)
    }

    #[test]
    fn test_sorted_ascending_with_undated_first() {
        let (_dir, store) = test_store();
        let mut agenda = Agenda::default();
        agenda.add("exam", "2026-09-01", &store);
        agenda.add("sometime", "", &store);
        agenda.add("deadline", "2026-08-15", &store);

        let order: Vec<&str> = agenda.sorted().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(order, vec!["sometime", "deadline", "exam"]);
    }

    #[test]
    fn test_sorted_is_non_decreasing() {
        let (_dir, store) = test_store();
        let mut agenda = Agenda::default();
        for when in ["2026-03-01", "", "2025-12-31", "2026-03-01", ""] {
            agenda.add("entry", when, &store);
        }

        let view = agenda.sorted();
        for pair in view.windows(2) {
            assert!(pair[0].when <= pair[1].when);
        }
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        let (_dir, store) = test_store();
        let mut agenda = Agenda::default();

        assert!(!agenda.add("  ", "2026-08-15", &store));
        assert!(agenda.is_empty());
    }

    #[test]
    fn test_invalid_date_normalized_to_empty() {
        let (_dir, store) = test_store();
        let mut agenda = Agenda::default();
        agenda.add("fuzzy", "next tuesday", &store);
        agenda.add("bad month", "2026-13-01", &store);

        assert!(agenda.sorted().iter().all(|e| e.when.is_empty()));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = test_store();
        let mut agenda = Agenda::default();
        agenda.add("only", "", &store);
        let id = agenda.sorted()[0].id;

        agenda.remove(id, &store);
        agenda.remove(id, &store);
        assert!(agenda.is_empty());
    }

    #[test]
    fn test_load_survives_corrupt_store() {
        let (dir, store) = test_store();
        std::fs::write(dir.path().join("agenda.json"), "42").unwrap();

        let agenda = Agenda::load(&store);
        assert!(agenda.is_empty());
    }
}
