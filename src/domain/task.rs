use crate::store::Store;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for the lifetime of the stored collection
    pub id: Uuid,
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            done: false,
        }
    }
}

/// The to-do collection. Owns one storage key and persists after every
/// mutation, so each operation is durably recorded before the next begins.
#[derive(Debug, Default)]
pub struct TaskList {
    entries: Vec<Task>,
}

impl TaskList {
    pub const STORE_KEY: &'static str = "tasks";

    /// Load from the store; malformed stored data yields an empty list
    pub fn load(store: &Store) -> Self {
        Self {
            entries: store.read(Self::STORE_KEY, Vec::new()),
        }
    }

    /// Add a new task to the front of the list (most-recent-first).
    /// Blank or whitespace-only text is a no-op; returns whether a task
    /// was added.
    pub fn add(&mut self, text: &str, store: &Store) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries.insert(0, Task::new(text.to_string()));
        self.save(store);
        true
    }

    /// Remove the task with the given id; an absent id is a no-op
    pub fn remove(&mut self, id: Uuid, store: &Store) {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        if self.entries.len() != before {
            self.save(store);
        }
    }

    /// Flip a task's done flag. Returns true only for the false -> true
    /// direction, the one that counts toward the lifetime done counter.
    pub fn toggle_done(&mut self, id: Uuid, store: &Store) -> bool {
        let mut completed = false;
        if let Some(task) = self.entries.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
            completed = task.done;
            self.save(store);
        }
        completed
    }

    pub fn entries(&self) -> &[Task] {
        &self.entries
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
