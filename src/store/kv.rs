use super::files::{atomic_write, ensure_data_dir};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

/// JSON key-value store over one directory, one file per key. Keys are
/// independent: a corrupt or unreadable value under one key never blocks
/// reads of the others.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store in the resolved data directory, creating it if needed
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: ensure_data_dir()?,
        })
    }

    /// Open the store against an explicit directory
    pub fn open_at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and decode the value stored under `key`. A missing file, an
    /// unreadable file, or an undecodable payload all yield `fallback`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Ok(raw) = std::fs::read_to_string(self.key_path(key)) else {
            return fallback;
        };
        serde_json::from_str(&raw).unwrap_or(fallback)
    }

    /// Encode `value` and store it under `key`. Best-effort: a failed write
    /// is dropped, the in-memory state stays authoritative.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let Ok(json) = serde_json::to_string_pretty(value) else {
            return;
        };
        let _ = atomic_write(self.key_path(key), &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_then_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(temp_dir.path());

        store.write("numbers", &vec![1u32, 2, 3]);
        let numbers: Vec<u32> = store.read("numbers", Vec::new());
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_read_missing_key_returns_fallback() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(temp_dir.path());

        let value: Vec<String> = store.read("absent", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_read_invalid_json_returns_fallback() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("broken.json"), "{not json").unwrap();
        let store = Store::open_at(temp_dir.path());

        let value: u32 = store.read("broken", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_read_wrong_shape_returns_fallback() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("shape.json"), "\"a string\"").unwrap();
        let store = Store::open_at(temp_dir.path());

        let value: Vec<u32> = store.read("shape", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(temp_dir.path());

        store.write("good", &vec![9u32]);
        std::fs::write(temp_dir.path().join("bad.json"), "][").unwrap();

        let bad: Vec<u32> = store.read("bad", Vec::new());
        let good: Vec<u32> = store.read("good", Vec::new());
        assert!(bad.is_empty());
        assert_eq!(good, vec![9]);
    }
}
