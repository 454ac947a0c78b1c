// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bounded, newest-first log of identification records.
//!
//! The whole log lives under one storage key as a JSON array. Every
//! operation is a read-modify-write of that blob, serialized through a lock
//! so two callers in one process cannot overwrite each other's changes.
//!
//! The plain methods ([`HistoryStore::list`], [`HistoryStore::append`], ...)
//! never fail: storage and decode problems are logged and collapse to an
//! empty list or a skipped write. The `try_` variants return the error for
//! callers that want to report it.

use crate::storage::KeyValueStore;
use crate::types::HistoryRecord;
use anyhow::{anyhow, Context, Result};
use std::sync::{Mutex, MutexGuard};

/// Storage key holding the serialized log.
pub const HISTORY_KEY: &str = "@insectaid_history";

/// Maximum number of records retained.
pub const HISTORY_CAPACITY: usize = 50;

pub struct HistoryStore<S> {
    store: S,
    key: String,
    lock: Mutex<()>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, HISTORY_KEY)
    }

    /// Store the log under a key other than [`HISTORY_KEY`].
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All records, newest first. Empty when absent, unreadable or corrupt.
    pub fn list(&self) -> Vec<HistoryRecord> {
        self.try_list().unwrap_or_else(|err| {
            tracing::warn!(key = %self.key, error = %err, "failed to read history");
            Vec::new()
        })
    }

    /// Record with `id`, if present.
    pub fn find(&self, id: &str) -> Option<HistoryRecord> {
        self.list().into_iter().find(|record| record.id == id)
    }

    /// Insert `record` at the front, evicting the oldest entry past capacity.
    pub fn append(&self, record: HistoryRecord) {
        if let Err(err) = self.try_append(record) {
            tracing::warn!(key = %self.key, error = %err, "failed to save history");
        }
    }

    /// Drop every record whose id is `id`.
    pub fn remove(&self, id: &str) {
        if let Err(err) = self.try_remove(id) {
            tracing::warn!(key = %self.key, id, error = %err, "failed to remove history item");
        }
    }

    /// Delete the persisted log.
    pub fn clear(&self) {
        if let Err(err) = self.try_clear() {
            tracing::warn!(key = %self.key, error = %err, "failed to clear history");
        }
    }

    pub fn try_list(&self) -> Result<Vec<HistoryRecord>> {
        let _guard = self.guard()?;
        self.read()
    }

    pub fn try_append(&self, record: HistoryRecord) -> Result<()> {
        let _guard = self.guard()?;
        let mut records = self.read_for_update()?;
        records.insert(0, record);
        if records.len() > HISTORY_CAPACITY {
            records.pop();
        }
        self.write(&records)
    }

    /// Returns whether any record matched `id`. The filtered log is
    /// written back either way.
    pub fn try_remove(&self, id: &str) -> Result<bool> {
        let _guard = self.guard()?;
        let mut records = self.read_for_update()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        let removed = records.len() != before;
        self.write(&records)?;
        Ok(removed)
    }

    pub fn try_clear(&self) -> Result<()> {
        let _guard = self.guard()?;
        self.store
            .delete(&self.key)
            .with_context(|| format!("deleting {}", self.key))
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| anyhow!("history lock poisoned"))
    }

    fn read(&self) -> Result<Vec<HistoryRecord>> {
        let Some(blob) = self
            .store
            .get(&self.key)
            .with_context(|| format!("reading {}", self.key))?
        else {
            return Ok(Vec::new());
        };
        self.decode(&blob)
    }

    /// Current records for a mutation. A blob that is not a JSON array counts
    /// as empty and is overwritten; a storage failure aborts the mutation.
    fn read_for_update(&self) -> Result<Vec<HistoryRecord>> {
        let blob = self
            .store
            .get(&self.key)
            .with_context(|| format!("reading {}", self.key))?;
        Ok(match blob {
            Some(blob) => self.decode(&blob).unwrap_or_else(|err| {
                tracing::warn!(key = %self.key, error = %err, "discarding corrupt history");
                Vec::new()
            }),
            None => Vec::new(),
        })
    }

    /// Decode the blob one entry at a time. Entries that do not decode as a
    /// record are skipped so one bad entry cannot take the rest with it.
    fn decode(&self, blob: &str) -> Result<Vec<HistoryRecord>> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(blob).with_context(|| format!("decoding {}", self.key))?;
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(key = %self.key, index, error = %err, "skipping bad history entry");
                    None
                }
            })
            .collect())
    }

    fn write(&self, records: &[HistoryRecord]) -> Result<()> {
        let blob = serde_json::to_string(records)?;
        self.store
            .set(&self.key, &blob)
            .with_context(|| format!("writing {}", self.key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn record(id: &str) -> HistoryRecord {
        HistoryRecord {
            id: id.to_string(),
            name: "Monarch Butterfly".into(),
            scientific_name: "Danaus plexippus".into(),
            confidence: 94,
            image_uri: format!("file:///photos/{}.jpg", id),
            date: "2025-03-04T09:30:00.000Z".into(),
            category: "Butterflies & Moths".into(),
        }
    }

    fn ids(records: &[HistoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn empty_store_lists_nothing() {
        let history = HistoryStore::new(MemoryStore::new());
        assert!(history.list().is_empty());
    }

    #[test]
    fn append_is_newest_first() {
        let history = HistoryStore::new(MemoryStore::new());
        history.append(record("a"));
        history.append(record("b"));
        history.append(record("c"));
        assert_eq!(ids(&history.list()), vec!["c", "b", "a"]);
    }

    #[test]
    fn fifty_first_append_evicts_the_oldest() {
        let history = HistoryStore::new(MemoryStore::new());
        for n in 1..=51 {
            history.append(record(&n.to_string()));
        }
        let records = history.list();
        assert_eq!(records.len(), HISTORY_CAPACITY);
        assert_eq!(records.first().unwrap().id, "51");
        assert_eq!(records.last().unwrap().id, "2");
        assert!(history.find("1").is_none());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let history = HistoryStore::new(MemoryStore::new());
        history.append(record("a"));
        history.append(record("b"));
        let before = history.list();
        history.remove("zzz");
        assert_eq!(history.list(), before);
    }

    #[test]
    fn remove_drops_matching_record() {
        let history = HistoryStore::new(MemoryStore::new());
        for id in ["a", "b", "c"] {
            history.append(record(id));
        }
        history.remove("b");
        assert_eq!(ids(&history.list()), vec!["c", "a"]);
    }

    #[test]
    fn clear_then_list_is_empty() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(&store);
        history.append(record("a"));
        history.clear();
        assert!(history.list().is_empty());
        assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_blob_reads_as_empty_and_is_replaced_on_append() {
        let store = MemoryStore::new();
        store.set(HISTORY_KEY, "{not json").unwrap();
        let history = HistoryStore::new(&store);
        assert!(history.list().is_empty());
        assert!(history.try_list().is_err());

        history.append(record("fresh"));
        assert_eq!(ids(&history.list()), vec!["fresh"]);
    }

    #[test]
    fn bad_entry_is_skipped_and_the_rest_survive_append() {
        let store = MemoryStore::new();
        let good = serde_json::to_value(record("good")).unwrap();
        let mut bad = serde_json::to_value(record("bad")).unwrap();
        bad["confidence"] = serde_json::json!(94.5);
        let blob = serde_json::to_string(&vec![good, bad]).unwrap();
        store.set(HISTORY_KEY, &blob).unwrap();

        let history = HistoryStore::new(&store);
        assert_eq!(ids(&history.list()), vec!["good"]);

        history.append(record("new"));
        assert_eq!(ids(&history.list()), vec!["new", "good"]);
    }

    #[test]
    fn out_of_range_confidence_entry_is_skipped() {
        let store = MemoryStore::new();
        let mut bad = serde_json::to_value(record("bad")).unwrap();
        bad["confidence"] = serde_json::json!(101);
        let good = serde_json::to_value(record("good")).unwrap();
        store
            .set(HISTORY_KEY, &serde_json::to_string(&vec![bad, good]).unwrap())
            .unwrap();

        let history = HistoryStore::new(&store);
        assert_eq!(ids(&history.list()), vec!["good"]);
    }

    #[test]
    fn try_remove_reports_whether_a_record_matched() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(&store);
        history.append(record("a"));
        assert!(!history.try_remove("zzz").unwrap());
        assert!(history.try_remove("a").unwrap());
        assert!(history.list().is_empty());

        history.append(record("b"));
        store.fail_writes(true);
        assert!(history.try_remove("b").is_err());
        store.fail_writes(false);
        assert_eq!(ids(&history.list()), vec!["b"]);
    }

    #[test]
    fn read_failure_skips_append_without_clobbering() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(&store);
        history.append(record("kept"));

        store.fail_reads(true);
        history.append(record("lost"));
        assert!(history.list().is_empty());
        store.fail_reads(false);

        assert_eq!(ids(&history.list()), vec!["kept"]);
    }

    #[test]
    fn write_failure_is_swallowed() {
        let store = MemoryStore::new();
        let history = HistoryStore::new(&store);
        history.append(record("a"));

        store.fail_writes(true);
        history.append(record("b"));
        history.remove("a");
        history.clear();
        assert!(history.try_clear().is_err());
        store.fail_writes(false);

        assert_eq!(ids(&history.list()), vec!["a"]);
    }

    #[test]
    fn custom_key_is_isolated() {
        let store = MemoryStore::new();
        let main = HistoryStore::new(&store);
        let other = HistoryStore::with_key(&store, "other");
        main.append(record("a"));
        assert!(other.list().is_empty());
        assert_eq!(other.key(), "other");
    }
}
