//! Flat-file JSON store for summary records.
//!
//! The whole store is one human-readable JSON array, newest record first.
//! Every read loads the full document and every write rewrites it in full —
//! there is no partial update, no indexing, and no on-disk locking.
//!
//! Reads follow an absence-means-empty policy: a missing, unreadable, or
//! unparsable file is an empty store, never an error. Write failures
//! propagate.
//!
//! [`insert`](SummaryStore::insert) runs load → prepend → save under an
//! in-process mutex so concurrent ingestions in the same process cannot
//! overwrite each other's records.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::warn;

use crate::models::SummaryRecord;

/// Handle to the persisted summary collection.
pub struct SummaryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SummaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load every record, newest first.
    ///
    /// A missing or corrupt store file reads as empty. Corruption is logged
    /// but deliberately not surfaced; the next save rewrites the file whole.
    pub fn load_all(&self) -> Vec<SummaryRecord> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                warn!("store file {} is unparsable: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence and overwrite the store file.
    ///
    /// Pretty-printed with stable key order. Creates the parent directory if
    /// needed; write failures propagate to the caller.
    pub fn save_all(&self, records: &[SummaryRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create store directory: {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write store file: {}", self.path.display()))
    }

    /// Prepend one record: load → insert at index 0 → save, serialized so
    /// two concurrent inserts cannot drop each other's record.
    pub async fn insert(&self, record: SummaryRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_all();
        records.insert(0, record);
        self.save_all(&records)
    }
}
