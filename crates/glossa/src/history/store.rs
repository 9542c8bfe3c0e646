//! History store - append-only ordered log of results, JSON-file backed.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use indexmap::IndexMap;

use crate::error::{GlossaError, Result};

use super::record::HistoryRecord;

/// Number of records in one history page.
pub const PAGE_SIZE: usize = 20;

/// Append-only store of correction/explanation results.
///
/// Records are kept in creation order, keyed by identity, and queried
/// newest first. Every append or delete persists the log to disk and
/// pushes the current first page to live subscribers. A failed disk write
/// never discards the in-memory record: a result the user already
/// received survives the failed save, and the error is returned for the
/// caller to report.
pub struct HistoryStore {
    path: PathBuf,
    records: IndexMap<String, HistoryRecord>,
    subscribers: Vec<Sender<Vec<HistoryRecord>>>,
}

impl HistoryStore {
    /// Open a store, loading existing records from `path` if present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let records = if path.exists() {
            let file = File::open(&path).map_err(|e| {
                GlossaError::Persistence(format!(
                    "Failed to open history file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            let reader = BufReader::new(file);
            let loaded: Vec<HistoryRecord> = serde_json::from_reader(reader).map_err(|e| {
                GlossaError::Persistence(format!(
                    "Failed to parse history file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            loaded.into_iter().map(|r| (r.id.clone(), r)).collect()
        } else {
            IndexMap::new()
        };

        Ok(Self {
            path,
            records,
            subscribers: Vec::new(),
        })
    }

    /// Append a record and persist the log.
    pub fn append(&mut self, record: HistoryRecord) -> Result<()> {
        self.records.insert(record.id.clone(), record);
        let saved = self.save();
        self.notify();
        saved
    }

    /// Delete a record by ID and persist the log.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if self.records.shift_remove(id).is_none() {
            return Err(GlossaError::History(format!("Record '{}' not found", id)));
        }
        let saved = self.save();
        self.notify();
        saved
    }

    /// Get a record by ID.
    pub fn get(&self, id: &str) -> Option<&HistoryRecord> {
        self.records.get(id)
    }

    /// The most recently appended record, if any.
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.values().last()
    }

    /// The current first page, newest first.
    pub fn recent(&self) -> Vec<HistoryRecord> {
        self.page(0)
    }

    /// One page of records in descending creation order.
    pub fn page(&self, page: usize) -> Vec<HistoryRecord> {
        self.records
            .values()
            .rev()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Subscribe to live page updates.
    ///
    /// The receiver gets the current first page immediately and a fresh
    /// snapshot after every append or delete. Disconnected receivers are
    /// pruned on the next notification.
    pub fn subscribe(&mut self) -> Receiver<Vec<HistoryRecord>> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.recent());
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self) {
        let page = self.recent();
        self.subscribers.retain(|tx| tx.send(page.clone()).is_ok());
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    GlossaError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            GlossaError::Persistence(format!(
                "Failed to create history file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        let records: Vec<&HistoryRecord> = self.records.values().collect();
        serde_json::to_writer_pretty(writer, &records)
            .map_err(|e| GlossaError::Persistence(format!("Failed to serialize history: {}", e)))
    }
}
