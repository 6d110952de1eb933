//! History ledger for persisting past freight calculations
//!
//! An append-only, insertion-ordered log of CalculationRecord, mirrored to a
//! single JSON file. Every mutation rewrites the whole file through a
//! temporary file plus rename, so storage is never left half-written.

use crate::core::{CalculationRecord, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which slice of the history statistics are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Every stored record
    All,
    /// Only the most recent n records
    Recent(usize),
}

/// Aggregate statistics over the `valor` of stored records
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// The persisted calculation history
pub struct HistoryLedger {
    path: PathBuf,
    records: Vec<CalculationRecord>,
}

impl HistoryLedger {
    /// Get the default history file path
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;

        let app_dir = data_dir.join("freightcalc");
        fs::create_dir_all(&app_dir)?;

        Ok(app_dir.join("history.json"))
    }

    /// Open the ledger backed by the given file.
    ///
    /// A missing, unreadable or corrupt file yields an empty ledger; this
    /// never fails the caller over bad storage. Individual records that do
    /// not satisfy the record invariants are dropped, and if anything was
    /// dropped the cleaned list is written back so the file converges to a
    /// valid state on the next load.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let (records, dropped) = load_records(&path);

        let ledger = Self { path, records };

        if dropped > 0 {
            log::warn!(
                "dropped {} invalid record(s) from {}",
                dropped,
                ledger.path.display()
            );
            // Self-repair is best effort; a failed rewrite must not fail the load
            if let Err(e) = ledger.save() {
                log::warn!("could not rewrite repaired history: {}", e);
            }
        }

        Ok(ledger)
    }

    /// Validate and append a record, persisting the whole history.
    ///
    /// If the save fails the in-memory append is rolled back, so memory and
    /// storage never diverge; the caller decides whether to retry.
    pub fn append(&mut self, record: CalculationRecord) -> Result<()> {
        record.validate()?;
        self.records.push(record);

        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove every record and persist the empty history
    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.records);
        if let Err(e) = self.save() {
            self.records = previous;
            return Err(e);
        }
        Ok(())
    }

    /// All records, oldest first
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// The last n records, still in chronological order
    pub fn recent(&self, n: usize) -> Vec<CalculationRecord> {
        let start = self.records.len().saturating_sub(n);
        self.records[start..].to_vec()
    }

    /// Mean/min/max of the stored amounts over the selected window.
    ///
    /// Returns None for an empty window; statistics over zero records are
    /// meaningless and callers must not present them.
    pub fn statistics(&self, window: Window) -> Option<LedgerStats> {
        let slice = match window {
            Window::All => &self.records[..],
            Window::Recent(n) => {
                let start = self.records.len().saturating_sub(n);
                &self.records[start..]
            }
        };

        if slice.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for record in slice {
            min = min.min(record.amount);
            max = max.max(record.amount);
            sum += record.amount;
        }

        Some(LedgerStats {
            mean: sum / slice.len() as f64,
            min,
            max,
            count: slice.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole history file atomically (temp file + rename)
    fn save(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}

/// Read and filter the stored records, returning how many were dropped
fn load_records(path: &Path) -> (Vec<CalculationRecord>, usize) {
    if !path.exists() {
        return (Vec::new(), 0);
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return (Vec::new(), 0);
        }
    };

    let raw: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("corrupt history file {}: {}", path.display(), e);
            return (Vec::new(), 0);
        }
    };

    let total = raw.len();
    let records: Vec<CalculationRecord> = raw
        .into_iter()
        .filter_map(|value| {
            serde_json::from_value::<CalculationRecord>(value)
                .ok()
                .filter(|r| r.validate().is_ok())
        })
        .collect();

    let dropped = total - records.len();
    (records, dropped)
}
