//! Client-local key-value store: a JSON file standing in for the
//! browser's durable storage. Three independent concerns live here, each
//! under its own key with its own retention rule:
//!
//! - `operator_lock`: single slot, cleared explicitly on unlock;
//! - `draft_<docket>`: overwritten on every save, deleted once the
//!   submission succeeds;
//! - `submitted_forms`: append-only local log of submissions.
//!
//! Corrupt stored data is logged and treated as absent; it never stops
//! initialization.

use crate::errors::AppResult;
use crate::models::report::ShiftReport;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const OPERATOR_LOCK_KEY: &str = "operator_lock";
const SUBMITTED_FORMS_KEY: &str = "submitted_forms";

/// Contents of the operator-lock slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorLock {
    pub opkey: i64,
    pub locked: bool,
}

pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the store file, or start empty when it is missing or
    /// unreadable.
    pub fn open(path: &Path) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), "malformed local store, starting empty: {e}");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    fn persist(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.entries.get(key)?;
        match serde_json::from_str(raw) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(key, "malformed value in local store, treating as absent: {e}");
                None
            }
        }
    }

    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> AppResult<()> {
        self.entries
            .insert(key.to_string(), serde_json::to_string(value)?);
        self.persist()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    // ---------------------------
    // Operator lock slot
    // ---------------------------

    pub fn operator_lock(&self) -> Option<OperatorLock> {
        self.get_json(OPERATOR_LOCK_KEY)
    }

    pub fn set_operator_lock(&mut self, lock: &OperatorLock) -> AppResult<()> {
        self.set_json(OPERATOR_LOCK_KEY, lock)
    }

    pub fn clear_operator_lock(&mut self) -> AppResult<()> {
        self.remove(OPERATOR_LOCK_KEY)
    }

    // ---------------------------
    // Per-docket drafts
    // ---------------------------

    fn draft_key(docket: &str) -> String {
        format!("draft_{}", docket)
    }

    pub fn draft(&self, docket: &str) -> Option<ShiftReport> {
        self.get_json(&Self::draft_key(docket))
    }

    /// Save (or overwrite) the draft under its report's docket.
    pub fn save_draft(&mut self, report: &ShiftReport) -> AppResult<()> {
        self.set_json(&Self::draft_key(&report.docket), report)
    }

    pub fn delete_draft(&mut self, docket: &str) -> AppResult<()> {
        self.remove(&Self::draft_key(docket))
    }

    // ---------------------------
    // Submitted-forms local log
    // ---------------------------

    pub fn submitted_forms(&self) -> Vec<ShiftReport> {
        self.get_json(SUBMITTED_FORMS_KEY).unwrap_or_default()
    }

    /// Append to the local fallback log, independent of the remote store.
    pub fn append_submitted(&mut self, report: &ShiftReport) -> AppResult<()> {
        let mut log = self.submitted_forms();
        log.push(report.clone());
        self.set_json(SUBMITTED_FORMS_KEY, &log)
    }

    /// Record a successful submission: log it locally and drop the draft.
    pub fn mark_submitted(&mut self, report: &ShiftReport) -> AppResult<()> {
        self.append_submitted(report)?;
        self.delete_draft(&report.docket)
    }
}
