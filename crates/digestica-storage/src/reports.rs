use digestica_core::models::result::{ResultRecord, Scores};
use digestica_core::store_keys;

use crate::error::StorageError;
use crate::state::{load_for_update, load_optional, load_or_default, save_state};
use crate::store::KeyValueStore;

/// Saved result records, newest first, plus the most recent one.
pub struct ReportArchive<S> {
    store: S,
}

impl<S: KeyValueStore> ReportArchive<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Prepend `record` to the saved list and make it the current report.
    /// Fails without writing if the saved list cannot be read.
    pub fn save(&self, record: &ResultRecord) -> Result<(), StorageError> {
        let mut reports: Vec<ResultRecord> = load_for_update(&self.store, store_keys::REPORTS)?;
        reports.insert(0, record.clone());
        save_state(&self.store, store_keys::REPORTS, &reports)?;
        save_state(&self.store, store_keys::CURRENT_REPORT, record)?;
        tracing::info!(id = %record.id, kind = record.kind(), count = reports.len(), "report saved");
        Ok(())
    }

    /// All saved records, newest first. Unreadable data reads as empty.
    pub fn list(&self) -> Vec<ResultRecord> {
        load_or_default(&self.store, store_keys::REPORTS)
    }

    pub fn get(&self, id: &str) -> Option<ResultRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// The most recently completed record, if any.
    pub fn current(&self) -> Option<ResultRecord> {
        load_optional(&self.store, store_keys::CURRENT_REPORT)
    }

    /// Remove every saved record with `id` from the list. The current-report
    /// slot is left as is. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut reports: Vec<ResultRecord> = load_for_update(&self.store, store_keys::REPORTS)?;
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() == before {
            return Ok(false);
        }
        save_state(&self.store, store_keys::REPORTS, &reports)?;
        tracing::info!(id, remaining = reports.len(), "report deleted");
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// One-line summary for report listings: `"IBS (72%)"` for general results,
/// `"Lactose Intolerance Symptom Scale (12)"` for instrument results.
pub fn top_diagnosis_summary(record: &ResultRecord) -> String {
    match &record.scores {
        Scores::General { conditions } => {
            let (condition, score) = conditions.top();
            format!("{} ({score}%)", condition.short_name())
        }
        Scores::Instrument {
            instrument_name,
            score,
            ..
        } => format!("{instrument_name} ({})", score.score),
    }
}
