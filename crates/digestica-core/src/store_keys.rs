//! Key conventions of the browser-profile blob store.
//!
//! These match the keys the web front end has always used,
//! so records written by either side stay readable by the other.

/// Saved result records, newest first.
pub const REPORTS: &str = "belly_dr_reports";

/// The most recently completed result.
pub const CURRENT_REPORT: &str = "current_report";

/// Symptom diary entries, newest date first.
pub const SYMPTOMS: &str = "belly_dr_symptoms";

/// File name used by file-backed stores for `key`.
pub fn file_name(key: &str) -> String {
    format!("{key}.json")
}
