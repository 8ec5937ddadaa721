use digestica_core::models::diary::{DiaryEntry, Symptom};

use crate::error::ExportError;

/// Header row of the diary export, in column order.
pub const DIARY_COLUMNS: [&str; 15] = [
    "Datum",
    "Buikpijn",
    "Opgeblazen",
    "Gas",
    "Misselijkheid",
    "Diarree",
    "Constipatie",
    "Vermoeidheid",
    "Bristol Type",
    "Frequentie",
    "Humeur",
    "Stress",
    "Slaap",
    "Voedingsmiddelen",
    "Notities",
];

/// Export diary entries as CSV for the user's doctor, one row per entry in
/// the order given. Foods are joined with `"; "`.
pub fn diary_csv(entries: &[DiaryEntry]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(DIARY_COLUMNS)?;

    for entry in entries {
        let mut row = vec![entry.date.to_string()];
        row.extend(
            Symptom::ALL
                .iter()
                .map(|s| entry.symptoms.get(*s).to_string()),
        );
        row.extend([
            entry.stool_type.to_string(),
            entry.stool_frequency.to_string(),
            entry.mood.to_string(),
            entry.stress.to_string(),
            entry.sleep.to_string(),
            entry.foods.join("; "),
            entry.notes.clone(),
        ]);
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    tracing::debug!(rows = entries.len(), "diary exported");
    Ok(String::from_utf8(bytes)?)
}
