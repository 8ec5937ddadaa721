use digestica_core::models::diary::{DiaryEntry, Symptom};
use digestica_core::store_keys;
use uuid::Uuid;

use crate::error::StorageError;
use crate::state::{load_for_update, load_or_default, save_state};
use crate::store::KeyValueStore;

/// Entries considered for the food frequency list.
pub const FOOD_WINDOW: usize = 30;

/// Length of the food frequency list.
pub const TOP_FOODS: usize = 8;

/// Entries averaged when looking for the worst symptom.
pub const PROBLEM_WINDOW: usize = 7;

/// The symptom diary: at most one entry per date, newest date first.
pub struct SymptomDiary<S> {
    store: S,
}

impl<S: KeyValueStore> SymptomDiary<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and store `entry`, replacing any entry for the same date.
    pub fn save(&self, entry: DiaryEntry) -> Result<(), StorageError> {
        entry.validate()?;

        let date = entry.date;
        let mut entries: Vec<DiaryEntry> = load_for_update(&self.store, store_keys::SYMPTOMS)?;
        entries.retain(|e| e.date != date);
        entries.push(entry);
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        save_state(&self.store, store_keys::SYMPTOMS, &entries)?;
        tracing::debug!(%date, count = entries.len(), "diary entry saved");
        Ok(())
    }

    /// Returns whether an entry with `id` existed.
    pub fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut entries: Vec<DiaryEntry> = load_for_update(&self.store, store_keys::SYMPTOMS)?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        save_state(&self.store, store_keys::SYMPTOMS, &entries)?;
        tracing::debug!(%id, "diary entry deleted");
        Ok(true)
    }

    /// All entries, newest date first. Unreadable data reads as empty.
    pub fn entries(&self) -> Vec<DiaryEntry> {
        load_or_default(&self.store, store_keys::SYMPTOMS)
    }

    pub fn entries_on(&self, date: jiff::civil::Date) -> Vec<DiaryEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.date == date)
            .collect()
    }

    /// Mean rating of `symptom` over the `days` most recent entries, rounded
    /// to one decimal. 0 when there are no entries.
    pub fn symptom_average(&self, symptom: Symptom, days: usize) -> f64 {
        let entries = self.entries();
        let recent = &entries[..days.min(entries.len())];
        if recent.is_empty() {
            return 0.0;
        }
        let total: u32 = recent
            .iter()
            .map(|e| u32::from(e.symptoms.get(symptom)))
            .sum();
        (f64::from(total) / recent.len() as f64 * 10.0).round() / 10.0
    }

    /// Foods logged in the [`FOOD_WINDOW`] most recent entries with their
    /// counts, most frequent first, at most [`TOP_FOODS`]. Equal counts keep
    /// first-seen order.
    pub fn frequent_foods(&self) -> Vec<(String, usize)> {
        let entries = self.entries();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for food in entries.iter().take(FOOD_WINDOW).flat_map(|e| &e.foods) {
            match counts.iter_mut().find(|(seen, _)| seen == food) {
                Some((_, count)) => *count += 1,
                None => counts.push((food.clone(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(TOP_FOODS);
        counts
    }

    /// The symptom with the highest [`PROBLEM_WINDOW`]-entry average and
    /// that average. `None` while every average is 0. On equal averages the
    /// symptom listed later wins.
    pub fn biggest_problem(&self) -> Option<(Symptom, f64)> {
        Symptom::ALL
            .into_iter()
            .map(|symptom| (symptom, self.symptom_average(symptom, PROBLEM_WINDOW)))
            .reduce(|best, candidate| if best.1 > candidate.1 { best } else { candidate })
            .filter(|(_, average)| *average > 0.0)
    }
}

/// Calendar shading for a day: the mean of its seven symptom ratings.
pub fn day_intensity(entry: &DiaryEntry) -> f64 {
    entry.symptoms.mean()
}
