use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use digestica_core::error::CoreError;
use digestica_core::models::diary::{DiaryEntry, Symptom};
use digestica_core::store_keys;
use digestica_storage::diary::{SymptomDiary, day_intensity};
use digestica_storage::error::StorageError;
use digestica_storage::store::{KeyValueStore, MemoryStore};
use jiff::civil::date;

fn entry(day: i8, pain: u8) -> DiaryEntry {
    let mut entry = DiaryEntry::new(date(2024, 3, day), jiff::Timestamp::UNIX_EPOCH);
    entry.symptoms.abdominal_pain = pain;
    entry
}

#[test]
fn saving_the_same_date_replaces_the_entry() {
    let diary = SymptomDiary::new(MemoryStore::new());
    diary.save(entry(1, 2)).unwrap();
    diary.save(entry(1, 4)).unwrap();

    let on_day = diary.entries_on(date(2024, 3, 1));
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].symptoms.abdominal_pain, 4);
}

#[test]
fn entries_are_sorted_newest_first() {
    let diary = SymptomDiary::new(MemoryStore::new());
    for day in [3, 9, 1, 5] {
        diary.save(entry(day, 0)).unwrap();
    }

    let days: Vec<i8> = diary.entries().iter().map(|e| e.date.day()).collect();
    assert_eq!(days, vec![9, 5, 3, 1]);
}

#[test]
fn out_of_range_entries_are_rejected() {
    let diary = SymptomDiary::new(MemoryStore::new());
    let mut bad = entry(1, 0);
    bad.stool_type = 8;

    let err = diary.save(bad).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Validation(CoreError::OutOfRange { field: "stool type", .. })
    ));
    assert!(diary.entries().is_empty());
}

#[test]
fn delete_by_id() {
    let diary = SymptomDiary::new(MemoryStore::new());
    let first = entry(1, 1);
    let id = first.id;
    diary.save(first).unwrap();
    diary.save(entry(2, 1)).unwrap();

    assert!(diary.delete(id).unwrap());
    assert!(!diary.delete(id).unwrap());
    assert_eq!(diary.entries().len(), 1);
}

#[test]
fn symptom_average_uses_most_recent_entries() {
    let diary = SymptomDiary::new(MemoryStore::new());
    assert_eq!(diary.symptom_average(Symptom::AbdominalPain, 7), 0.0);

    // newest first: 4 (day 4), 1 (day 3), 0 (day 2), 5 (day 1)
    for (day, pain) in [(1, 5), (2, 0), (3, 1), (4, 4)] {
        diary.save(entry(day, pain)).unwrap();
    }

    assert_eq!(diary.symptom_average(Symptom::AbdominalPain, 3), 1.7);
    assert_eq!(diary.symptom_average(Symptom::AbdominalPain, 7), 2.5);
    assert_eq!(diary.symptom_average(Symptom::Bloating, 7), 0.0);
}

#[test]
fn day_intensity_is_the_mean_rating() {
    let mut e = entry(1, 0);
    for symptom in Symptom::ALL {
        e.symptoms.set(symptom, 2);
    }
    e.symptoms.fatigue = 4;
    assert!((day_intensity(&e) - 16.0 / 7.0).abs() < 1e-9);
}

#[test]
fn corrupt_diary_reads_as_empty() {
    let store = MemoryStore::new();
    store.put(store_keys::SYMPTOMS, b"\"oops\"".to_vec()).unwrap();

    let diary = SymptomDiary::new(&store);
    assert!(diary.entries().is_empty());
    diary.save(entry(1, 1)).unwrap();
    assert_eq!(diary.entries().len(), 1);
}

fn with_foods(day: i8, foods: &[&str]) -> DiaryEntry {
    let mut e = entry(day, 0);
    for food in foods {
        e.add_food(food);
    }
    e
}

#[test]
fn frequent_foods_counts_recent_entries() {
    let diary = SymptomDiary::new(MemoryStore::new());
    assert!(diary.frequent_foods().is_empty());

    diary.save(with_foods(1, &["Melk", "Brood"])).unwrap();
    diary.save(with_foods(2, &["Brood", "Appel"])).unwrap();
    diary.save(with_foods(3, &["Kaas", "Brood", "Melk"])).unwrap();

    // newest first: day 3 is read first, so Kaas precedes Appel on equal counts
    assert_eq!(
        diary.frequent_foods(),
        vec![
            ("Brood".to_string(), 3),
            ("Melk".to_string(), 2),
            ("Kaas".to_string(), 1),
            ("Appel".to_string(), 1),
        ]
    );
}

#[test]
fn frequent_foods_is_limited_to_eight_over_thirty_entries() {
    let diary = SymptomDiary::new(MemoryStore::new());
    // Day 1 is the 31st most recent entry and falls outside the window.
    diary.save(with_foods(1, &["Oud"])).unwrap();
    for day in 2..=31 {
        let food = format!("Voedsel {}", day % 10);
        diary.save(with_foods(day, &[food.as_str()])).unwrap();
    }

    let foods = diary.frequent_foods();
    assert_eq!(foods.len(), 8);
    assert!(foods.iter().all(|(food, count)| food != "Oud" && *count == 3));
}

#[test]
fn biggest_problem_is_the_highest_weekly_average() {
    let diary = SymptomDiary::new(MemoryStore::new());
    assert_eq!(diary.biggest_problem(), None);

    diary.save(entry(1, 0)).unwrap();
    assert_eq!(diary.biggest_problem(), None);

    let mut bloated = entry(2, 2);
    bloated.symptoms.bloating = 4;
    diary.save(bloated).unwrap();
    assert_eq!(diary.biggest_problem(), Some((Symptom::Bloating, 2.0)));

    let mut tired = entry(3, 0);
    tired.symptoms.fatigue = 4;
    diary.save(tired).unwrap();
    // Bloating and fatigue both average 1.3; the later symptom wins.
    assert_eq!(diary.biggest_problem(), Some((Symptom::Fatigue, 1.3)));
}

/// Memory store whose reads fail with an I/O error while `failing` is set.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                path: PathBuf::from(key),
                source: std::io::Error::other("disk unavailable"),
            });
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.inner.put(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[test]
fn failed_read_never_overwrites_the_diary() {
    let store = FlakyStore::default();
    let diary = SymptomDiary::new(&store);
    let first = entry(1, 1);
    let id = first.id;
    diary.save(first).unwrap();
    diary.save(entry(2, 1)).unwrap();

    store.failing.store(true, Ordering::SeqCst);
    assert!(matches!(diary.save(entry(3, 1)), Err(StorageError::Io { .. })));
    assert!(matches!(diary.delete(id), Err(StorageError::Io { .. })));

    store.failing.store(false, Ordering::SeqCst);
    assert_eq!(diary.entries().len(), 2);
}
