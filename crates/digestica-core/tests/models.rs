use digestica_core::error::CoreError;
use digestica_core::models::answer::{AnswerSet, AnswerValue};
use digestica_core::models::band::Likelihood;
use digestica_core::models::condition::Condition;
use digestica_core::models::diary::{DiaryEntry, Symptom};
use digestica_core::models::result::reference_id;
use digestica_core::models::score::ScoreVector;

fn date(y: i16, m: i8, d: i8) -> jiff::civil::Date {
    jiff::civil::date(y, m, d)
}

#[test]
fn condition_tags_resolve_in_enumeration_order() {
    let tags: Vec<_> = Condition::ALL.iter().map(|c| c.tag()).collect();
    assert_eq!(
        tags,
        ["ibs", "sibo", "celiac", "lactose", "ibd", "dyspepsia", "gastritis"]
    );
    assert_eq!(Condition::from_tag("celiac"), Some(Condition::Celiac));
    assert_eq!(Condition::from_tag("gerd"), None);
    assert!(matches!(
        "gerd".parse::<Condition>(),
        Err(CoreError::UnknownCondition(tag)) if tag == "gerd"
    ));
}

#[test]
fn answer_values_serialize_as_string_or_array() {
    let answers: AnswerSet = [
        (1, AnswerValue::Single("31-45".to_string())),
        (3, AnswerValue::Multi(vec!["Nee".to_string()])),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_string(&answers).unwrap();
    assert_eq!(json, r#"{"1":"31-45","3":["Nee"]}"#);

    let back: AnswerSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, answers);
}

#[test]
fn empty_answers_do_not_count_as_answered() {
    let mut answers = AnswerSet::new();
    answers.insert(1, AnswerValue::Single(String::new()));
    answers.insert(2, AnswerValue::Multi(Vec::new()));
    answers.insert(3, AnswerValue::Single("Nee".to_string()));

    assert!(!answers.is_answered(1));
    assert!(!answers.is_answered(2));
    assert!(answers.is_answered(3));
    assert!(!answers.is_answered(4));
    assert_eq!(answers.answered_count(), 1);
}

#[test]
fn likelihood_levels_follow_fixed_thresholds() {
    assert_eq!(Likelihood::from_score(0), Likelihood::Laag);
    assert_eq!(Likelihood::from_score(29), Likelihood::Laag);
    assert_eq!(Likelihood::from_score(30), Likelihood::Matig);
    assert_eq!(Likelihood::from_score(50), Likelihood::MatigHoog);
    assert_eq!(Likelihood::from_score(69), Likelihood::MatigHoog);
    assert_eq!(Likelihood::from_score(70), Likelihood::Hoog);
    assert_eq!(Likelihood::from_score(100).label(), "Hoog");
}

#[test]
fn score_vector_iterates_in_condition_order() {
    let scores = ScoreVector::default()
        .with(Condition::Gastritis, 12)
        .with(Condition::Ibs, 40);
    let collected: Vec<_> = scores.iter().collect();
    assert_eq!(collected.first(), Some(&(Condition::Ibs, 40)));
    assert_eq!(collected.last(), Some(&(Condition::Gastritis, 12)));
    assert_eq!(scores.get(Condition::Sibo), 0);
}

#[test]
fn reference_id_uses_last_six_millisecond_digits() {
    let ts = jiff::Timestamp::from_millisecond(1_700_000_123_456).unwrap();
    assert_eq!(reference_id(ts), "BD-123456");

    let ts = jiff::Timestamp::from_millisecond(1_700_000_000_042).unwrap();
    assert_eq!(reference_id(ts), "BD-000042");
}

#[test]
fn diary_entry_defaults_are_valid() {
    let entry = DiaryEntry::new(date(2025, 3, 14), jiff::Timestamp::UNIX_EPOCH);
    assert!(entry.validate().is_ok());
    assert_eq!(entry.stool_type, 4);
    assert_eq!(entry.symptoms.mean(), 0.0);
}

#[test]
fn diary_entry_rejects_out_of_range_values() {
    let mut entry = DiaryEntry::new(date(2025, 3, 14), jiff::Timestamp::UNIX_EPOCH);
    entry.symptoms.set(Symptom::Nausea, 6);
    assert!(matches!(
        entry.validate(),
        Err(CoreError::OutOfRange { field: "symptom rating", .. })
    ));

    let mut entry = DiaryEntry::new(date(2025, 3, 14), jiff::Timestamp::UNIX_EPOCH);
    entry.stool_type = 0;
    assert!(entry.validate().is_err());

    let mut entry = DiaryEntry::new(date(2025, 3, 14), jiff::Timestamp::UNIX_EPOCH);
    entry.sleep = 7.25;
    assert!(matches!(
        entry.validate(),
        Err(CoreError::InvalidValue { field: "sleep", .. })
    ));
}

#[test]
fn foods_are_trimmed_and_deduplicated() {
    let mut entry = DiaryEntry::new(date(2025, 3, 14), jiff::Timestamp::UNIX_EPOCH);
    assert!(entry.add_food("  kaas "));
    assert!(!entry.add_food("kaas"));
    assert!(!entry.add_food("   "));
    assert!(entry.add_food("brood"));
    assert_eq!(entry.foods, ["kaas", "brood"]);

    assert_eq!(entry.remove_food(0).as_deref(), Some("kaas"));
    assert_eq!(entry.remove_food(5), None);
    assert_eq!(entry.foods, ["brood"]);
}

#[test]
fn symptom_ratings_use_browser_field_names() {
    let mut entry = DiaryEntry::new(date(2025, 3, 14), jiff::Timestamp::UNIX_EPOCH);
    entry.symptoms.set(Symptom::AbdominalPain, 3);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["symptoms"]["abdominalpain"], 3);
    assert_eq!(json["stoolType"], 4);
}
