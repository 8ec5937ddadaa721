use digestica_core::models::answer::{AnswerSet, AnswerValue};
use digestica_core::models::condition::Condition;
use digestica_core::models::result::{ResultRecord, Scores};
use digestica_core::models::score::ScoreVector;
use digestica_export::docx::generate_docx;
use digestica_export::error::ExportError;
use digestica_export::render::{render_default_report, render_report};
use digestica_export::styles::DocumentStyles;
use digestica_instruments::classify::{interpret_conditions, interpret_instrument};
use digestica_instruments::scoring::score_instrument;
use digestica_instruments::{Instrument, get_instrument};

fn ts() -> jiff::Timestamp {
    jiff::Timestamp::from_millisecond(1_717_000_654_321).unwrap()
}

fn general_record(scores: ScoreVector, answers: AnswerSet) -> ResultRecord {
    ResultRecord::new(
        ts(),
        answers,
        Scores::General { conditions: scores },
        interpret_conditions(&scores),
        None,
    )
}

fn lactose_record() -> ResultRecord {
    let instrument = get_instrument("lactose_intolerance").unwrap();
    let answers: AnswerSet = (1..=5)
        .map(|id| (id, AnswerValue::Single("Altijd (4)".to_string())))
        .collect();
    let score = score_instrument(instrument.as_ref(), &answers);
    ResultRecord::new(
        ts(),
        answers,
        Scores::Instrument {
            instrument_id: instrument.id().to_string(),
            instrument_name: instrument.name().to_string(),
            score,
        },
        interpret_instrument(instrument.as_ref(), &score),
        Some(instrument.evidence_note().to_string()),
    )
}

#[test]
fn default_report_renders_the_scores_matrix() {
    let scores = ScoreVector::default()
        .with(Condition::Ibd, 80)
        .with(Condition::Ibs, 35);
    let answers: AnswerSet = [
        (1, AnswerValue::Single("46-60".to_string())),
        (
            4,
            AnswerValue::Multi(vec!["Antibiotica".to_string(), "Andere medicijnen".to_string()]),
        ),
        (10, AnswerValue::Single("Vaak".to_string())),
    ]
    .into_iter()
    .collect();

    let report = render_default_report(&general_record(scores, answers)).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "# MEDISCH RAPPORT");
    assert!(lines.contains(&"Gegenereerd: 29-5-2024"));
    assert!(lines.contains(&"Ref: BD-654321"));
    assert!(lines.contains(&"- **Initialen:** Pt."));
    assert!(lines.contains(&"- **Leeftijd:** 46-60"));
    assert!(lines.contains(&"- **Geslacht:** Niet opgegeven"));
    assert!(lines.contains(&"- **Duur klachten:** Niet opgegeven"));
    assert!(lines.contains(&"| Aandoening | Score (%) | Waarschijnlijkheid | Klinische Relevantie |"));
    assert!(lines.contains(&"| **Inflammatory Bowel Disease** | 80% | Hoog | Endoscopie urgentie |"));
    assert!(lines.contains(&"| Irritable Bowel Syndrome | 35% | Matig | Differentiaal diagnose |"));
    assert!(lines.contains(&"| Gastritis/H. Pylori | 0% | Laag | Minder waarschijnlijk |"));
    assert!(lines.contains(&"## ALARMSYMPTOMEN (Red Flags)"));
    assert!(lines.contains(&"- Frequent bloed bij ontlasting"));
    assert!(lines.contains(&"- **Huidige medicatie:** Antibiotica, Andere medicijnen"));
    assert!(lines.contains(&"- **Familie anamnese:** Geen opgegeven"));
    assert!(lines.contains(&"3. Calprotectine (feces)"));
    assert!(!report.contains("Stress-relatie"));

    let table_rows = lines.iter().filter(|l| l.starts_with('|')).count();
    assert_eq!(table_rows, 2 + 7);
}

#[test]
fn quiet_report_omits_red_flags() {
    let report =
        render_default_report(&general_record(ScoreVector::default(), AnswerSet::new())).unwrap();
    assert!(!report.contains("ALARMSYMPTOMEN"));
    assert!(report.contains("2. Laboratorium: FBC, CRP, ESR, coeliakie serologie"));
    assert!(!report.lines().any(|l| l.starts_with("3. ")));
}

#[test]
fn instrument_report_shows_the_instrument_score() {
    let record = lactose_record();
    let report = render_default_report(&record).unwrap();

    assert!(report.contains("## Lactose Intolerance Symptom Scale"));
    assert!(report.contains("- **Score:** 20 / 20 (100%)"));
    assert!(report.contains("- **Validatie:** "));
    // Instrument answers never stand in for general-questionnaire fields.
    assert!(report.contains("- **Leeftijd:** Niet opgegeven"));
    assert!(!report.contains("DIAGNOSTISCHE SCORES MATRIX"));
    assert!(!report.contains("MEDICATIE ANAMNESE"));
}

#[test]
fn custom_templates_see_the_report_context() {
    let record = general_record(ScoreVector::default(), AnswerSet::new());
    let rendered = render_report(
        &record,
        "{{ reference }}: {{ findings.recommendations | length }} onderzoeken",
    )
    .unwrap();
    assert_eq!(rendered, "BD-654321: 2 onderzoeken");
}

#[test]
fn broken_template_is_a_parse_error() {
    let record = general_record(ScoreVector::default(), AnswerSet::new());
    let err = render_report(&record, "{% if %}").unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn rendered_report_packs_into_docx() {
    let scores = ScoreVector::default().with(Condition::Celiac, 64);
    let report = render_default_report(&general_record(scores, AnswerSet::new())).unwrap();

    let bytes = generate_docx(&report, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
