use digestica_core::models::answer::{AnswerSet, AnswerValue};
use digestica_core::models::band::Band;
use digestica_core::models::condition::Condition;
use digestica_core::models::result::Interpretation;
use digestica_core::models::score::ScoringMode;
use digestica_instruments::classify::interpret_instrument;
use digestica_instruments::general::GeneralQuestionnaire;
use digestica_instruments::instruments::celiac_csi::CeliacCsi;
use digestica_instruments::instruments::ibs_rome_iv::IbsRomeIv;
use digestica_instruments::instruments::lactose_intolerance::LactoseIntolerance;
use digestica_instruments::scoring::{embedded_value, raw_totals, score_conditions, score_instrument};
use digestica_instruments::{Instrument, QuestionBank, get_instrument};

fn single(id: u32, label: &str) -> (u32, AnswerValue) {
    (id, AnswerValue::Single(label.to_string()))
}

fn multi(id: u32, labels: &[&str]) -> (u32, AnswerValue) {
    (
        id,
        AnswerValue::Multi(labels.iter().map(|l| l.to_string()).collect()),
    )
}

#[test]
fn ibs_fully_symptomatic_scores_hundred_and_high() {
    let answers: AnswerSet = [
        single(1, "Ja, dagelijks"),
        single(2, "Altijd"),
        single(3, "Altijd"),
        single(4, "Altijd"),
        single(5, "Meer dan 2 jaar"),
    ]
    .into_iter()
    .collect();

    assert_eq!(raw_totals(IbsRomeIv.questions(), &answers), (100.0, 100.0));

    let score = score_instrument(&IbsRomeIv, &answers);
    assert_eq!(score.score, 100);
    assert_eq!(score.max_score, 100);
    assert_eq!(score.mode, ScoringMode::Percentage);

    match interpret_instrument(&IbsRomeIv, &score) {
        Interpretation::Instrument { band, text } => {
            assert_eq!(band, Band::High);
            assert_eq!(text, "Hoge waarschijnlijkheid IBS (>70%)");
        }
        other => panic!("expected instrument interpretation, got {other:?}"),
    }
}

#[test]
fn lactose_reports_embedded_sum_on_absolute_scale() {
    let answers: AnswerSet = (1..=5).map(|id| single(id, "Altijd (4)")).collect();

    let score = score_instrument(&LactoseIntolerance, &answers);
    assert_eq!(score.score, 20);
    assert_eq!(score.max_score, 20);
    assert_eq!(score.percentage, 100);
    assert_eq!(score.mode, ScoringMode::AbsoluteWithEmbeddedValue);

    let Interpretation::Instrument { band, .. } = interpret_instrument(&LactoseIntolerance, &score)
    else {
        panic!("expected instrument interpretation");
    };
    assert_eq!(band, Band::High);
}

#[test]
fn lactose_bands_follow_absolute_cutoff() {
    let cases = [
        ("Nooit (0)", 0, Band::Low),
        ("Zelden (1)", 5, Band::Moderate),
        ("Soms (2)", 10, Band::High),
    ];
    for (label, expected, expected_band) in cases {
        let answers: AnswerSet = (1..=5).map(|id| single(id, label)).collect();
        let score = score_instrument(&LactoseIntolerance, &answers);
        assert_eq!(score.score, expected, "{label}");
        let Interpretation::Instrument { band, .. } =
            interpret_instrument(&LactoseIntolerance, &score)
        else {
            panic!("expected instrument interpretation");
        };
        assert_eq!(band, expected_band, "{label}");
    }
}

#[test]
fn unanswered_instrument_scores_zero() {
    let score = score_instrument(&IbsRomeIv, &AnswerSet::new());
    assert_eq!(score.score, 0);
    assert_eq!(score.percentage, 0);
}

#[test]
fn multi_select_sums_are_not_capped() {
    let answers: AnswerSet = [
        single(1, "Dagelijks"),
        single(2, "Meer dan 10kg"),
        single(3, "Invaliderend"),
        multi(4, &["Coeliakie", "Type 1 diabetes", "Schildklierproblemen", "Andere auto-immuun"]),
        single(5, "Dermatitis herpetiformis"),
        multi(6, &["IJzertekort", "B12 tekort", "Foliumzuur tekort", "Meerdere tekorten"]),
    ]
    .into_iter()
    .collect();

    let (total, max) = raw_totals(CeliacCsi.questions(), &answers);
    assert_eq!(total, 173.0);
    assert_eq!(max, 123.0);
    assert_eq!(score_instrument(&CeliacCsi, &answers).score, 141);
}

#[test]
fn answers_to_unknown_questions_contribute_nothing() {
    let answers: AnswerSet = [single(99, "Altijd"), single(1, "Nee")].into_iter().collect();
    assert_eq!(score_instrument(&IbsRomeIv, &answers).score, 0);
}

#[test]
fn empty_general_answers_score_zero_everywhere() {
    let scores = score_conditions(&GeneralQuestionnaire, &AnswerSet::new());
    assert!(scores.iter().all(|(_, score)| score == 0));
}

#[test]
fn general_scoring_splits_flat_points_and_scales() {
    let answers: AnswerSet = [
        // flat 2, inside the general symptom range
        single(1, "31-45"),
        single(6, "Bovenbuik midden"),
        // negative contribution clamps at zero
        single(30, "Geen verschil"),
        // flat 2, outside the general symptom range
        single(36, "Gemiddeld"),
    ]
    .into_iter()
    .collect();

    let scores = score_conditions(&GeneralQuestionnaire, &answers);
    assert_eq!(scores.ibs, 2);
    assert_eq!(scores.sibo, 1);
    assert_eq!(scores.dyspepsia, 6);
    assert_eq!(scores.gastritis, 6);
    assert_eq!(scores.lactose, 0);
    assert_eq!(scores.celiac, 0);
    assert_eq!(scores.ibd, 0);
}

#[test]
fn general_scores_saturate_at_hundred() {
    let answers: AnswerSet = [
        single(8, ">3x per dag"),
        single(9, "Waterig"),
        single(10, "Vaak"),
        single(13, ">10kg"),
        single(22, "Altijd"),
        single(26, "Constant uitgeput"),
        single(31, "Vaak"),
        single(32, "Altijd"),
        multi(33, &["Pijn bij ontlasting", "Zichtbare problemen", "Ernstige klachten"]),
        single(34, "Ernstige gewrichtspijn"),
        single(35, "Oogontstekingen"),
        single(39, "Dagelijkse roker"),
    ]
    .into_iter()
    .collect();

    assert_eq!(score_conditions(&GeneralQuestionnaire, &answers).get(Condition::Ibd), 100);
}

#[test]
fn instruments_score_through_their_question_bank() {
    let instrument = get_instrument("sibo_symptom").expect("registered");
    assert_eq!(instrument.total_questions(), 5);
    assert_eq!(instrument.pages().len(), 5);

    let answers: AnswerSet = [single(1, "Altijd"), multi(3, &["Darmoperatie"])].into_iter().collect();
    // 40 of 90
    assert_eq!(score_instrument(instrument.as_ref(), &answers).score, 44);
}

#[test]
fn general_bank_exposes_sections_as_pages() {
    let bank = GeneralQuestionnaire;
    let sizes: Vec<usize> = bank.pages().iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![5, 10, 10, 5, 9]);
    assert_eq!(bank.total_questions(), 39);
    assert!(bank.question(16).is_none());
    assert!(bank.scoring_table(44).is_some());
}

#[test]
fn every_scored_label_is_an_option() {
    let bank = GeneralQuestionnaire;
    let instruments = digestica_instruments::all_instruments();
    let pages = bank
        .pages()
        .into_iter()
        .chain(instruments.iter().flat_map(|i| i.pages()));
    for page in pages {
        for question in page {
            for label in question.scoring.keys() {
                assert!(question.has_option(label), "q{} {label}", question.id);
            }
        }
    }
}

#[test]
fn embedded_values_parse_trailing_parentheses() {
    assert_eq!(embedded_value("Vaak (3)"), Some(3));
    assert_eq!(embedded_value("Nooit (0)"), Some(0));
    assert_eq!(embedded_value("Vaak"), None);
    assert_eq!(embedded_value("Zelden (helder rood)"), None);
}
