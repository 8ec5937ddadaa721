use std::sync::LazyLock;

use digestica_core::models::band::BandTexts;
use digestica_core::models::score::ScoringMode;

use crate::Instrument;
use crate::question::{Question, ScoringEntry, flat};

/// IBS Rome IV criteria: recurrent abdominal pain related to defecation and
/// to changes in stool frequency or form, with symptom onset long enough ago.
pub struct IbsRomeIv;

static BANDS: LazyLock<BandTexts> = LazyLock::new(|| BandTexts {
    high: "Hoge waarschijnlijkheid IBS (>70%)".to_string(),
    moderate: "Matige waarschijnlijkheid IBS (40-70%)".to_string(),
    low: "Lage waarschijnlijkheid IBS (<40%)".to_string(),
});

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    vec![
        Question::single(
            1,
            "Heeft u terugkerende buikpijn gemiddeld minstens 1 dag per week in de afgelopen 3 maanden?",
            vec![
                ("Nee", flat(0)),
                ("Ja, minder dan 1 dag/week", flat(5)),
                ("Ja, 1-2 dagen/week", flat(15)),
                ("Ja, 3-4 dagen/week", flat(25)),
                ("Ja, dagelijks", flat(30)),
            ],
        ),
        Question::single(
            2,
            "Is uw buikpijn gerelateerd aan defecatie (ontlasting)?",
            vec![
                ("Nee", flat(0)),
                ("Soms", flat(5)),
                ("Vaak", flat(15)),
                ("Altijd", flat(20)),
            ],
        ),
        Question::single(
            3,
            "Is uw buikpijn geassocieerd met een verandering in de frequentie van uw ontlasting?",
            frequency_options(),
        ),
        Question::single(
            4,
            "Is uw buikpijn geassocieerd met een verandering in de vorm/consistentie van uw ontlasting?",
            frequency_options(),
        ),
        Question::single(
            5,
            "Hoe lang heeft u al deze klachten? (Rome IV vereist minimaal 6 maanden)",
            vec![
                ("Minder dan 3 maanden", flat(0)),
                ("3-6 maanden", flat(5)),
                ("6-12 maanden", flat(15)),
                ("1-2 jaar", flat(20)),
                ("Meer dan 2 jaar", flat(20)),
            ],
        ),
    ]
});

fn frequency_options() -> Vec<(&'static str, ScoringEntry)> {
    vec![
        ("Nee", flat(0)),
        ("Zelden", flat(3)),
        ("Soms", flat(8)),
        ("Vaak", flat(12)),
        ("Altijd", flat(15)),
    ]
}

impl Instrument for IbsRomeIv {
    fn id(&self) -> &str {
        "ibs_rome_iv"
    }

    fn name(&self) -> &str {
        "IBS Rome IV Criteria"
    }

    fn description(&self) -> &str {
        "Gevalideerde vragenlijst voor Irritable Bowel Syndrome"
    }

    fn evidence_note(&self) -> &str {
        "Sensitiviteit: 62.7%, Specificiteit: 97.1% (Gastroenterology 2016)"
    }

    fn cutoff(&self) -> f64 {
        70.0
    }

    fn scoring_mode(&self) -> ScoringMode {
        ScoringMode::Percentage
    }

    fn bands(&self) -> &BandTexts {
        &BANDS
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }
}
