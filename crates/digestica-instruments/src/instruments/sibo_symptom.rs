use std::sync::LazyLock;

use digestica_core::models::band::BandTexts;
use digestica_core::models::score::ScoringMode;

use crate::Instrument;
use crate::question::{Question, flat};

/// SIBO symptom assessment. Post-prandial bloating and gas, plus the usual
/// risk factors: abdominal surgery, long-term PPI use and slow transit.
pub struct SiboSymptom;

impl Instrument for SiboSymptom {
    fn id(&self) -> &str {
        "sibo_symptom"
    }

    fn name(&self) -> &str {
        "SIBO Symptom Assessment"
    }

    fn description(&self) -> &str {
        "Gevalideerde vragenlijst voor Small Intestinal Bacterial Overgrowth"
    }

    fn evidence_note(&self) -> &str {
        "Gebaseerd op breath test criteria en klinische studies (Am J Gastroenterol 2020)"
    }

    fn cutoff(&self) -> f64 {
        65.0
    }

    fn scoring_mode(&self) -> ScoringMode {
        ScoringMode::Percentage
    }

    fn bands(&self) -> &BandTexts {
        static BANDS: LazyLock<BandTexts> = LazyLock::new(|| BandTexts {
            high: "Sterke indicatie voor SIBO (>65%)".to_string(),
            moderate: "Matige indicatie voor SIBO (35-65%)".to_string(),
            low: "Lage indicatie voor SIBO (<35%)".to_string(),
        });
        &BANDS
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::single(
                    1,
                    "Ervaart u extreem opgeblazen gevoel 1-3 uur na het eten?",
                    vec![
                        ("Nooit", flat(0)),
                        ("Zelden", flat(5)),
                        ("Soms", flat(12)),
                        ("Vaak", flat(20)),
                        ("Altijd", flat(25)),
                    ],
                ),
                Question::single(
                    2,
                    "Heeft u excessive gas/winderigheid, vooral na koolhydraatrijke maaltijden?",
                    vec![
                        ("Nooit", flat(0)),
                        ("Zelden", flat(4)),
                        ("Soms", flat(10)),
                        ("Vaak", flat(16)),
                        ("Altijd", flat(20)),
                    ],
                ),
                Question::multi(
                    3,
                    "Heeft u ooit buikoperaties gehad?",
                    vec![
                        ("Nee", flat(0)),
                        ("Appendectomie", flat(8)),
                        ("Galblaas operatie", flat(8)),
                        ("Darmoperatie", flat(15)),
                        ("Maagoperatie", flat(12)),
                    ],
                ),
                Question::single(
                    4,
                    "Gebruikt u regelmatig maagzuurremmers (PPI's zoals omeprazol)?",
                    vec![
                        ("Nee", flat(0)),
                        ("Minder dan 3 maanden", flat(3)),
                        ("3-12 maanden", flat(8)),
                        ("1-3 jaar", flat(12)),
                        ("Meer dan 3 jaar", flat(15)),
                    ],
                ),
                Question::single(
                    5,
                    "Heeft u constipatie of trage darmpassage?",
                    vec![
                        ("Nee", flat(0)),
                        ("Zelden", flat(3)),
                        ("Soms", flat(8)),
                        ("Vaak", flat(12)),
                        ("Chronisch", flat(15)),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}
