use std::sync::LazyLock;

use digestica_core::models::band::BandTexts;
use digestica_core::models::score::ScoringMode;

use crate::Instrument;
use crate::question::{Question, flat};

/// Celiac Symptom Index (CSI).
/// Scores below 30 suggest remission, above 45 active disease.
pub struct CeliacCsi;

impl Instrument for CeliacCsi {
    fn id(&self) -> &str {
        "celiac_csi"
    }

    fn name(&self) -> &str {
        "Celiac Symptom Index (CSI)"
    }

    fn description(&self) -> &str {
        "Gevalideerde vragenlijst voor Coeliakie/Glutenintolerantie"
    }

    fn evidence_note(&self) -> &str {
        "CSI scores <30 = remissie, >45 = actieve ziekte (Clin Gastroenterol Hepatol 2009)"
    }

    fn cutoff(&self) -> f64 {
        45.0
    }

    fn scoring_mode(&self) -> ScoringMode {
        ScoringMode::Percentage
    }

    fn bands(&self) -> &BandTexts {
        static BANDS: LazyLock<BandTexts> = LazyLock::new(|| BandTexts {
            high: "Sterke indicatie Coeliakie (score >45)".to_string(),
            moderate: "Matige indicatie Coeliakie (score 30-45)".to_string(),
            low: "Lage indicatie Coeliakie (score <30)".to_string(),
        });
        &BANDS
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::single(
                    1,
                    "Heeft u chronische diarree (langer dan 4 weken)?",
                    vec![
                        ("Nee", flat(0)),
                        ("Zelden", flat(6)),
                        ("Soms", flat(12)),
                        ("Vaak", flat(18)),
                        ("Dagelijks", flat(25)),
                    ],
                ),
                Question::single(
                    2,
                    "Bent u ongewild afgevallen (>5kg) zonder dieet?",
                    vec![
                        ("Nee", flat(0)),
                        ("1-3kg", flat(5)),
                        ("3-5kg", flat(12)),
                        ("5-10kg", flat(20)),
                        ("Meer dan 10kg", flat(25)),
                    ],
                ),
                Question::single(
                    3,
                    "Heeft u chronische vermoeidheid of concentratieproblemen?",
                    vec![
                        ("Nee", flat(0)),
                        ("Licht", flat(4)),
                        ("Matig", flat(10)),
                        ("Ernstig", flat(16)),
                        ("Invaliderend", flat(20)),
                    ],
                ),
                Question::multi(
                    4,
                    "Heeft u familie met Coeliakie of auto-immuunziekten?",
                    vec![
                        ("Nee", flat(0)),
                        ("Coeliakie", flat(15)),
                        ("Type 1 diabetes", flat(8)),
                        ("Schildklierproblemen", flat(6)),
                        ("Andere auto-immuun", flat(6)),
                    ],
                ),
                Question::single(
                    5,
                    "Heeft u huidproblemen (eczeem, dermatitis herpetiformis)?",
                    vec![
                        ("Nee", flat(0)),
                        ("Lichte huidklachten", flat(3)),
                        ("Eczeem", flat(8)),
                        ("Chronische uitslag", flat(12)),
                        ("Dermatitis herpetiformis", flat(20)),
                    ],
                ),
                Question::multi(
                    6,
                    "Heeft u tekorten gehad aan voedingsstoffen (ijzer, B12, foliumzuur)?",
                    vec![
                        ("Nee", flat(0)),
                        ("IJzertekort", flat(8)),
                        ("B12 tekort", flat(10)),
                        ("Foliumzuur tekort", flat(12)),
                        ("Meerdere tekorten", flat(18)),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}
