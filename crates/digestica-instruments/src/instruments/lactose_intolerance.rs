use std::sync::LazyLock;

use digestica_core::models::band::BandTexts;
use digestica_core::models::score::ScoringMode;

use crate::Instrument;
use crate::question::{Question, ScoringEntry, flat};

/// Lactose Intolerance Symptom Scale: five symptoms after dairy, each rated
/// 0–4. Reported as the absolute sum (0–20) against a cutoff of 6.5.
pub struct LactoseIntolerance;

const PROMPTS: [&str; 5] = [
    "Heeft u diarree na het consumeren van melk of zuivelproducten?",
    "Heeft u buikkrampen na het consumeren van zuivelproducten?",
    "Heeft u misselijkheid/braken na zuivelconsumptie?",
    "Hoort u duidelijke darmgeluiden na zuivelconsumptie?",
    "Heeft u winderigheid/gas na het eten van zuivelproducten?",
];

fn rating_options() -> Vec<(&'static str, ScoringEntry)> {
    vec![
        ("Nooit (0)", flat(0)),
        ("Zelden (1)", flat(1)),
        ("Soms (2)", flat(2)),
        ("Vaak (3)", flat(3)),
        ("Altijd (4)", flat(4)),
    ]
}

impl Instrument for LactoseIntolerance {
    fn id(&self) -> &str {
        "lactose_intolerance"
    }

    fn name(&self) -> &str {
        "Lactose Intolerance Symptom Scale"
    }

    fn description(&self) -> &str {
        "Gevalideerde 5-item vragenlijst voor Lactose-intolerantie"
    }

    fn evidence_note(&self) -> &str {
        "Cut-off 6.5: Sensitiviteit 75%, Specificiteit 67% (Dig Dis Sci 2008)"
    }

    fn cutoff(&self) -> f64 {
        6.5
    }

    fn scoring_mode(&self) -> ScoringMode {
        ScoringMode::AbsoluteWithEmbeddedValue
    }

    fn bands(&self) -> &BandTexts {
        static BANDS: LazyLock<BandTexts> = LazyLock::new(|| BandTexts {
            high: "Sterke indicatie Lactose-intolerantie (score >6.5)".to_string(),
            moderate: "Matige indicatie Lactose-intolerantie (score 4-6.5)".to_string(),
            low: "Lage indicatie Lactose-intolerantie (score <4)".to_string(),
        });
        &BANDS
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            PROMPTS
                .iter()
                .zip(1..)
                .map(|(prompt, id)| Question::single(id, prompt, rating_options()))
                .collect()
        });
        &QUESTIONS
    }
}
