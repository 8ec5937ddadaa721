use digestica_core::models::band::{Band, Likelihood};
use digestica_core::models::condition::Condition;
use digestica_core::models::result::{ConditionLevel, Interpretation};
use digestica_core::models::score::{InstrumentScore, ScoreVector};

use crate::Instrument;

/// Fraction of the cutoff at which the `moderate` band starts.
pub const MODERATE_FRACTION: f64 = 0.6;

/// Band of `score` relative to an instrument cutoff `C`:
/// `>= C` is high, `>= 0.6 C` moderate, anything lower is low.
pub fn classify(score: f64, cutoff: f64) -> Band {
    if score >= cutoff {
        Band::High
    } else if score >= cutoff * MODERATE_FRACTION {
        Band::Moderate
    } else {
        Band::Low
    }
}

/// The highest-scoring condition. Ties go to the condition that comes first
/// in enumeration order.
pub fn top_condition(scores: &ScoreVector) -> Condition {
    scores.top().0
}

/// Every condition with its score and likelihood level, in enumeration order.
pub fn condition_levels(scores: &ScoreVector) -> Vec<ConditionLevel> {
    scores
        .iter()
        .map(|(condition, score)| ConditionLevel {
            condition,
            score,
            likelihood: Likelihood::from_score(score),
        })
        .collect()
}

pub fn interpret_conditions(scores: &ScoreVector) -> Interpretation {
    Interpretation::General {
        top_condition: top_condition(scores),
        levels: condition_levels(scores),
    }
}

pub fn interpret_instrument<I: Instrument + ?Sized>(
    instrument: &I,
    score: &InstrumentScore,
) -> Interpretation {
    let band = classify(f64::from(score.score), instrument.cutoff());
    Interpretation::Instrument {
        band,
        text: instrument.bands().text(band).to_string(),
    }
}
