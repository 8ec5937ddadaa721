use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// Per-condition scores of the general questionnaire, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreVector {
    pub ibs: u32,
    pub sibo: u32,
    pub celiac: u32,
    pub lactose: u32,
    pub ibd: u32,
    pub dyspepsia: u32,
    pub gastritis: u32,
}

impl ScoreVector {
    pub fn get(&self, condition: Condition) -> u32 {
        match condition {
            Condition::Ibs => self.ibs,
            Condition::Sibo => self.sibo,
            Condition::Celiac => self.celiac,
            Condition::Lactose => self.lactose,
            Condition::Ibd => self.ibd,
            Condition::Dyspepsia => self.dyspepsia,
            Condition::Gastritis => self.gastritis,
        }
    }

    pub fn with(mut self, condition: Condition, score: u32) -> Self {
        *self.slot(condition) = score;
        self
    }

    fn slot(&mut self, condition: Condition) -> &mut u32 {
        match condition {
            Condition::Ibs => &mut self.ibs,
            Condition::Sibo => &mut self.sibo,
            Condition::Celiac => &mut self.celiac,
            Condition::Lactose => &mut self.lactose,
            Condition::Ibd => &mut self.ibd,
            Condition::Dyspepsia => &mut self.dyspepsia,
            Condition::Gastritis => &mut self.gastritis,
        }
    }

    /// Scores in condition enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Condition, u32)> + '_ {
        Condition::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// The highest-scoring condition and its score. Only a strictly higher
    /// score displaces an earlier condition, so ties go to the first in
    /// enumeration order.
    pub fn top(&self) -> (Condition, u32) {
        self.iter()
            .fold((Condition::Ibs, self.ibs), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            })
    }
}

/// How a disease-specific instrument reports its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMode {
    /// Total as a percentage of the instrument's maximum achievable total.
    Percentage,
    /// Literal sum of the numeric value embedded in each option label,
    /// e.g. `"Vaak (3)"`.
    AbsoluteWithEmbeddedValue,
}

/// Score of a single disease-specific instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentScore {
    /// The reported score, compared against the instrument cutoff.
    pub score: u32,
    /// Upper end of the reported scale (100 for percentage instruments).
    pub max_score: u32,
    /// The score as a share of the instrument's maximum, for progress display.
    pub percentage: u32,
    pub mode: ScoringMode,
}
