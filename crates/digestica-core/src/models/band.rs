use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discrete likelihood band derived from a score and an instrument cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Band {
    High,
    Moderate,
    Low,
}

impl Band {
    pub fn as_str(self) -> &'static str {
        match self {
            Band::High => "high",
            Band::Moderate => "moderate",
            Band::Low => "low",
        }
    }
}

/// Display text for each band of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandTexts {
    pub high: String,
    pub moderate: String,
    pub low: String,
}

impl BandTexts {
    pub fn text(&self, band: Band) -> &str {
        match band {
            Band::High => &self.high,
            Band::Moderate => &self.moderate,
            Band::Low => &self.low,
        }
    }
}

/// Likelihood level of a single condition in the general questionnaire,
/// on the fixed 0–100 condition scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Likelihood {
    Laag,
    Matig,
    MatigHoog,
    Hoog,
}

impl Likelihood {
    pub fn from_score(score: u32) -> Self {
        match score {
            70.. => Likelihood::Hoog,
            50..=69 => Likelihood::MatigHoog,
            30..=49 => Likelihood::Matig,
            _ => Likelihood::Laag,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Likelihood::Hoog => "Hoog",
            Likelihood::MatigHoog => "Matig-Hoog",
            Likelihood::Matig => "Matig",
            Likelihood::Laag => "Laag",
        }
    }
}
