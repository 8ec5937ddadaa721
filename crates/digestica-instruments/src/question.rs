use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How many options a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerKind {
    /// Exactly one option.
    SingleSelect,
    /// Any set of options, toggled independently.
    MultiSelect,
}

/// Contribution of one selected option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ScoringEntry {
    /// Plain points. Disease instruments add these to their single total;
    /// the general questionnaire treats them as a generic severity indicator.
    Flat(f64),
    /// Points per condition tag. Tags outside the fixed condition set are
    /// ignored when scoring.
    ByCondition(BTreeMap<String, f64>),
}

impl ScoringEntry {
    /// Sum of all points this entry awards.
    pub fn total(&self) -> f64 {
        match self {
            ScoringEntry::Flat(points) => *points,
            ScoringEntry::ByCondition(points) => points.values().sum(),
        }
    }
}

/// Shorthand for a [`ScoringEntry::Flat`] entry.
pub fn flat(points: i32) -> ScoringEntry {
    ScoringEntry::Flat(f64::from(points))
}

/// Shorthand for a [`ScoringEntry::ByCondition`] entry.
pub fn by(points: &[(&str, i32)]) -> ScoringEntry {
    ScoringEntry::ByCondition(
        points
            .iter()
            .map(|(tag, p)| ((*tag).to_string(), f64::from(*p)))
            .collect(),
    )
}

/// Option label → contribution. Options without an entry contribute nothing.
pub type ScoringTable = BTreeMap<String, ScoringEntry>;

/// A single question with its answer domain and scoring table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub kind: AnswerKind,
    /// Option labels in display order.
    pub options: Vec<String>,
    pub required: bool,
    pub scoring: ScoringTable,
    /// A "none of the above" option that is mutually exclusive with every
    /// other option of a multi-select question.
    pub exclusive_option: Option<String>,
}

impl Question {
    /// A required single-select question. Options are displayed in the
    /// order given and each is scored with its paired entry.
    pub fn single(id: u32, prompt: &str, options: Vec<(&str, ScoringEntry)>) -> Self {
        Self::build(id, prompt, AnswerKind::SingleSelect, options)
    }

    /// A required multi-select question.
    pub fn multi(id: u32, prompt: &str, options: Vec<(&str, ScoringEntry)>) -> Self {
        Self::build(id, prompt, AnswerKind::MultiSelect, options)
    }

    fn build(
        id: u32,
        prompt: &str,
        kind: AnswerKind,
        options: Vec<(&str, ScoringEntry)>,
    ) -> Self {
        let labels = options.iter().map(|(label, _)| (*label).to_string()).collect();
        let scoring = options
            .into_iter()
            .map(|(label, entry)| (label.to_string(), entry))
            .collect();
        Self {
            id,
            prompt: prompt.to_string(),
            kind,
            options: labels,
            required: true,
            scoring,
            exclusive_option: None,
        }
    }

    /// Mark `label` as the exclusive "none" option. Ignored unless it is one
    /// of this question's options.
    pub fn with_exclusive_option(mut self, label: &str) -> Self {
        if self.has_option(label) {
            self.exclusive_option = Some(label.to_string());
        }
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    /// Scoring entry for `label`, if the option is scored.
    pub fn entry(&self, label: &str) -> Option<&ScoringEntry> {
        self.scoring.get(label)
    }

    /// The highest total any single option awards; 0 for an unscored question.
    pub fn max_points(&self) -> f64 {
        self.scoring
            .values()
            .map(ScoringEntry::total)
            .fold(0.0, f64::max)
    }
}
