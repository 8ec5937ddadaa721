use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerSet;
use super::band::{Band, Likelihood};
use super::condition::Condition;
use super::patient::PatientData;
use super::score::{InstrumentScore, ScoreVector};

/// Prefix of the human-readable reference id given to every result.
pub const REFERENCE_PREFIX: &str = "BD-";

/// Record kind of a general-questionnaire result.
pub const GENERAL_KIND: &str = "belly_dr_questionnaire";

/// Scores of one completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Scores {
    General {
        conditions: ScoreVector,
    },
    Instrument {
        instrument_id: String,
        instrument_name: String,
        score: InstrumentScore,
    },
}

/// A condition's score together with its likelihood level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionLevel {
    pub condition: Condition,
    pub score: u32,
    pub likelihood: Likelihood,
}

/// Classifier output for a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Interpretation {
    General {
        top_condition: Condition,
        levels: Vec<ConditionLevel>,
    },
    Instrument {
        band: Band,
        text: String,
    },
}

/// Immutable outcome of a completed questionnaire session, handed to the
/// report and persistence collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultRecord {
    /// Reference id, e.g. `BD-482913`.
    pub id: String,
    pub date: jiff::civil::Date,
    pub timestamp: jiff::Timestamp,
    pub answers: AnswerSet,
    pub scores: Scores,
    pub interpretation: Interpretation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_data: Option<PatientData>,
}

impl ResultRecord {
    /// Assemble a record created at `timestamp`. The id and display date are
    /// derived from the timestamp; the patient reference number defaults to
    /// the record id.
    pub fn new(
        timestamp: jiff::Timestamp,
        answers: AnswerSet,
        scores: Scores,
        interpretation: Interpretation,
        evidence_note: Option<String>,
    ) -> Self {
        let id = reference_id(timestamp);
        let patient_data = PatientData {
            initials: Some("Pt.".to_string()),
            reference_number: Some(id.clone()),
            ..PatientData::default()
        };
        Self {
            id,
            date: timestamp.to_zoned(jiff::tz::TimeZone::UTC).date(),
            timestamp,
            answers,
            scores,
            interpretation,
            evidence_note,
            patient_data: Some(patient_data),
        }
    }

    pub fn with_patient_data(mut self, patient_data: PatientData) -> Self {
        self.patient_data = Some(patient_data);
        self
    }

    /// `belly_dr_questionnaire` for general results, the instrument id otherwise.
    pub fn kind(&self) -> &str {
        match &self.scores {
            Scores::General { .. } => GENERAL_KIND,
            Scores::Instrument { instrument_id, .. } => instrument_id,
        }
    }

    /// The general-questionnaire score vector, if this is a general result.
    pub fn condition_scores(&self) -> Option<&ScoreVector> {
        match &self.scores {
            Scores::General { conditions } => Some(conditions),
            Scores::Instrument { .. } => None,
        }
    }
}

/// `BD-` followed by the last six digits of the creation time in milliseconds.
pub fn reference_id(timestamp: jiff::Timestamp) -> String {
    let millis = timestamp.as_millisecond().rem_euclid(1_000_000);
    format!("{REFERENCE_PREFIX}{millis:06}")
}
