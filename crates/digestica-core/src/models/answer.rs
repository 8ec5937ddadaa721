use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A user's answer to one question.
///
/// Serialized untagged so the persisted shape is a bare string for
/// single-select questions and an array of strings for multi-select ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Single(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// An empty string or an empty selection does not satisfy a question.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Single(label) => label.is_empty(),
            AnswerValue::Multi(labels) => labels.is_empty(),
        }
    }

    /// The selected option labels, in selection order.
    pub fn labels(&self) -> &[String] {
        match self {
            AnswerValue::Single(label) => std::slice::from_ref(label),
            AnswerValue::Multi(labels) => labels,
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().iter().any(|l| l == label)
    }
}

/// Answers accumulated over one questionnaire session, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<u32, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: u32) -> Option<&AnswerValue> {
        self.0.get(&question_id)
    }

    pub fn insert(&mut self, question_id: u32, value: AnswerValue) -> Option<AnswerValue> {
        self.0.insert(question_id, value)
    }

    pub fn remove(&mut self, question_id: u32) -> Option<AnswerValue> {
        self.0.remove(&question_id)
    }

    /// Whether `question_id` has a non-empty answer.
    pub fn is_answered(&self, question_id: u32) -> bool {
        self.get(question_id).is_some_and(|v| !v.is_empty())
    }

    /// Number of questions with a non-empty answer.
    pub fn answered_count(&self) -> usize {
        self.0.values().filter(|v| !v.is_empty()).count()
    }

    /// The single selected label, if the answer is a single-select value.
    pub fn single(&self, question_id: u32) -> Option<&str> {
        match self.get(question_id) {
            Some(AnswerValue::Single(label)) => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerValue)> {
        self.0.iter().map(|(id, v)| (*id, v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(u32, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
