use digestica_core::models::answer::{AnswerSet, AnswerValue};

use crate::error::InstrumentError;
use crate::question::{AnswerKind, Question};

/// In-memory answers of one questionnaire session.
///
/// Owns the mutation rules: single-select answers are replaced, multi-select
/// answers toggle, and a question's exclusive option never coexists with its
/// other options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: AnswerSet,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` as (part of) the answer to `question`.
    ///
    /// Rejects labels that are not among the question's options and leaves
    /// the store unchanged in that case.
    pub fn set_answer(&mut self, question: &Question, label: &str) -> Result<(), InstrumentError> {
        if !question.has_option(label) {
            return Err(InstrumentError::UnknownOption {
                question_id: question.id,
                label: label.to_string(),
            });
        }

        let value = match question.kind {
            AnswerKind::SingleSelect => AnswerValue::Single(label.to_string()),
            AnswerKind::MultiSelect => AnswerValue::Multi(self.toggled(question, label)),
        };
        tracing::debug!(question_id = question.id, label, "answer recorded");
        self.answers.insert(question.id, value);
        Ok(())
    }

    fn toggled(&self, question: &Question, label: &str) -> Vec<String> {
        let exclusive = question.exclusive_option.as_deref();
        if exclusive == Some(label) {
            return vec![label.to_string()];
        }

        let mut selected: Vec<String> = match self.answers.get(question.id) {
            Some(current) => current
                .labels()
                .iter()
                .filter(|l| Some(l.as_str()) != exclusive)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        if let Some(pos) = selected.iter().position(|l| l == label) {
            selected.remove(pos);
        } else {
            selected.push(label.to_string());
        }
        selected
    }

    /// The current answer, or `None` if the question was never answered.
    /// A multi-select answer whose options were all deselected is
    /// `Some` with an empty set.
    pub fn get_answer(&self, question_id: u32) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Fraction in `[0, 1]` of `total_questions` that have a non-empty answer.
    pub fn progress(&self, total_questions: usize) -> f64 {
        if total_questions == 0 {
            return 0.0;
        }
        let answered = self.answers.answered_count().min(total_questions);
        answered as f64 / total_questions as f64
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}
