use digestica_core::models::answer::AnswerSet;

use crate::question::Question;

/// Ids of the required questions in `questions` that have no answer, in
/// declaration order. A missing key, an empty string and an empty selection
/// all count as unanswered. Empty iff every required question is satisfied.
pub fn validate(questions: &[Question], answers: &AnswerSet) -> Vec<u32> {
    questions
        .iter()
        .filter(|q| q.required && !answers.is_answered(q.id))
        .map(|q| q.id)
        .collect()
}

/// Whether every question in `questions`, required or not, has an answer.
pub fn is_complete(questions: &[Question], answers: &AnswerSet) -> bool {
    questions.iter().all(|q| answers.is_answered(q.id))
}
