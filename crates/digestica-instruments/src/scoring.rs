use digestica_core::models::answer::AnswerSet;
use digestica_core::models::condition::Condition;
use digestica_core::models::score::{InstrumentScore, ScoreVector, ScoringMode};

use crate::question::{Question, ScoringEntry};
use crate::{Instrument, QuestionBank};

/// Plain-number entries only count for general-questionnaire questions with
/// an id up to and including this one.
pub const GENERAL_SYMPTOM_MAX_ID: u32 = 20;

// Legacy split with no clinical derivation. Do not tune without product input.

/// Share of a plain-number entry credited to IBS.
pub const FLAT_IBS_WEIGHT: f64 = 0.5;

/// Share of a plain-number entry credited to SIBO.
pub const FLAT_SIBO_WEIGHT: f64 = 0.3;

/// Raw condition totals are authored on a half scale.
pub const CONDITION_SCALE: f64 = 2.0;

/// Upper bound of every condition score and of the percentage scale.
pub const MAX_PERCENT: u32 = 100;

/// Accumulate per-condition scores for the general questionnaire.
///
/// Total over any answer set: answers to unknown questions and unscored
/// options contribute nothing. Every component of the result is in
/// `[0, 100]`.
pub fn score_conditions<B: QuestionBank + ?Sized>(bank: &B, answers: &AnswerSet) -> ScoreVector {
    let mut raw = [0.0_f64; Condition::ALL.len()];

    for (question_id, answer) in answers.iter() {
        let Some(question) = bank.question(question_id) else {
            continue;
        };
        for label in answer.labels() {
            match question.entry(label) {
                Some(ScoringEntry::Flat(points)) => {
                    if question_id <= GENERAL_SYMPTOM_MAX_ID {
                        raw[Condition::Ibs as usize] += points * FLAT_IBS_WEIGHT;
                        raw[Condition::Sibo as usize] += points * FLAT_SIBO_WEIGHT;
                    }
                }
                Some(ScoringEntry::ByCondition(points)) => {
                    for (tag, p) in points {
                        if let Some(condition) = Condition::from_tag(tag) {
                            raw[condition as usize] += p;
                        }
                    }
                }
                None => {}
            }
        }
    }

    Condition::ALL
        .into_iter()
        .fold(ScoreVector::default(), |scores, condition| {
            scores.with(condition, scale_condition(raw[condition as usize]))
        })
}

fn scale_condition(raw: f64) -> u32 {
    (raw * CONDITION_SCALE)
        .round()
        .clamp(0.0, f64::from(MAX_PERCENT)) as u32
}

/// Score a disease-specific instrument in its own reporting mode.
pub fn score_instrument<I: Instrument + ?Sized>(
    instrument: &I,
    answers: &AnswerSet,
) -> InstrumentScore {
    match instrument.scoring_mode() {
        ScoringMode::Percentage => percentage_score(instrument.questions(), answers),
        ScoringMode::AbsoluteWithEmbeddedValue => embedded_score(instrument.questions(), answers),
    }
}

/// Raw total of the selected options across `questions`, and the maximum
/// achievable total (the best single option of every question).
pub fn raw_totals(questions: &[Question], answers: &AnswerSet) -> (f64, f64) {
    questions.iter().fold((0.0, 0.0), |(total, max), question| {
        let earned: f64 = answers
            .get(question.id)
            .map(|answer| {
                answer
                    .labels()
                    .iter()
                    .filter_map(|label| question.entry(label))
                    .map(ScoringEntry::total)
                    .sum()
            })
            .unwrap_or(0.0);
        (total + earned, max + question.max_points())
    })
}

fn percentage_score(questions: &[Question], answers: &AnswerSet) -> InstrumentScore {
    let (total, max) = raw_totals(questions, answers);
    let score = percent_of(total, max);
    InstrumentScore {
        score,
        max_score: MAX_PERCENT,
        percentage: score,
        mode: ScoringMode::Percentage,
    }
}

fn embedded_score(questions: &[Question], answers: &AnswerSet) -> InstrumentScore {
    let (score, max) = questions.iter().fold((0, 0), |(score, max), question| {
        let earned: u32 = answers
            .get(question.id)
            .map(|answer| answer.labels().iter().filter_map(|l| embedded_value(l)).sum())
            .unwrap_or(0);
        let best = question
            .options
            .iter()
            .filter_map(|l| embedded_value(l))
            .max()
            .unwrap_or(0);
        (score + earned, max + best)
    });
    InstrumentScore {
        score,
        max_score: max,
        percentage: percent_of(f64::from(score), f64::from(max)),
        mode: ScoringMode::AbsoluteWithEmbeddedValue,
    }
}

/// `round(100 × total / max)`, or 0 when nothing is achievable. Not capped:
/// multi-select questions can sum past their best single option.
fn percent_of(total: f64, max: f64) -> u32 {
    if max <= 0.0 {
        return 0;
    }
    (100.0 * total / max).round().max(0.0) as u32
}

/// The numeric value a label carries in parentheses, e.g. `"Vaak (3)"` → 3.
pub fn embedded_value(label: &str) -> Option<u32> {
    let inner = label.trim_end().strip_suffix(')')?;
    let (_, digits) = inner.rsplit_once('(')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
