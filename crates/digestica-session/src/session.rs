use digestica_core::models::answer::{AnswerSet, AnswerValue};
use digestica_core::models::result::{GENERAL_KIND, ResultRecord, Scores};
use digestica_instruments::answers::AnswerStore;
use digestica_instruments::classify::{interpret_conditions, interpret_instrument};
use digestica_instruments::error::InstrumentError;
use digestica_instruments::general::GeneralQuestionnaire;
use digestica_instruments::question::Question;
use digestica_instruments::scoring::{score_conditions, score_instrument};
use digestica_instruments::validation::{is_complete, validate};
use digestica_instruments::{Instrument, QuestionBank, get_instrument};
use digestica_storage::reports::ReportArchive;
use digestica_storage::store::KeyValueStore;

use crate::error::SessionError;
use crate::navigation::Screen;

enum Source {
    General(GeneralQuestionnaire),
    Instrument(Box<dyn Instrument>),
}

impl Source {
    fn pages(&self) -> Vec<&[Question]> {
        match self {
            Source::General(bank) => bank.pages(),
            Source::Instrument(instrument) => instrument.pages(),
        }
    }

    fn question(&self, id: u32) -> Option<&Question> {
        match self {
            Source::General(bank) => bank.question(id),
            Source::Instrument(instrument) => instrument.question(id),
        }
    }

    fn kind(&self) -> &str {
        match self {
            Source::General(_) => GENERAL_KIND,
            Source::Instrument(instrument) => instrument.id(),
        }
    }
}

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// On a section of the general questionnaire.
    InSection(usize),
    /// On a question of a disease-specific instrument.
    OnQuestion(usize),
    /// Finished. Holds the immutable result.
    Results(Box<ResultRecord>),
}

/// Outcome of [`Session::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the page with this index.
    Moved(usize),
    /// Required questions on the current page are unanswered; stayed put.
    Blocked(Vec<u32>),
    /// The last page passed validation and the result is ready.
    Completed,
}

/// One questionnaire session: a question bank, its answers and a position.
///
/// Each session owns its answers exclusively. Abandoning a session needs no
/// cleanup.
pub struct Session {
    source: Source,
    answers: AnswerStore,
    state: SessionState,
    validation_errors: Vec<u32>,
}

impl Session {
    /// A session over the general multi-condition questionnaire.
    pub fn general() -> Self {
        Self::from_source(Source::General(GeneralQuestionnaire))
    }

    /// A session over the registered instrument `id`.
    pub fn instrument(id: &str) -> Result<Self, SessionError> {
        let instrument = get_instrument(id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?;
        Ok(Self::with_instrument(instrument))
    }

    pub fn with_instrument(instrument: Box<dyn Instrument>) -> Self {
        Self::from_source(Source::Instrument(instrument))
    }

    fn from_source(source: Source) -> Self {
        let state = page_state(&source, 0);
        tracing::debug!(kind = source.kind(), "session started");
        Self {
            source,
            answers: AnswerStore::new(),
            state,
            validation_errors: Vec::new(),
        }
    }

    /// `belly_dr_questionnaire` or the instrument id.
    pub fn kind(&self) -> &str {
        self.source.kind()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Index of the current page, or `None` once results are available.
    pub fn page_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InSection(index) | SessionState::OnQuestion(index) => Some(index),
            SessionState::Results(_) => None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.source.pages().len()
    }

    /// Questions of the current page. Empty once results are available.
    pub fn current_page(&self) -> &[Question] {
        self.page_index()
            .and_then(|index| self.source.pages().get(index).copied())
            .unwrap_or_default()
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.source.question(id)
    }

    /// Select `label` for question `question_id`, following the answer
    /// store's replace/toggle rules. Clears any validation error shown for
    /// that question.
    ///
    /// Only questions on the current page can be answered, so pages that
    /// already passed validation stay valid.
    pub fn answer(&mut self, question_id: u32, label: &str) -> Result<(), SessionError> {
        let Some(index) = self.page_index() else {
            return Err(SessionError::AlreadyComplete);
        };
        if self.source.question(question_id).is_none() {
            return Err(InstrumentError::UnknownQuestion(question_id).into());
        }
        let question = self
            .source
            .pages()
            .get(index)
            .copied()
            .and_then(|page| page.iter().find(|q| q.id == question_id))
            .ok_or(SessionError::NotOnCurrentPage(question_id))?;
        self.answers.set_answer(question, label)?;
        self.validation_errors.retain(|id| *id != question_id);
        Ok(())
    }

    pub fn get_answer(&self, question_id: u32) -> Option<&AnswerValue> {
        self.answers.get_answer(question_id)
    }

    pub fn answers(&self) -> &AnswerSet {
        self.answers.answers()
    }

    /// Ids that blocked the last [`advance`](Self::advance) and are still
    /// unanswered, in page order.
    pub fn validation_errors(&self) -> &[u32] {
        &self.validation_errors
    }

    /// Fraction of all questions answered so far.
    pub fn progress(&self) -> f64 {
        let total = self.source.pages().iter().map(|page| page.len()).sum();
        self.answers.progress(total)
    }

    /// Whether every question on page `index` has an answer. Out-of-range
    /// pages are never complete.
    pub fn section_complete(&self, index: usize) -> bool {
        self.source
            .pages()
            .get(index)
            .is_some_and(|page| is_complete(page, self.answers.answers()))
    }

    /// Validate the current page and move forward, completing the session
    /// from the last page.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        self.advance_at(jiff::Timestamp::now())
    }

    /// [`advance`](Self::advance) with an explicit completion time.
    pub fn advance_at(&mut self, now: jiff::Timestamp) -> Result<Advance, SessionError> {
        let Some(index) = self.page_index() else {
            return Err(SessionError::AlreadyComplete);
        };

        let missing = validate(self.current_page(), self.answers.answers());
        if !missing.is_empty() {
            tracing::debug!(page = index, missing = missing.len(), "advance blocked");
            self.validation_errors = missing.clone();
            return Ok(Advance::Blocked(missing));
        }
        self.validation_errors.clear();

        if index + 1 < self.page_count() {
            self.state = page_state(&self.source, index + 1);
            tracing::debug!(page = index + 1, "advanced");
            return Ok(Advance::Moved(index + 1));
        }

        let record = self.build_result(now);
        tracing::info!(kind = record.kind(), id = %record.id, "session completed");
        self.state = SessionState::Results(Box::new(record));
        Ok(Advance::Completed)
    }

    /// Step back one page without validating. No-op on the first page.
    pub fn retreat(&mut self) -> Result<(), SessionError> {
        let Some(index) = self.page_index() else {
            return Err(SessionError::AlreadyComplete);
        };
        if index > 0 {
            self.state = page_state(&self.source, index - 1);
            self.validation_errors.clear();
            tracing::debug!(page = index - 1, "retreated");
        }
        Ok(())
    }

    /// Clear all answers and results and return to the first page.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.validation_errors.clear();
        self.state = page_state(&self.source, 0);
        tracing::debug!(kind = self.kind(), "session restarted");
    }

    /// The finished result, once the session has completed.
    pub fn results(&self) -> Option<&ResultRecord> {
        match &self.state {
            SessionState::Results(record) => Some(record),
            _ => None,
        }
    }

    /// Hand the finished result to the report archive, then ask the host to
    /// show the reports screen.
    pub fn save_result<S: KeyValueStore>(
        &self,
        archive: &ReportArchive<S>,
        navigate: impl FnOnce(Screen),
    ) -> Result<(), SessionError> {
        let record = self.results().ok_or(SessionError::NotComplete)?;
        archive.save(record)?;
        navigate(Screen::Reports);
        Ok(())
    }

    fn build_result(&self, now: jiff::Timestamp) -> ResultRecord {
        let answers = self.answers.answers().clone();
        match &self.source {
            Source::General(bank) => {
                let conditions = score_conditions(bank, &answers);
                let interpretation = interpret_conditions(&conditions);
                ResultRecord::new(
                    now,
                    answers,
                    Scores::General { conditions },
                    interpretation,
                    None,
                )
            }
            Source::Instrument(instrument) => {
                let instrument = instrument.as_ref();
                let score = score_instrument(instrument, &answers);
                let interpretation = interpret_instrument(instrument, &score);
                ResultRecord::new(
                    now,
                    answers,
                    Scores::Instrument {
                        instrument_id: instrument.id().to_string(),
                        instrument_name: instrument.name().to_string(),
                        score,
                    },
                    interpretation,
                    Some(instrument.evidence_note().to_string()),
                )
            }
        }
    }
}

fn page_state(source: &Source, index: usize) -> SessionState {
    match source {
        Source::General(_) => SessionState::InSection(index),
        Source::Instrument(_) => SessionState::OnQuestion(index),
    }
}
