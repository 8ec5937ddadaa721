use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown question: {0}")]
    UnknownQuestion(u32),

    #[error("'{label}' is not an option of question {question_id}")]
    UnknownOption { question_id: u32, label: String },
}
