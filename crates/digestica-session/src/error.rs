use digestica_instruments::error::InstrumentError;
use digestica_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("session is complete; restart to change answers")]
    AlreadyComplete,

    #[error("question {0} is not on the current page")]
    NotOnCurrentPage(u32),

    #[error("session has no result yet")]
    NotComplete,

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
