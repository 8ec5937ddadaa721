//! digestica-session
//!
//! The questionnaire session controller: page navigation with a validation
//! gate, scoring on completion, and hand-off of the finished result.

pub mod error;
pub mod navigation;
pub mod session;

pub use navigation::Screen;
pub use session::{Advance, Session, SessionState};
