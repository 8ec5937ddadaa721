//! digestica-instruments
//!
//! Questionnaire definitions and the pure engine around them: answer store,
//! validation gate, scoring and classification. No I/O.

pub mod answers;
pub mod classify;
pub mod error;
pub mod general;
pub mod instruments;
pub mod question;
pub mod scoring;
pub mod validation;

use digestica_core::models::band::BandTexts;
use digestica_core::models::score::ScoringMode;

use question::{Question, ScoringTable};

/// Read-only access to a questionnaire's questions, grouped into the pages
/// a session walks through.
pub trait QuestionBank: Send + Sync {
    /// Pages in navigation order. Every question appears on exactly one page.
    fn pages(&self) -> Vec<&[Question]>;

    /// Look up a question by id. Unknown ids are `None`, never an error.
    fn question(&self, id: u32) -> Option<&Question> {
        self.pages()
            .into_iter()
            .flat_map(|page| page.iter())
            .find(|q| q.id == id)
    }

    fn scoring_table(&self, id: u32) -> Option<&ScoringTable> {
        self.question(id).map(|q| &q.scoring)
    }

    fn total_questions(&self) -> usize {
        self.pages().iter().map(|page| page.len()).sum()
    }
}

/// Trait implemented by each disease-specific questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "ibs_rome_iv", "lactose_intolerance").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "IBS Rome IV Criteria").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Provenance of the cutoff, shown next to the result.
    fn evidence_note(&self) -> &str;

    /// Threshold for the `high` band, on the instrument's own scale.
    fn cutoff(&self) -> f64;

    fn scoring_mode(&self) -> ScoringMode;

    fn bands(&self) -> &BandTexts;

    /// The instrument's questions. Flat, one per page.
    fn questions(&self) -> &[Question];
}

impl<T: Instrument + ?Sized> QuestionBank for T {
    fn pages(&self) -> Vec<&[Question]> {
        self.questions().iter().map(std::slice::from_ref).collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::ibs_rome_iv::IbsRomeIv),
        Box::new(instruments::sibo_symptom::SiboSymptom),
        Box::new(instruments::celiac_csi::CeliacCsi),
        Box::new(instruments::lactose_intolerance::LactoseIntolerance),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
