use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Screens of the surrounding shell. The engine never navigates itself; it
/// hands one of these to the host's navigation callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Screen {
    Home,
    Questionnaire,
    SpecificQuestionnaires,
    Reports,
    Diary,
    FodmapGuide,
    Information,
}
