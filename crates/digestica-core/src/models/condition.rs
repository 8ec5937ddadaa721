use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A gastrointestinal condition scored by the general questionnaire.
///
/// The declaration order is significant: it is the enumeration order used for
/// display and for breaking ties when ranking conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    /// Irritable bowel syndrome.
    Ibs,
    /// Small intestinal bacterial overgrowth.
    Sibo,
    Celiac,
    Lactose,
    /// Inflammatory bowel disease.
    Ibd,
    Dyspepsia,
    Gastritis,
}

impl Condition {
    /// All condition tags in enumeration order.
    pub const ALL: [Condition; 7] = [
        Condition::Ibs,
        Condition::Sibo,
        Condition::Celiac,
        Condition::Lactose,
        Condition::Ibd,
        Condition::Dyspepsia,
        Condition::Gastritis,
    ];

    /// The lowercase tag used in scoring tables and persisted score vectors.
    pub fn tag(self) -> &'static str {
        match self {
            Condition::Ibs => "ibs",
            Condition::Sibo => "sibo",
            Condition::Celiac => "celiac",
            Condition::Lactose => "lactose",
            Condition::Ibd => "ibd",
            Condition::Dyspepsia => "dyspepsia",
            Condition::Gastritis => "gastritis",
        }
    }

    /// Resolve a scoring-table tag. Unknown tags resolve to `None`.
    pub fn from_tag(tag: &str) -> Option<Condition> {
        Condition::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Full Dutch display name, as used in the results view and report matrix.
    pub fn display_name(self) -> &'static str {
        match self {
            Condition::Ibs => "Irritable Bowel Syndrome (IBS)",
            Condition::Sibo => "Small Intestinal Bacterial Overgrowth (SIBO)",
            Condition::Celiac => "Coeliakie (Glutenintolerantie)",
            Condition::Lactose => "Lactose Intolerantie",
            Condition::Ibd => "Inflammatory Bowel Disease (IBD)",
            Condition::Dyspepsia => "Functionele Dyspepsie",
            Condition::Gastritis => "Gastritis/H. Pylori",
        }
    }

    /// Abbreviated name for saved-report listings.
    pub fn short_name(self) -> &'static str {
        match self {
            Condition::Ibs => "IBS",
            Condition::Sibo => "SIBO",
            Condition::Celiac => "Coeliakie",
            Condition::Lactose => "Lactose Intol.",
            Condition::Ibd => "IBD",
            Condition::Dyspepsia => "Dyspepsie",
            Condition::Gastritis => "Gastritis",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::from_tag(s).ok_or_else(|| CoreError::UnknownCondition(s.to_string()))
    }
}
