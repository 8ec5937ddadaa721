use serde::Serialize;

use digestica_core::models::answer::AnswerSet;
use digestica_core::models::band::Likelihood;
use digestica_core::models::condition::Condition;
use digestica_core::models::result::ResultRecord;
use digestica_core::models::score::ScoreVector;

const BLOOD_IN_STOOL: u32 = 10;
const WEIGHT_LOSS: u32 = 13;
const STRESS_RELATION: u32 = 15;
const FEVER: u32 = 31;

/// Recommended for every report.
pub const BASE_RECOMMENDATIONS: [&str; 2] = [
    "Volledige anamnese en lichamelijk onderzoek",
    "Laboratorium: FBC, CRP, ESR, coeliakie serologie",
];

/// One row of the diagnostic scores matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub condition: Condition,
    pub name: &'static str,
    pub score: u32,
    pub likelihood: &'static str,
    pub relevance: &'static str,
    /// Scores of 50 and up are emphasised in the report.
    pub highlighted: bool,
}

/// Everything the report derives from a result beyond the raw scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    pub red_flags: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    /// Empty for instrument results.
    pub matrix: Vec<MatrixRow>,
    pub stress_reported: bool,
}

impl Findings {
    pub fn from_record(record: &ResultRecord) -> Self {
        match record.condition_scores() {
            Some(scores) => Self::general(scores, &record.answers),
            None => Self {
                recommendations: BASE_RECOMMENDATIONS.to_vec(),
                ..Self::default()
            },
        }
    }

    /// Findings for a general-questionnaire result.
    pub fn general(scores: &ScoreVector, answers: &AnswerSet) -> Self {
        let matrix = scores
            .iter()
            .map(|(condition, score)| MatrixRow {
                condition,
                name: report_name(condition),
                score,
                likelihood: Likelihood::from_score(score).label(),
                relevance: relevance(condition, score),
                highlighted: score >= 50,
            })
            .collect();

        Self {
            red_flags: red_flags(answers),
            recommendations: recommendations(scores),
            matrix,
            stress_reported: answers.single(STRESS_RELATION) == Some("Duidelijk erger bij stress"),
        }
    }

    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

/// Alarm symptoms that call for urgent evaluation, keyed on the exact
/// option selected.
pub fn red_flags(answers: &AnswerSet) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if matches!(answers.single(BLOOD_IN_STOOL), Some("Regelmatig" | "Vaak")) {
        flags.push("Frequent bloed bij ontlasting");
    }
    if answers.single(WEIGHT_LOSS) == Some(">10kg") {
        flags.push("Significant gewichtsverlies (>10kg)");
    }
    if answers.single(FEVER) == Some("Vaak") {
        flags.push("Koorts bij buikklachten");
    }
    flags
}

/// Follow-up investigations: the base set, plus condition-specific tests for
/// the top condition and for any condition over its threshold.
pub fn recommendations(scores: &ScoreVector) -> Vec<&'static str> {
    let (top, _) = scores.top();
    let indicated = |condition: Condition, threshold: u32| {
        top == condition || scores.get(condition) > threshold
    };

    let mut recs = BASE_RECOMMENDATIONS.to_vec();
    if indicated(Condition::Ibd, 50) {
        recs.extend(["Calprotectine (feces)", "Coloscopie met biopsie"]);
    }
    if indicated(Condition::Sibo, 60) {
        recs.extend(["H2/CH4 ademtest (SIBO)", "Glucose/lactulose tolerantie test"]);
    }
    if indicated(Condition::Celiac, 50) {
        recs.extend([
            "Anti-TTG IgA, anti-endomysium",
            "Totaal IgA",
            "Overweeg gastroscopie met duodenum biopsie",
        ]);
    }
    if indicated(Condition::Lactose, 60) {
        recs.extend([
            "Lactose tolerantie test",
            "Eliminatiedieet (2 weken lactosevrij)",
        ]);
    }
    recs
}

/// Clinical relevance column of the scores matrix.
pub fn relevance(condition: Condition, score: u32) -> &'static str {
    match score {
        60.. => match condition {
            Condition::Ibs => "Rome IV criteria overwegen",
            Condition::Sibo => "Ademtest indicatie",
            Condition::Celiac => "Serologie + biopsie",
            Condition::Lactose => "Eliminatie test",
            Condition::Ibd => "Endoscopie urgentie",
            Condition::Dyspepsia => "H. pylori test + PPI trial",
            Condition::Gastritis => "Endoscopie overwegen",
        },
        30..=59 => "Differentiaal diagnose",
        _ => "Minder waarschijnlijk",
    }
}

/// Condition name as printed in the scores matrix.
pub fn report_name(condition: Condition) -> &'static str {
    match condition {
        Condition::Ibs => "Irritable Bowel Syndrome",
        Condition::Sibo => "Small Intestinal Bacterial Overgrowth",
        Condition::Celiac => "Coeliakie",
        Condition::Lactose => "Lactose Intolerantie",
        Condition::Ibd => "Inflammatory Bowel Disease",
        Condition::Dyspepsia => "Functionele Dyspepsie",
        Condition::Gastritis => "Gastritis/H. Pylori",
    }
}
