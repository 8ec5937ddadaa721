use serde::Serialize;
use tera::{Context, Tera};

use digestica_core::models::answer::AnswerSet;
use digestica_core::models::result::{Interpretation, ResultRecord, Scores};

use crate::error::ExportError;
use crate::findings::Findings;

/// The built-in medical report, in the Markdown subset understood by
/// [`generate_docx`](crate::docx::generate_docx).
pub const DEFAULT_REPORT_TEMPLATE: &str = include_str!("../templates/medical_report.md");

const REPORT_TEMPLATE_NAME: &str = "medical_report.md";
const NOT_GIVEN: &str = "Niet opgegeven";
const NONE_GIVEN: &str = "Geen opgegeven";

#[derive(Debug, Serialize)]
struct ReportContext<'a> {
    generated: String,
    reference: Option<&'a str>,
    patient: PatientSection,
    complaint: ComplaintSection,
    medication: String,
    family_history: String,
    instrument: Option<InstrumentSection<'a>>,
    findings: Findings,
}

#[derive(Debug, Serialize)]
struct PatientSection {
    initials: String,
    age: String,
    gender: String,
    duration: String,
}

#[derive(Debug, Serialize)]
struct ComplaintSection {
    pain_location: String,
    pain_frequency: String,
    defecation: String,
    consistency: String,
}

#[derive(Debug, Serialize)]
struct InstrumentSection<'a> {
    name: &'a str,
    score: u32,
    max_score: u32,
    percentage: u32,
    text: &'a str,
    evidence_note: Option<&'a str>,
}

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// fields of `data` become the template context variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render `record` and its findings through `template`.
pub fn render_report(record: &ResultRecord, template: &str) -> Result<String, ExportError> {
    let context = report_context(record);
    let rendered = render_template(REPORT_TEMPLATE_NAME, template, &context)?;
    tracing::debug!(id = %record.id, kind = record.kind(), bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render `record` with [`DEFAULT_REPORT_TEMPLATE`].
pub fn render_default_report(record: &ResultRecord) -> Result<String, ExportError> {
    render_report(record, DEFAULT_REPORT_TEMPLATE)
}

fn report_context(record: &ResultRecord) -> ReportContext<'_> {
    // Question ids below refer to the general questionnaire.
    let answers = record.condition_scores().map(|_| &record.answers);
    let patient = record.patient_data.as_ref();
    let patient_field = |field: Option<&String>| {
        field
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| NOT_GIVEN.to_string())
    };

    let instrument = match (&record.scores, &record.interpretation) {
        (
            Scores::Instrument {
                instrument_name,
                score,
                ..
            },
            Interpretation::Instrument { text, .. },
        ) => Some(InstrumentSection {
            name: instrument_name,
            score: score.score,
            max_score: score.max_score,
            percentage: score.percentage,
            text,
            evidence_note: record.evidence_note.as_deref(),
        }),
        _ => None,
    };

    ReportContext {
        generated: format!(
            "{}-{}-{}",
            record.date.day(),
            record.date.month(),
            record.date.year()
        ),
        reference: patient.and_then(|p| p.reference_number.as_deref()),
        patient: PatientSection {
            initials: patient_field(patient.and_then(|p| p.initials.as_ref())),
            age: answer_text(answers, 1, NOT_GIVEN),
            gender: patient_field(patient.and_then(|p| p.gender.as_ref())),
            duration: answer_text(answers, 2, NOT_GIVEN),
        },
        complaint: ComplaintSection {
            pain_location: answer_text(answers, 6, NOT_GIVEN),
            pain_frequency: answer_text(answers, 7, NOT_GIVEN),
            defecation: answer_text(answers, 8, NOT_GIVEN),
            consistency: answer_text(answers, 9, NOT_GIVEN),
        },
        medication: answer_text(answers, 4, NONE_GIVEN),
        family_history: answer_text(answers, 5, NONE_GIVEN),
        instrument,
        findings: Findings::from_record(record),
    }
}

/// Selected labels joined with ", ", or `fallback` when unanswered.
fn answer_text(answers: Option<&AnswerSet>, question_id: u32, fallback: &str) -> String {
    match answers.and_then(|a| a.get(question_id)) {
        Some(value) if !value.is_empty() => value.labels().join(", "),
        _ => fallback.to_string(),
    }
}
