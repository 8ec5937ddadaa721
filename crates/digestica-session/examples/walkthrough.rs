//! Scripted run through the general questionnaire.
//!
//! Answers every section, saves the result to an in-memory report archive
//! and prints the rendered medical report. With a path argument the report
//! is also written there as DOCX.
//!
//! Usage:
//!   cargo run -p digestica-session --example walkthrough [-- report.docx]

use digestica_export::docx::generate_docx;
use digestica_export::render::render_default_report;
use digestica_export::styles::DocumentStyles;
use digestica_session::{Advance, Screen, Session};
use digestica_storage::reports::{ReportArchive, top_diagnosis_summary};
use digestica_storage::store::MemoryStore;

/// Preferred answers by question id; everything else gets its first option.
const SCRIPT: &[(u32, &str)] = &[
    (1, "31-45"),
    (2, ">1 jaar"),
    (6, "Onderbuik links"),
    (9, "Wisselend hard/zacht"),
    (11, "Altijd"),
    (14, "Erger na eten"),
    (15, "Duidelijk erger bij stress"),
];

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let archive = ReportArchive::new(MemoryStore::new());
    let mut session = Session::general();

    loop {
        let picks: Vec<(u32, String)> = session
            .current_page()
            .iter()
            .map(|q| {
                let scripted = SCRIPT
                    .iter()
                    .find(|(id, label)| *id == q.id && q.has_option(label))
                    .map(|(_, label)| (*label).to_string());
                (q.id, scripted.unwrap_or_else(|| q.options[0].clone()))
            })
            .collect();
        for (id, label) in picks {
            session.answer(id, &label)?;
        }

        match session.advance()? {
            Advance::Moved(page) => println!("Section {} of {}", page + 1, session.page_count()),
            Advance::Blocked(missing) => eyre::bail!("unanswered questions: {missing:?}"),
            Advance::Completed => break,
        }
    }

    let mut screen = Screen::Questionnaire;
    session.save_result(&archive, |next| screen = next)?;
    let record = archive
        .current()
        .ok_or_else(|| eyre::eyre!("saved report is missing"))?;

    println!();
    println!("Saved {} → {:?}", record.id, screen);
    println!("Top: {}", top_diagnosis_summary(&record));
    println!();

    let report = render_default_report(&record)?;
    println!("{report}");

    if let Some(path) = std::env::args().nth(1) {
        let bytes = generate_docx(&report, &DocumentStyles::default())?;
        std::fs::write(&path, bytes)?;
        println!("Wrote {path}");
    }

    Ok(())
}
