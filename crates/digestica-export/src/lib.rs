//! digestica-export
//!
//! Report collaborator: findings derived from a result record, the medical
//! report template, DOCX generation and the diary CSV export.

pub mod diary;
pub mod docx;
pub mod error;
pub mod findings;
pub mod render;
pub mod styles;
