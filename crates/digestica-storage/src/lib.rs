//! digestica-storage
//!
//! Persistence collaborator. A small key-value blob interface with in-memory
//! and file-backed implementations, plus the report archive and symptom
//! diary built on top of it.

pub mod config;
pub mod diary;
pub mod error;
pub mod reports;
pub mod state;
pub mod store;
