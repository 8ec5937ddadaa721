//! digestica-core
//!
//! Pure domain types and storage key conventions. No I/O. This is the
//! shared vocabulary of the Digestica self-assessment system.

pub mod error;
pub mod models;
pub mod store_keys;
