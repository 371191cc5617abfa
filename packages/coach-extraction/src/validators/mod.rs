//! Address validation and run-scoped deduplication.

pub mod dedup;
pub mod email;

pub use dedup::RunDeduplicator;
pub use email::{validate, EmailValidation, RejectReason};
