//! Seams to the collaborators around the extraction core.
//!
//! Applications implement these to plug in fetching and persistence.

pub mod fetcher;
pub mod store;
