//! Extraction pipeline.
//!
//! The pipeline covers:
//! - Navigation planning from an organization homepage
//! - Candidate extraction from a staff page (platform cards or generic)
//! - Persistence with validation and run-scoped dedup

pub mod navigation;
pub mod orchestrator;
pub mod persist;

pub use navigation::{homepage_guesses, plan_navigation, staff_directory_url, NavigationPlan};
pub use orchestrator::extract_coaches;
pub use persist::{persist_candidates, PersistStats};
