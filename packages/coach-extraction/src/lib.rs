//! Coaching-Staff Contact Extraction
//!
//! Heuristic extraction of coach contact records (name, role, sport, email)
//! from the staff-directory pages of schools, leagues and clubs.
//!
//! # Design
//!
//! - Every classifier is a pure function of one page; no I/O, no shared
//!   mutable state
//! - Pattern tables are immutable and ordered; the first matching rule wins
//! - Uncertainty is a score or `None`, never an error
//! - Fetching and persistence sit behind async traits
//!
//! # Usage
//!
//! ```rust,ignore
//! use coach_extraction::{extract_coaches, ExtractionConfig, Level, OrganizationContext, StaffPage};
//!
//! let page = StaffPage::parse(url, html);
//! let org = OrganizationContext::new("ABC College", Level::College, "OH").with_id(42);
//! let coaches = extract_coaches(&page, &org, &ExtractionConfig::default());
//! ```
//!
//! # Modules
//!
//! - [`extractors`] - Email, name, role, sport, page and platform classifiers
//! - [`pipeline`] - Orchestration, navigation planning and persistence
//! - [`traits`] - Fetcher and contact store seams
//! - [`stores`] - Storage implementations (MemoryStore)
//! - [`validators`] - Address validation and run-scoped dedup
//! - [`types`] - Shared data types
//! - [`testing`] - Mock fetcher and fixtures

pub mod document;
pub mod error;
pub mod extractors;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;
pub mod urls;
pub mod validators;

// Re-export core types at crate root
pub use error::{ExtractionError, Result};
pub use extractors::{
    detect_platform, find_staff_directory_links, is_staff_directory_page, ParsedName, Platform,
};
pub use pipeline::{
    extract_coaches, homepage_guesses, persist_candidates, plan_navigation, staff_directory_url,
    NavigationPlan, PersistStats,
};
pub use stores::MemoryStore;
pub use traits::{
    fetcher::PageFetcher,
    store::{CoachRecord, ContactStore, UpsertOutcome},
};
pub use types::{
    CandidateEmail, CoachCandidate, DirectoryLinkCandidate, ExtractionConfig, FetchedPage, Level,
    OrganizationContext, RoleCategory, SourceMethod, Sport, StaffPage, SubLevel,
};
pub use validators::{EmailValidation, RunDeduplicator};
