//! Data types shared by the extractors, the pipeline and the seams.

pub mod classification;
pub mod coach;
pub mod config;
pub mod email;
pub mod organization;
pub mod page;

pub use classification::{RoleCategory, Sport};
pub use coach::CoachCandidate;
pub use config::ExtractionConfig;
pub use email::{CandidateEmail, SourceMethod};
pub use organization::{Level, OrganizationContext, SubLevel};
pub use page::{DirectoryLinkCandidate, FetchedPage, StaffPage};
