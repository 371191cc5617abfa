//! Pure classifiers over a single page.
//!
//! - [`email`] - address discovery with confidence tiers and DOM context
//! - [`name`] - full name to first/last
//! - [`role`] - job title to [`RoleCategory`](crate::types::RoleCategory)
//! - [`sport`] - title or URL to [`Sport`](crate::types::Sport)
//! - [`page`] - staff-directory link and page scoring
//! - [`platform`] - hosting platform detection and card profiles

pub mod email;
pub mod name;
pub mod page;
pub mod platform;
pub mod role;
pub mod sport;

pub use name::ParsedName;
pub use page::{find_staff_directory_links, is_staff_directory_page};
pub use platform::{detect_platform, Platform};
