//! Configuration for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Knobs for [`extract_coaches`](crate::pipeline::extract_coaches) and
/// [`plan_navigation`](crate::pipeline::plan_navigation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Use platform card profiles (Sidearm, PrestoSports) when the page
    /// matches one.
    ///
    /// Default: true.
    pub platform_cards: bool,

    /// Re-check address format before persisting.
    ///
    /// Default: true.
    pub validate_format: bool,

    /// Staff-page confidence above which a youth platform homepage is also
    /// extracted in place.
    ///
    /// Default: 0.15.
    pub staff_page_threshold: f32,

    /// Staff-page confidence above which a high school or college homepage
    /// is extracted in place.
    ///
    /// Default: 0.3.
    pub school_homepage_threshold: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            platform_cards: true,
            validate_format: true,
            staff_page_threshold: 0.15,
            school_homepage_threshold: 0.3,
        }
    }
}

impl ExtractionConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform_cards(mut self, enabled: bool) -> Self {
        self.platform_cards = enabled;
        self
    }

    pub fn with_validate_format(mut self, enabled: bool) -> Self {
        self.validate_format = enabled;
        self
    }

    /// Set the staff-page threshold, clamped to 0.0..=1.0.
    pub fn with_staff_page_threshold(mut self, threshold: f32) -> Self {
        self.staff_page_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the school homepage threshold, clamped to 0.0..=1.0.
    pub fn with_school_homepage_threshold(mut self, threshold: f32) -> Self {
        self.school_homepage_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}
