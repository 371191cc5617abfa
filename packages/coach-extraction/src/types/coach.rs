//! Coach candidate records emitted by the orchestrator.

use serde::{Deserialize, Serialize};

use super::classification::{RoleCategory, Sport};
use super::organization::{Level, OrganizationContext, SubLevel};

/// A structured, confidence-scored contact extracted from one page.
///
/// Organization fields are copied from the crawl context. Deduplication
/// across pages is keyed on `(email_hash, organization_id)` downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachCandidate {
    pub email: String,
    pub email_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub role_category: Option<RoleCategory>,
    /// Raw text the sport was read from
    pub sport: Option<String>,
    pub sport_normalized: Option<Sport>,
    pub organization_id: Option<i64>,
    pub organization_name: String,
    pub level: Level,
    pub sub_level: Option<SubLevel>,
    pub state: String,
    pub source_url: String,
    pub confidence_score: f32,
}

impl CoachCandidate {
    /// Start a candidate for `email` with the organization fields filled in.
    pub fn new(
        email: impl Into<String>,
        email_hash: impl Into<String>,
        org: &OrganizationContext,
        source_url: impl Into<String>,
        confidence_score: f32,
    ) -> Self {
        Self {
            email: email.into(),
            email_hash: email_hash.into(),
            first_name: None,
            last_name: None,
            full_name: None,
            title: None,
            role_category: None,
            sport: None,
            sport_normalized: None,
            organization_id: org.id,
            organization_name: org.name.clone(),
            level: org.level,
            sub_level: org.sub_level,
            state: org.state.clone(),
            source_url: source_url.into(),
            confidence_score,
        }
    }

    /// Persistence key: at most one stored row per key.
    pub fn dedup_key(&self) -> (String, Option<i64>) {
        (self.email_hash.clone(), self.organization_id)
    }
}
