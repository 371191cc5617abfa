//! Contact persistence seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::CoachCandidate;

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// A stored coach with bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachRecord {
    #[serde(flatten)]
    pub coach: CoachCandidate,
    pub first_seen_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CoachRecord {
    pub fn new(coach: CoachCandidate) -> Self {
        let now = Utc::now();
        Self {
            coach,
            first_seen_at: now,
            updated_at: now,
        }
    }

    /// Merge a fresh sighting into this record.
    ///
    /// Absent fields on `incoming` never erase stored values. Source URL and
    /// confidence always follow the latest sighting.
    pub fn merge(&mut self, incoming: &CoachCandidate) {
        let coach = &mut self.coach;

        if incoming.full_name.is_some() {
            coach.full_name = incoming.full_name.clone();
            coach.first_name = incoming.first_name.clone();
            coach.last_name = incoming.last_name.clone();
        }
        if incoming.title.is_some() {
            coach.title = incoming.title.clone();
        }
        if incoming.role_category.is_some() {
            coach.role_category = incoming.role_category;
        }
        if incoming.sport_normalized.is_some() {
            coach.sport = incoming.sport.clone();
            coach.sport_normalized = incoming.sport_normalized;
        }
        coach.source_url = incoming.source_url.clone();
        coach.confidence_score = incoming.confidence_score;

        self.updated_at = Utc::now();
    }
}

/// Storage for coach contacts, keyed by `(email_hash, organization_id)`.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Insert a new coach or merge into the existing row for its key.
    async fn upsert_coach(&self, coach: &CoachCandidate) -> Result<UpsertOutcome>;

    /// Get a coach by key.
    async fn get_coach(
        &self,
        email_hash: &str,
        organization_id: Option<i64>,
    ) -> Result<Option<CoachRecord>>;

    /// Number of stored coaches.
    async fn count_coaches(&self) -> Result<usize>;
}
