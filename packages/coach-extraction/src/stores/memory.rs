//! In-memory contact store for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::traits::store::{CoachRecord, ContactStore, UpsertOutcome};
use crate::types::CoachCandidate;

type CoachKey = (String, Option<i64>);

/// In-memory coach storage keyed by `(email_hash, organization_id)`.
///
/// Writes hold the lock for the whole read-modify-write, so an upsert is
/// atomic per key. Data is lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    coaches: RwLock<HashMap<CoachKey, CoachRecord>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored records, ordered by email for stable output.
    pub async fn all_coaches(&self) -> Vec<CoachRecord> {
        let mut records: Vec<CoachRecord> = self.coaches.read().await.values().cloned().collect();
        records.sort_by(|a, b| {
            a.coach
                .email
                .cmp(&b.coach.email)
                .then(a.coach.organization_id.cmp(&b.coach.organization_id))
        });
        records
    }

    /// Clear all stored data.
    pub async fn clear(&self) {
        self.coaches.write().await.clear();
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn upsert_coach(&self, coach: &CoachCandidate) -> Result<UpsertOutcome> {
        let mut coaches = self.coaches.write().await;

        match coaches.get_mut(&coach.dedup_key()) {
            Some(existing) => {
                existing.merge(coach);
                Ok(UpsertOutcome::Updated)
            }
            None => {
                coaches.insert(coach.dedup_key(), CoachRecord::new(coach.clone()));
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn get_coach(
        &self,
        email_hash: &str,
        organization_id: Option<i64>,
    ) -> Result<Option<CoachRecord>> {
        Ok(self
            .coaches
            .read()
            .await
            .get(&(email_hash.to_string(), organization_id))
            .cloned())
    }

    async fn count_coaches(&self) -> Result<usize> {
        Ok(self.coaches.read().await.len())
    }
}
