//! Validate, deduplicate and store extracted candidates.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::extractors::email::email_hash;
use crate::traits::store::{ContactStore, UpsertOutcome};
use crate::types::{CoachCandidate, ExtractionConfig};
use crate::validators::dedup::RunDeduplicator;
use crate::validators::email::{validate, RejectReason};

/// Counters for one persistence batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistStats {
    pub found: usize,
    pub inserted: usize,
    pub updated: usize,
    pub rejected: usize,
    pub duplicates: usize,
}

impl PersistStats {
    /// Fold another batch into this one.
    pub fn absorb(&mut self, other: PersistStats) {
        self.found += other.found;
        self.inserted += other.inserted;
        self.updated += other.updated;
        self.rejected += other.rejected;
        self.duplicates += other.duplicates;
    }
}

/// Persist `candidates`, skipping keys already seen by `dedup` in this run
/// and, when `config.validate_format` is set, malformed addresses.
///
/// A storage failure rejects that record only; the rest of the batch is
/// still written.
pub async fn persist_candidates<S: ContactStore + ?Sized>(
    store: &S,
    candidates: Vec<CoachCandidate>,
    dedup: &mut RunDeduplicator,
    config: &ExtractionConfig,
) -> PersistStats {
    let mut stats = PersistStats {
        found: candidates.len(),
        ..PersistStats::default()
    };

    for mut coach in candidates {
        coach.email = coach.email.trim().to_lowercase();
        coach.email_hash = email_hash(&coach.email);

        let validation = validate(&coach.email);
        if config.validate_format && !validation.valid {
            debug!(email = %coach.email, reason = ?validation.reason, "Rejected address");
            stats.rejected += 1;
            continue;
        }
        if validation.reason == Some(RejectReason::DisposableDomain) {
            debug!(email = %coach.email, "Disposable domain");
        }

        if !dedup.admit(&coach.email_hash, coach.organization_id) {
            stats.duplicates += 1;
            continue;
        }

        match store.upsert_coach(&coach).await {
            Ok(UpsertOutcome::Inserted) => stats.inserted += 1,
            Ok(UpsertOutcome::Updated) => stats.updated += 1,
            Err(e) => {
                warn!(email = %coach.email, error = %e, "Failed to store coach");
                stats.rejected += 1;
            }
        }
    }

    info!(
        found = stats.found,
        inserted = stats.inserted,
        updated = stats.updated,
        rejected = stats.rejected,
        duplicates = stats.duplicates,
        "Persisted coach candidates"
    );

    stats
}
