//! Run-scoped deduplication of coach records.

use std::collections::HashSet;

/// Admits each `(email_hash, organization_id)` key once per crawl run.
///
/// The same coach often appears on several pages of one site (directory,
/// sport roster, contact page). The store would collapse them anyway; this
/// keeps a run from issuing redundant upserts.
#[derive(Debug, Default)]
pub struct RunDeduplicator {
    seen: HashSet<(String, Option<i64>)>,
}

impl RunDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time a key is seen.
    pub fn admit(&mut self, email_hash: &str, organization_id: Option<i64>) -> bool {
        self.seen.insert((email_hash.to_string(), organization_id))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
