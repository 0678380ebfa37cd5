use async_trait::async_trait;
use thiserror::Error;

use crate::modules::matches::core::state::{MatchId, MatchRecord, NewMatch};

#[derive(Debug, Error)]
pub enum MatchStoreError {
    #[error("match {0} not found")]
    NotFound(MatchId),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Persistence port for match records of one tournament.
///
/// Ids come from a counter owned by the store and are never handed out twice,
/// not even after `delete_all_matches`.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn add_match(&self, new_match: NewMatch) -> Result<MatchRecord, MatchStoreError>;

    async fn get_match(&self, id: MatchId) -> Result<Option<MatchRecord>, MatchStoreError>;

    /// Replaces the stored record with the same id.
    async fn update_match(&self, record: MatchRecord) -> Result<MatchRecord, MatchStoreError>;

    async fn delete_match(&self, id: MatchId) -> Result<(), MatchStoreError>;

    /// All records, ordered by id.
    async fn get_all_matches(&self) -> Result<Vec<MatchRecord>, MatchStoreError>;

    /// Records with a winner and an end time, ordered by id.
    async fn get_completed_matches(&self) -> Result<Vec<MatchRecord>, MatchStoreError>;

    async fn delete_all_matches(&self) -> Result<(), MatchStoreError>;

    /// Removes every decided record and returns how many were removed.
    async fn clear_completed_matches(&self) -> Result<usize, MatchStoreError>;
}
