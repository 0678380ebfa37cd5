// In memory match store.
//
// Purpose
// - Run the board without touching the disk: tests, local development and the `memory` backend.
//
// Responsibilities
// - Hold the match table behind a RwLock.
// - Fail every call while toggled offline, to exercise backend error paths.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::matches::adapters::outbound::match_table::MatchTable;
use crate::modules::matches::core::ports::{MatchStore, MatchStoreError};
use crate::modules::matches::core::state::{MatchId, MatchRecord, NewMatch};

#[derive(Default)]
pub struct InMemoryMatchStore {
    table: RwLock<MatchTable>,
    is_offline: bool,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), MatchStoreError> {
        if self.is_offline {
            return Err(MatchStoreError::Backend("Match store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn add_match(&self, new_match: NewMatch) -> Result<MatchRecord, MatchStoreError> {
        self.ensure_online()?;
        Ok(self.table.write().await.insert(new_match))
    }

    async fn get_match(&self, id: MatchId) -> Result<Option<MatchRecord>, MatchStoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.get(id))
    }

    async fn update_match(&self, record: MatchRecord) -> Result<MatchRecord, MatchStoreError> {
        self.ensure_online()?;
        self.table.write().await.replace(record)
    }

    async fn delete_match(&self, id: MatchId) -> Result<(), MatchStoreError> {
        self.ensure_online()?;
        self.table.write().await.remove(id)
    }

    async fn get_all_matches(&self) -> Result<Vec<MatchRecord>, MatchStoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.all())
    }

    async fn get_completed_matches(&self) -> Result<Vec<MatchRecord>, MatchStoreError> {
        self.ensure_online()?;
        Ok(self.table.read().await.completed())
    }

    async fn delete_all_matches(&self) -> Result<(), MatchStoreError> {
        self.ensure_online()?;
        self.table.write().await.clear();
        Ok(())
    }

    async fn clear_completed_matches(&self) -> Result<usize, MatchStoreError> {
        self.ensure_online()?;
        Ok(self.table.write().await.clear_completed())
    }
}
