// In-process table of match records shared by the store adapters.
//
// Responsibilities
// - Own the id counter next to the records so both are persisted together.
// - Keep records ordered by id.

use std::collections::BTreeMap;

use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::ports::MatchStoreError;
use crate::modules::matches::core::state::{MatchId, MatchRecord, NewMatch};

pub const FIRST_MATCH_ID: u64 = 1;

#[derive(Debug, Clone)]
pub struct MatchTable {
    records: BTreeMap<MatchId, MatchRecord>,
    next_id: u64,
}

impl Default for MatchTable {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: FIRST_MATCH_ID,
        }
    }
}

impl MatchTable {
    /// Rebuilds a table from stored documents. The counter is raised above the
    /// highest stored id if the stored value lags behind.
    pub fn from_documents(documents: Vec<MatchDocument>, next_id: u64) -> Self {
        let records: BTreeMap<MatchId, MatchRecord> = documents
            .into_iter()
            .map(|document| (document.id, document.into_record()))
            .collect();
        let above_max = records
            .keys()
            .next_back()
            .map_or(FIRST_MATCH_ID, |id| id.0 + 1);
        Self {
            records,
            next_id: next_id.max(above_max),
        }
    }

    pub fn to_documents(&self) -> Vec<MatchDocument> {
        self.records.values().map(MatchDocument::from).collect()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn insert(&mut self, new_match: NewMatch) -> MatchRecord {
        let id = MatchId(self.next_id);
        self.next_id += 1;
        let record = new_match.into_record(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: MatchId) -> Option<MatchRecord> {
        self.records.get(&id).cloned()
    }

    pub fn replace(&mut self, record: MatchRecord) -> Result<MatchRecord, MatchStoreError> {
        let slot = self
            .records
            .get_mut(&record.id)
            .ok_or(MatchStoreError::NotFound(record.id))?;
        *slot = record.clone();
        Ok(record)
    }

    pub fn remove(&mut self, id: MatchId) -> Result<(), MatchStoreError> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(MatchStoreError::NotFound(id))
    }

    pub fn all(&self) -> Vec<MatchRecord> {
        self.records.values().cloned().collect()
    }

    pub fn completed(&self) -> Vec<MatchRecord> {
        self.records
            .values()
            .filter(|record| record.is_decided())
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn clear_completed(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| !record.is_decided());
        before - self.records.len()
    }
}
