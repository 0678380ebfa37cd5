use std::sync::Arc;

use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::{CourtNames, MatchId, MatchRecord};
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::list_matches::projection::{
    BoardSnapshot, build_board, select_history,
};
use crate::modules::matches::use_cases::list_matches::query::HistoryQuery;
use crate::modules::matches::use_cases::load_match::load_match;

pub struct ListMatchesHandler {
    store: Arc<dyn MatchStore>,
    courts: u32,
    court_names: CourtNames,
}

impl ListMatchesHandler {
    pub fn new(store: Arc<dyn MatchStore>, courts: u32, court_names: CourtNames) -> Self {
        Self {
            store,
            courts,
            court_names,
        }
    }

    pub async fn all(&self) -> Result<Vec<MatchRecord>, ApplicationError> {
        Ok(self.store.get_all_matches().await?)
    }

    pub async fn one(&self, id: MatchId) -> Result<MatchRecord, ApplicationError> {
        load_match(&*self.store, id).await
    }

    pub async fn board(&self) -> Result<BoardSnapshot, ApplicationError> {
        let records = self.store.get_all_matches().await?;
        Ok(build_board(&records, self.courts, &self.court_names))
    }

    pub async fn history(&self, query: &HistoryQuery) -> Result<Vec<MatchRecord>, ApplicationError> {
        let records = self.store.get_completed_matches().await?;
        Ok(select_history(records, query))
    }
}
