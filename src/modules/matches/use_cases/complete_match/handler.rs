use std::sync::Arc;

use tracing::info;

use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::MatchRecord;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::complete_match::command::CompleteMatch;
use crate::modules::matches::use_cases::complete_match::decide::decide_complete;
use crate::modules::matches::use_cases::complete_match::decision::Decision;
use crate::modules::matches::use_cases::load_match::load_match;

pub struct CompleteMatchHandler {
    store: Arc<dyn MatchStore>,
}

impl CompleteMatchHandler {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CompleteMatch) -> Result<MatchRecord, ApplicationError> {
        let current = load_match(&*self.store, command.match_id).await?;
        match decide_complete(current, command) {
            Decision::Accepted { record } => {
                let record = self
                    .store
                    .update_match(record)
                    .await
                    .map_err(ApplicationError::from_store)?;
                info!(match_id = %record.id, "match moved to history");
                Ok(record)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
