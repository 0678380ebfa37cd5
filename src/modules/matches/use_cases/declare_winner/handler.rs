use std::sync::Arc;

use tracing::info;

use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::MatchRecord;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::declare_winner::command::DeclareWinner;
use crate::modules::matches::use_cases::declare_winner::decide::decide_declare;
use crate::modules::matches::use_cases::declare_winner::decision::Decision;
use crate::modules::matches::use_cases::load_match::load_match;

pub struct DeclareWinnerHandler {
    store: Arc<dyn MatchStore>,
}

impl DeclareWinnerHandler {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeclareWinner) -> Result<MatchRecord, ApplicationError> {
        let current = load_match(&*self.store, command.match_id).await?;
        match decide_declare(current, command) {
            Decision::Accepted { record } => {
                let record = self
                    .store
                    .update_match(record)
                    .await
                    .map_err(ApplicationError::from_store)?;
                info!(match_id = %record.id, winner = ?record.winner, "winner declared manually");
                Ok(record)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
