use std::sync::Arc;

use tracing::info;

use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::MatchRecord;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::create_match::command::CreateMatch;
use crate::modules::matches::use_cases::create_match::decide::decide_create;
use crate::modules::matches::use_cases::create_match::decision::Decision;

pub struct CreateMatchHandler {
    store: Arc<dyn MatchStore>,
    courts: u32,
}

impl CreateMatchHandler {
    pub fn new(store: Arc<dyn MatchStore>, courts: u32) -> Self {
        Self { store, courts }
    }

    pub async fn handle(&self, command: CreateMatch) -> Result<MatchRecord, ApplicationError> {
        match decide_create(command, self.courts) {
            Decision::Accepted { new_match } => {
                let record = self.store.add_match(new_match).await?;
                info!(match_id = %record.id, format = %record.game_format, "match created");
                Ok(record)
            }
            Decision::Rejected { reason } => Err(ApplicationError::InvalidInput(reason.to_string())),
        }
    }
}
