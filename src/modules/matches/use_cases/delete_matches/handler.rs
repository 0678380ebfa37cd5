use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::delete_matches::command::DeleteMatches;

pub struct DeleteMatchesHandler {
    store: Arc<dyn MatchStore>,
}

impl DeleteMatchesHandler {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self { store }
    }

    /// Returns how many records were removed.
    pub async fn handle(&self, command: DeleteMatches) -> Result<usize, ApplicationError> {
        match command {
            DeleteMatches::One(id) => {
                self.store
                    .delete_match(id)
                    .await
                    .map_err(ApplicationError::from_store)?;
                info!(match_id = %id, "match deleted");
                Ok(1)
            }
            DeleteMatches::All => {
                let removed = self.store.get_all_matches().await?.len();
                self.store.delete_all_matches().await?;
                warn!(removed, "all matches deleted");
                Ok(removed)
            }
            DeleteMatches::Completed => {
                let removed = self.store.clear_completed_matches().await?;
                info!(removed, "completed matches cleared");
                Ok(removed)
            }
        }
    }
}
