use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::{MatchId, MatchRecord};
use crate::modules::matches::use_cases::application_error::ApplicationError;

pub async fn load_match(store: &dyn MatchStore, id: MatchId) -> Result<MatchRecord, ApplicationError> {
    store
        .get_match(id)
        .await?
        .ok_or(ApplicationError::NotFound(id))
}
