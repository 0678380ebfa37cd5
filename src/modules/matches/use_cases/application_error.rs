use thiserror::Error;

use crate::modules::matches::core::ports::MatchStoreError;
use crate::modules::matches::core::state::MatchId;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] MatchStoreError),

    #[error("match {0} not found")]
    NotFound(MatchId),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApplicationError {
    /// Folds a store-level miss into the application-level one.
    pub fn from_store(error: MatchStoreError) -> Self {
        match error {
            MatchStoreError::NotFound(id) => ApplicationError::NotFound(id),
            other => ApplicationError::Store(other),
        }
    }
}
