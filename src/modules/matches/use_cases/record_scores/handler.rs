use std::sync::Arc;

use tracing::info;

use crate::modules::matches::core::evaluate::Outcome;
use crate::modules::matches::core::evolve::OverridePolicy;
use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::MatchRecord;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::load_match::load_match;
use crate::modules::matches::use_cases::record_scores::command::RecordScores;
use crate::modules::matches::use_cases::record_scores::decide::decide_record;
use crate::modules::matches::use_cases::record_scores::decision::{DecideError, Decision};

pub struct RecordScoresHandler {
    store: Arc<dyn MatchStore>,
    policy: OverridePolicy,
}

impl RecordScoresHandler {
    pub fn new(store: Arc<dyn MatchStore>, policy: OverridePolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        command: RecordScores,
    ) -> Result<(MatchRecord, Outcome), ApplicationError> {
        let current = load_match(&*self.store, command.match_id).await?;
        let previous_winner = current.winner;

        match decide_record(current, command, self.policy) {
            Decision::Accepted { record, outcome } => {
                let record = self
                    .store
                    .update_match(record)
                    .await
                    .map_err(ApplicationError::from_store)?;
                if record.winner != previous_winner {
                    info!(
                        match_id = %record.id,
                        winner = ?record.winner,
                        "match winner changed by score edit"
                    );
                }
                Ok((record, outcome))
            }
            Decision::Rejected {
                reason: reason @ DecideError::ScoreShapeMismatch { .. },
            } => Err(ApplicationError::InvalidInput(reason.to_string())),
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
