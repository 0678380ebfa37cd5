use std::sync::Arc;

use tracing::info;

use crate::modules::matches::core::evolve::OverridePolicy;
use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::MatchRecord;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::load_match::load_match;
use crate::modules::matches::use_cases::move_match::command::MoveMatch;
use crate::modules::matches::use_cases::move_match::decide::decide_move;
use crate::modules::matches::use_cases::move_match::decision::{DecideError, Decision};

pub struct MoveMatchHandler {
    store: Arc<dyn MatchStore>,
    courts: u32,
    policy: OverridePolicy,
}

impl MoveMatchHandler {
    pub fn new(store: Arc<dyn MatchStore>, courts: u32, policy: OverridePolicy) -> Self {
        Self {
            store,
            courts,
            policy,
        }
    }

    pub async fn handle(&self, command: MoveMatch) -> Result<MatchRecord, ApplicationError> {
        let current = load_match(&*self.store, command.match_id).await?;
        match decide_move(current, command, self.courts, self.policy) {
            Decision::Accepted { record } => {
                let record = self
                    .store
                    .update_match(record)
                    .await
                    .map_err(ApplicationError::from_store)?;
                info!(match_id = %record.id, position = ?record.position, "match moved");
                Ok(record)
            }
            Decision::Rejected {
                reason: reason @ DecideError::CourtOutOfRange { .. },
            } => Err(ApplicationError::InvalidInput(reason.to_string())),
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}

#[cfg(test)]
mod move_match_handler_tests {
    use super::*;
    use crate::modules::matches::adapters::outbound::match_store_in_memory::InMemoryMatchStore;
    use crate::modules::matches::core::game_format::GameFormat;
    use crate::modules::matches::core::state::{BoardRow, CourtPosition, MatchStatus};
    use crate::tests::fixtures::records::make_new_match;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn handle_move_persists_the_position() {
        let store = Arc::new(InMemoryMatchStore::new());
        let created = store
            .add_match(make_new_match("Aoki", "Baba", GameFormat::RaceTo5))
            .await
            .unwrap();
        let handler = MoveMatchHandler::new(store.clone(), 4, OverridePolicy::default());
        let position = CourtPosition {
            court: 4,
            row: BoardRow::Current,
        };
        handler
            .handle(MoveMatch {
                match_id: created.id,
                position: Some(position),
                moved_at: 1_700_000_600_000,
            })
            .await
            .expect("handle failed");
        let stored = store.get_match(created.id).await.unwrap().unwrap();
        assert_eq!(stored.position, Some(position));
        assert_eq!(stored.status, MatchStatus::Current);
        assert_eq!(stored.actual_start_time, Some(1_700_000_600_000));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_move_rejects_courts_beyond_the_board() {
        let store = Arc::new(InMemoryMatchStore::new());
        let created = store
            .add_match(make_new_match("Aoki", "Baba", GameFormat::RaceTo5))
            .await
            .unwrap();
        let handler = MoveMatchHandler::new(store, 4, OverridePolicy::default());
        let result = handler
            .handle(MoveMatch {
                match_id: created.id,
                position: Some(CourtPosition {
                    court: 5,
                    row: BoardRow::Next,
                }),
                moved_at: 0,
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }
}
