use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::matches::adapters::inbound::graphql::{GqlMatch, gql_error};
use crate::modules::matches::core::score::Side;
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::declare_winner::command::DeclareWinner;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeclareWinnerMutation;

#[Object]
impl DeclareWinnerMutation {
    /// `winner` is "A", "B", or null to clear.
    async fn declare_winner(
        &self,
        context: &Context<'_>,
        id: u64,
        winner: Option<String>,
    ) -> GqlResult<GqlMatch> {
        let state = context.data_unchecked::<AppState>();
        let winner = match winner.as_deref() {
            None => None,
            Some(label) => Some(
                Side::from_label(label)
                    .ok_or_else(|| async_graphql::Error::new(format!("unknown side: {label}")))?,
            ),
        };
        let command = DeclareWinner {
            match_id: MatchId(id),
            winner,
            declared_at: now_millis(),
        };
        let record = state.declare_winner.handle(command).await.map_err(gql_error)?;
        Ok(GqlMatch::from(&record))
    }
}
