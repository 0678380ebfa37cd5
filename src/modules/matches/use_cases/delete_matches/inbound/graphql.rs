use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::matches::adapters::inbound::graphql::gql_error;
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::delete_matches::command::DeleteMatches;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteMatchesMutation;

#[Object]
impl DeleteMatchesMutation {
    async fn delete_match(&self, context: &Context<'_>, id: u64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_matches
            .handle(DeleteMatches::One(MatchId(id)))
            .await
            .map_err(gql_error)?;
        Ok(true)
    }
}
