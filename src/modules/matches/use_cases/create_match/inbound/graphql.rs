use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::matches::adapters::inbound::graphql::{GqlMatch, gql_error};
use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::use_cases::create_match::command::CreateMatch;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateMatchMutation;

#[Object]
impl CreateMatchMutation {
    async fn create_match(
        &self,
        context: &Context<'_>,
        player_a: String,
        player_b: String,
        game_format: Option<String>,
        memo: Option<String>,
    ) -> GqlResult<GqlMatch> {
        let state = context.data_unchecked::<AppState>();
        let command = CreateMatch {
            player_a,
            player_b,
            game_format: game_format
                .as_deref()
                .map(GameFormat::from_tag)
                .unwrap_or_default(),
            memo: memo.unwrap_or_default(),
            position: None,
            created_at: now_millis(),
        };
        let record = state.create_match.handle(command).await.map_err(gql_error)?;
        Ok(GqlMatch::from(&record))
    }
}
