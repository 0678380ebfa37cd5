use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::matches::adapters::inbound::graphql::{GqlMatch, gql_error};
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::list_matches::query::{
    HistoryQuery, HistorySort, SortDirection,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListMatchesQuery;

#[Object]
impl ListMatchesQuery {
    async fn matches(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMatch>> {
        let state = context.data_unchecked::<AppState>();
        let records = state.list_matches.all().await.map_err(gql_error)?;
        Ok(records.iter().map(GqlMatch::from).collect())
    }

    #[graphql(name = "match")]
    async fn match_by_id(&self, context: &Context<'_>, id: u64) -> GqlResult<Option<GqlMatch>> {
        let state = context.data_unchecked::<AppState>();
        match state.list_matches.one(MatchId(id)).await {
            Ok(record) => Ok(Some(GqlMatch::from(&record))),
            Err(ApplicationError::NotFound(_)) => Ok(None),
            Err(e) => Err(gql_error(e)),
        }
    }

    /// `date` is a UTC day, `YYYY-MM-DD`.
    async fn completed_matches(
        &self,
        context: &Context<'_>,
        court: Option<u32>,
        date: Option<String>,
        sort: Option<String>,
        direction: Option<String>,
    ) -> GqlResult<Vec<GqlMatch>> {
        let state = context.data_unchecked::<AppState>();
        let date = date
            .as_deref()
            .map(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d"))
            .transpose()?;
        let query = HistoryQuery {
            court,
            date,
            sort: sort.as_deref().map(HistorySort::from_key).unwrap_or_default(),
            direction: direction
                .as_deref()
                .map(SortDirection::from_key)
                .unwrap_or_default(),
        };
        let records = state.list_matches.history(&query).await.map_err(gql_error)?;
        Ok(records.iter().map(GqlMatch::from).collect())
    }
}
