use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::matches::use_cases::create_match::inbound::graphql::CreateMatchMutation;
use crate::modules::matches::use_cases::declare_winner::inbound::graphql::DeclareWinnerMutation;
use crate::modules::matches::use_cases::delete_matches::inbound::graphql::DeleteMatchesMutation;
use crate::modules::matches::use_cases::evaluate_scores::inbound::graphql::EvaluateScoresQuery;
use crate::modules::matches::use_cases::list_matches::inbound::graphql::ListMatchesQuery;
use crate::modules::matches::use_cases::record_scores::inbound::graphql::RecordScoresMutation;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListMatchesQuery, EvaluateScoresQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateMatchMutation,
    RecordScoresMutation,
    DeclareWinnerMutation,
    DeleteMatchesMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn routes(schema: AppSchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
