use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::matches::adapters::inbound::http::error_response;
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::state::{MatchId, MatchRecord};
use crate::modules::matches::use_cases::application_error::ApplicationError;
use crate::modules::matches::use_cases::list_matches::query::{
    HistoryQuery, HistorySort, SortDirection,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct HistoryParams {
    pub court: Option<u32>,
    pub date: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl HistoryParams {
    fn into_query(self) -> Result<HistoryQuery, ApplicationError> {
        let date = match self.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ApplicationError::InvalidInput(format!("date must be YYYY-MM-DD, got {raw}"))
            })?),
            None => None,
        };
        Ok(HistoryQuery {
            court: self.court,
            date,
            sort: self
                .sort
                .as_deref()
                .map(HistorySort::from_key)
                .unwrap_or_default(),
            direction: self
                .direction
                .as_deref()
                .map(SortDirection::from_key)
                .unwrap_or_default(),
        })
    }
}

fn documents(records: &[MatchRecord]) -> Vec<MatchDocument> {
    records.iter().map(MatchDocument::from).collect()
}

pub async fn handle_all(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_matches.all().await {
        Ok(records) => Json(documents(&records)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_one(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    match state.list_matches.one(MatchId(id)).await {
        Ok(record) => Json(MatchDocument::from(&record)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_board(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_matches.board().await {
        Ok(board) => Json(board).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let query = match params.into_query() {
        Ok(query) => query,
        Err(e) => return error_response(e),
    };
    match state.list_matches.history(&query).await {
        Ok(records) => Json(documents(&records)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod list_matches_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::matches::core::game_format::GameFormat;
    use crate::modules::matches::core::score::Side;
    use crate::modules::matches::core::state::MatchId;
    use crate::modules::matches::use_cases::complete_match::command::CompleteMatch;
    use crate::modules::matches::use_cases::create_match::command::CreateMatch;
    use crate::modules::matches::use_cases::declare_winner::command::DeclareWinner;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::{make_offline_state, make_test_state};

    use super::{handle_all, handle_board, handle_history, handle_one};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/matches", get(handle_all))
            .route("/matches/completed", get(handle_history))
            .route("/matches/{id}", get(handle_one))
            .route("/board", get(handle_board))
            .with_state(state)
    }

    async fn seeded_state() -> AppState {
        let state = make_test_state();
        for (a, b) in [("Aoki", "Baba"), ("Chiba", "Doi")] {
            state
                .create_match
                .handle(CreateMatch {
                    player_a: a.into(),
                    player_b: b.into(),
                    game_format: GameFormat::RaceTo5,
                    memo: String::new(),
                    position: None,
                    created_at: 1_700_000_000_000,
                })
                .await
                .unwrap();
        }
        state
            .declare_winner
            .handle(DeclareWinner {
                match_id: MatchId(2),
                winner: Some(Side::A),
                declared_at: 1_700_000_600_000,
            })
            .await
            .unwrap();
        state
            .complete_match
            .handle(CompleteMatch {
                match_id: MatchId(2),
                completed_at: 1_700_000_600_000,
            })
            .await
            .unwrap();
        state
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_list_all_matches() {
        let (status, json) = get_json(seeded_state().await, "/matches").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn it_should_return_one_match_or_404() {
        let state = seeded_state().await;
        let (status, json) = get_json(state.clone(), "/matches/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["playerA"], "Aoki");
        let (status, _) = get_json(state, "/matches/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_the_board_without_completed_matches() {
        let (status, json) = get_json(seeded_state().await, "/board").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["courts"].as_array().map(Vec::len), Some(12));
        assert_eq!(json["courts"][0]["name"], "Court 1");
        assert_eq!(json["unassigned"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn it_should_filter_history_by_utc_date() {
        let state = seeded_state().await;
        let (status, json) = get_json(state.clone(), "/matches/completed?date=2023-11-14&sort=id&direction=asc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        let (_, json) = get_json(state, "/matches/completed?date=2023-11-15").await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_400_on_a_malformed_date() {
        let (status, _) = get_json(seeded_state().await, "/matches/completed?date=14-11-2023").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let (status, _) = get_json(make_offline_state(), "/board").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
