use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::matches::adapters::inbound::http::{OutcomeBody, error_response};
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::score_edits::ScoreEdits;
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::record_scores::command::RecordScores;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RecordScoresResponse {
    #[serde(rename = "match")]
    pub record: MatchDocument,
    pub outcome: OutcomeBody,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<ScoreEdits>, JsonRejection>,
) -> impl IntoResponse {
    let Json(edits) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordScores {
        match_id: MatchId(id),
        edits,
        recorded_at: now_millis(),
    };

    match state.record_scores.handle(command).await {
        Ok((record, outcome)) => Json(RecordScoresResponse {
            record: MatchDocument::from(&record),
            outcome: OutcomeBody::from(&outcome),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod record_scores_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::matches::core::game_format::GameFormat;
    use crate::modules::matches::use_cases::create_match::command::CreateMatch;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/matches/{id}/scores", put(handle))
            .with_state(state)
    }

    async fn seeded_state(game_format: GameFormat) -> AppState {
        let state = make_test_state();
        state
            .create_match
            .handle(CreateMatch {
                player_a: "Aoki".into(),
                player_b: "Baba".into(),
                game_format,
                memo: String::new(),
                position: None,
                created_at: 1_700_000_000_000,
            })
            .await
            .unwrap();
        state
    }

    async fn put_scores(state: AppState, id: u64, body: &str) -> axum::response::Response {
        app(state)
            .oneshot(
                Request::put(format!("/matches/{id}/scores"))
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_match_and_its_outcome() {
        let state = seeded_state(GameFormat::OneSet6Game).await;
        let response = put_scores(state, 1, r#"{"scoreA": "7", "scoreB": 6}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["match"]["winner"], "A");
        assert_eq!(json["match"]["status"], "Win");
        assert_eq!(json["outcome"]["isComplete"], true);
        assert_eq!(json["outcome"]["tiebreak"]["a"], true);
        assert_eq!(json["outcome"]["tiebreak"]["b"], false);
    }

    #[tokio::test]
    async fn it_should_return_derived_set_wins_for_best_of_three() {
        let state = seeded_state(GameFormat::BestOf3FourGameFullSets).await;
        let response = put_scores(state, 1, r#"{"setScores": {"A": [4, 2], "B": [1, 4]}}"#).await;

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["match"]["scoreA"], 1);
        assert_eq!(json["match"]["scoreB"], 1);
        assert_eq!(json["match"]["status"], "Unassigned");
        assert_eq!(json["outcome"]["status"], "Pending");
    }

    #[tokio::test]
    async fn it_should_store_a_non_numeric_score_as_not_entered() {
        let state = seeded_state(GameFormat::RaceTo5).await;
        let response = put_scores(state, 1, r#"{"scoreA": true, "scoreB": 5}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["match"]["scoreA"], serde_json::Value::Null);
        assert_eq!(json["match"]["scoreB"], 5);
        assert_eq!(json["match"]["winner"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn it_should_return_400_on_fields_of_the_other_shape() {
        let state = seeded_state(GameFormat::BestOf3FourGameFullSets).await;
        let response = put_scores(state, 1, r#"{"scoreA": 2}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_match() {
        let response = put_scores(make_test_state(), 7, r#"{"scoreA": 2}"#).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let state = seeded_state(GameFormat::RaceTo5).await;
        let response = put_scores(state, 1, "{").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
