use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::matches::use_cases::complete_match::inbound::http as complete_http;
use crate::modules::matches::use_cases::create_match::inbound::http as create_http;
use crate::modules::matches::use_cases::declare_winner::inbound::http as winner_http;
use crate::modules::matches::use_cases::delete_matches::inbound::http as delete_http;
use crate::modules::matches::use_cases::evaluate_scores::inbound::http as evaluate_http;
use crate::modules::matches::use_cases::list_matches::inbound::http as list_http;
use crate::modules::matches::use_cases::move_match::inbound::http as move_http;
use crate::modules::matches::use_cases::record_scores::inbound::http as scores_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/matches",
            get(list_http::handle_all)
                .post(create_http::handle)
                .delete(delete_http::handle_all),
        )
        .route(
            "/matches/completed",
            get(list_http::handle_history).delete(delete_http::handle_completed),
        )
        .route(
            "/matches/{id}",
            get(list_http::handle_one).delete(delete_http::handle_one),
        )
        .route("/matches/{id}/scores", put(scores_http::handle))
        .route("/matches/{id}/winner", put(winner_http::handle))
        .route("/matches/{id}/position", put(move_http::handle))
        .route("/matches/{id}/complete", post(complete_http::handle))
        .route("/board", get(list_http::handle_board))
        .route("/evaluate", post(evaluate_http::handle))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod router_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::router;
    use crate::tests::fixtures::app_state::make_test_state;

    async fn send(app: axum::Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn it_should_run_a_match_from_creation_to_history() {
        let app = router(make_test_state());

        let (status, created) = send(
            app.clone(),
            "POST",
            "/matches",
            Some(r#"{"playerA": "Aoki", "playerB": "Baba", "gameFormat": "6game1set", "courtNumber": 3, "rowPosition": "current"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "Current");
        let id = created["id"].as_u64().unwrap();

        let (status, scored) = send(
            app.clone(),
            "PUT",
            &format!("/matches/{id}/scores"),
            Some(r#"{"scoreA": 6, "scoreB": 2}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(scored["match"]["winner"], "A");

        let (status, _) = send(app.clone(), "POST", &format!("/matches/{id}/complete"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, board) = send(app.clone(), "GET", "/board", None).await;
        assert_eq!(board["courts"][2]["current"], serde_json::json!([]));

        let (_, history) = send(app.clone(), "GET", "/matches/completed?court=3", None).await;
        assert_eq!(history.as_array().map(Vec::len), Some(1));

        let (status, cleared) = send(app.clone(), "DELETE", "/matches/completed", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cleared["removed"], 1);

        let (status, _) = send(app, "GET", &format!("/matches/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_serve_the_evaluator_preview() {
        let (status, json) = send(
            router(make_test_state()),
            "POST",
            "/evaluate",
            Some(r#"{"gameFormat": "6game3set", "setScores": {"A": [6, 7], "B": [4, 6]}}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["winner"], "A");
        assert_eq!(json["setWins"]["a"], 2);
    }
}
