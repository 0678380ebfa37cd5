use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::matches::adapters::inbound::http::error_response;
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::complete_match::command::CompleteMatch;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    let command = CompleteMatch {
        match_id: MatchId(id),
        completed_at: now_millis(),
    };
    match state.complete_match.handle(command).await {
        Ok(record) => Json(MatchDocument::from(&record)).into_response(),
        Err(e) => error_response(e),
    }
}
