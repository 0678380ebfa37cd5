use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::matches::adapters::inbound::http::error_response;
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::delete_matches::command::DeleteMatches;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RemovedResponse {
    pub removed: usize,
}

pub async fn handle_one(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    match state.delete_matches.handle(DeleteMatches::One(MatchId(id))).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_all(State(state): State<AppState>) -> impl IntoResponse {
    match state.delete_matches.handle(DeleteMatches::All).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn handle_completed(State(state): State<AppState>) -> impl IntoResponse {
    match state.delete_matches.handle(DeleteMatches::Completed).await {
        Ok(removed) => Json(RemovedResponse { removed }).into_response(),
        Err(e) => error_response(e),
    }
}
