use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::matches::adapters::inbound::http::error_response;
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::score::Side;
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::declare_winner::command::DeclareWinner;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeclareWinnerBody {
    pub winner: Option<Side>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<DeclareWinnerBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = DeclareWinner {
        match_id: MatchId(id),
        winner: body.winner,
        declared_at: now_millis(),
    };

    match state.declare_winner.handle(command).await {
        Ok(record) => Json(MatchDocument::from(&record)).into_response(),
        Err(e) => error_response(e),
    }
}
