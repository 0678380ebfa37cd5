use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::matches::adapters::inbound::http::{error_response, position_from};
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::state::{BoardRow, MatchId};
use crate::modules::matches::use_cases::move_match::command::MoveMatch;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

/// Both fields null (or absent) takes the match off the board.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveMatchBody {
    #[serde(default)]
    pub court_number: Option<u32>,
    #[serde(default)]
    pub row_position: Option<BoardRow>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<MoveMatchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let position = match position_from(body.court_number, body.row_position) {
        Ok(position) => position,
        Err(e) => return error_response(e),
    };

    let command = MoveMatch {
        match_id: MatchId(id),
        position,
        moved_at: now_millis(),
    };

    match state.move_match.handle(command).await {
        Ok(record) => Json(MatchDocument::from(&record)).into_response(),
        Err(e) => error_response(e),
    }
}
