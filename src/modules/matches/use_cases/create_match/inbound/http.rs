use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::matches::adapters::inbound::http::{error_response, position_from};
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::state::BoardRow;
use crate::modules::matches::use_cases::create_match::command::CreateMatch;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchBody {
    #[serde(default)]
    pub player_a: String,
    #[serde(default)]
    pub player_b: String,
    #[serde(default)]
    pub game_format: Option<String>,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub court_number: Option<u32>,
    #[serde(default)]
    pub row_position: Option<BoardRow>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateMatchBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let position = match position_from(body.court_number, body.row_position) {
        Ok(position) => position,
        Err(e) => return error_response(e),
    };

    let command = CreateMatch {
        player_a: body.player_a,
        player_b: body.player_b,
        game_format: body
            .game_format
            .as_deref()
            .map(GameFormat::from_tag)
            .unwrap_or_default(),
        memo: body.memo,
        position,
        created_at: now_millis(),
    };

    match state.create_match.handle(command).await {
        Ok(record) => (StatusCode::CREATED, Json(MatchDocument::from(&record))).into_response(),
        Err(e) => error_response(e),
    }
}
