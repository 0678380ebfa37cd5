use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::matches::adapters::inbound::http::OutcomeBody;
use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::score_edits::ScoreEdits;
use crate::modules::matches::use_cases::evaluate_scores::command::EvaluateScores;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBody {
    #[serde(default)]
    pub game_format: Option<String>,
    #[serde(flatten)]
    pub edits: ScoreEdits,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EvaluateBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EvaluateScores {
        game_format: body
            .game_format
            .as_deref()
            .map(GameFormat::from_tag)
            .unwrap_or_default(),
        edits: body.edits,
    };
    let outcome = state.evaluate_scores.handle(command);
    Json(OutcomeBody::from(&outcome)).into_response()
}
