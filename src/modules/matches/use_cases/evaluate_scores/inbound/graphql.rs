use async_graphql::{Context, Object};

use crate::modules::matches::adapters::inbound::graphql::GqlOutcome;
use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::score::ScoreInput;
use crate::modules::matches::core::score_edits::{ScoreEdits, SlotEdits};
use crate::modules::matches::use_cases::evaluate_scores::command::EvaluateScores;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EvaluateScoresQuery;

#[Object]
impl EvaluateScoresQuery {
    #[allow(clippy::too_many_arguments)]
    async fn evaluate(
        &self,
        context: &Context<'_>,
        game_format: String,
        score_a: Option<i64>,
        score_b: Option<i64>,
        tie_break_a: Option<i64>,
        tie_break_b: Option<i64>,
        set_scores_a: Option<Vec<Option<i64>>>,
        set_scores_b: Option<Vec<Option<i64>>>,
    ) -> GqlOutcome {
        let state = context.data_unchecked::<AppState>();
        let value = |v: Option<i64>| v.map(|v| Some(ScoreInput::Integer(v)));
        let slots = |values: Option<Vec<Option<i64>>>| -> Vec<Option<ScoreInput>> {
            values
                .unwrap_or_default()
                .into_iter()
                .map(|v| v.map(ScoreInput::Integer))
                .collect()
        };
        let edits = ScoreEdits {
            score_a: value(score_a),
            score_b: value(score_b),
            tie_break_a: value(tie_break_a),
            tie_break_b: value(tie_break_b),
            set_scores: Some(SlotEdits {
                a: slots(set_scores_a),
                b: slots(set_scores_b),
            }),
            set_tie_breaks: None,
        };
        let outcome = state.evaluate_scores.handle(EvaluateScores {
            game_format: GameFormat::from_tag(&game_format),
            edits,
        });
        GqlOutcome::from(&outcome)
    }
}
