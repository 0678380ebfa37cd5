use async_graphql::{Context, MaybeUndefined, Object, Result as GqlResult};

use crate::modules::matches::adapters::inbound::graphql::{GqlMatch, gql_error};
use crate::modules::matches::core::score::ScoreInput;
use crate::modules::matches::core::score_edits::{FieldEdit, ScoreEdits, SlotEdits};
use crate::modules::matches::core::state::MatchId;
use crate::modules::matches::use_cases::record_scores::command::RecordScores;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordScoresMutation;

#[Object]
impl RecordScoresMutation {
    #[allow(clippy::too_many_arguments)]
    async fn record_scores(
        &self,
        context: &Context<'_>,
        id: u64,
        score_a: MaybeUndefined<i64>,
        score_b: MaybeUndefined<i64>,
        tie_break_a: MaybeUndefined<i64>,
        tie_break_b: MaybeUndefined<i64>,
        set_scores_a: Option<Vec<Option<i64>>>,
        set_scores_b: Option<Vec<Option<i64>>>,
        set_tie_breaks_a: Option<Vec<Option<i64>>>,
        set_tie_breaks_b: Option<Vec<Option<i64>>>,
    ) -> GqlResult<GqlMatch> {
        let state = context.data_unchecked::<AppState>();
        let edits = ScoreEdits {
            score_a: field_edit(score_a),
            score_b: field_edit(score_b),
            tie_break_a: field_edit(tie_break_a),
            tie_break_b: field_edit(tie_break_b),
            set_scores: slot_edits(set_scores_a, set_scores_b),
            set_tie_breaks: slot_edits(set_tie_breaks_a, set_tie_breaks_b),
        };
        let command = RecordScores {
            match_id: MatchId(id),
            edits,
            recorded_at: now_millis(),
        };
        let (record, _) = state.record_scores.handle(command).await.map_err(gql_error)?;
        Ok(GqlMatch::from(&record))
    }
}

fn field_edit(value: MaybeUndefined<i64>) -> FieldEdit {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(ScoreInput::Integer(v))),
    }
}

fn slot_edits(a: Option<Vec<Option<i64>>>, b: Option<Vec<Option<i64>>>) -> Option<SlotEdits> {
    if a.is_none() && b.is_none() {
        return None;
    }
    let slots = |values: Option<Vec<Option<i64>>>| -> Vec<Option<ScoreInput>> {
        values
            .unwrap_or_default()
            .into_iter()
            .map(|v| v.map(ScoreInput::Integer))
            .collect()
    };
    Some(SlotEdits {
        a: slots(a),
        b: slots(b),
    })
}
