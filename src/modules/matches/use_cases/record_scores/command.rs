use crate::modules::matches::core::score_edits::ScoreEdits;
use crate::modules::matches::core::state::MatchId;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordScores {
    pub match_id: MatchId,
    pub edits: ScoreEdits,
    pub recorded_at: i64,
}
