use crate::modules::matches::core::state::MatchId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteMatch {
    pub match_id: MatchId,
    pub completed_at: i64,
}
