use crate::modules::matches::core::state::{CourtPosition, MatchId};

/// Places a match on the board, or takes it off with `position: None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMatch {
    pub match_id: MatchId,
    pub position: Option<CourtPosition>,
    pub moved_at: i64,
}
