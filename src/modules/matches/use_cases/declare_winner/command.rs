use crate::modules::matches::core::score::Side;
use crate::modules::matches::core::state::MatchId;

/// Manual override of the winner. `winner: None` clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareWinner {
    pub match_id: MatchId,
    pub winner: Option<Side>,
    pub declared_at: i64,
}
