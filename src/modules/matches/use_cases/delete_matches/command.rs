use crate::modules::matches::core::state::MatchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMatches {
    One(MatchId),
    All,
    Completed,
}
