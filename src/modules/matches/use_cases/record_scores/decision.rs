use crate::modules::matches::core::evaluate::Outcome;
use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::state::MatchRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("match is already completed")]
    MatchCompleted,

    #[error("score fields do not fit the {format} format")]
    ScoreShapeMismatch { format: GameFormat },
}

pub enum Decision {
    Accepted { record: MatchRecord, outcome: Outcome },
    Rejected { reason: DecideError },
}
