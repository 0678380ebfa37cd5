use crate::modules::matches::core::state::MatchRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("match has no winner yet")]
    NoWinner,

    #[error("match is already completed")]
    AlreadyCompleted,
}

pub enum Decision {
    Accepted { record: MatchRecord },
    Rejected { reason: DecideError },
}
