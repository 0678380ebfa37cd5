use crate::modules::matches::core::state::MatchRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("match is already completed")]
    MatchCompleted,
}

pub enum Decision {
    Accepted { record: MatchRecord },
    Rejected { reason: DecideError },
}
