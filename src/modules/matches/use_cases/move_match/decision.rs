use crate::modules::matches::core::state::MatchRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("match is already completed")]
    MatchCompleted,

    #[error("court {court} is not on the board (1..={courts})")]
    CourtOutOfRange { court: u32, courts: u32 },
}

pub enum Decision {
    Accepted { record: MatchRecord },
    Rejected { reason: DecideError },
}
