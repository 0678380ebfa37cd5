use crate::modules::matches::core::state::NewMatch;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("at least one player name is required")]
    MissingPlayers,

    #[error("court {court} is not on the board (1..={courts})")]
    CourtOutOfRange { court: u32, courts: u32 },
}

pub enum Decision {
    Accepted { new_match: NewMatch },
    Rejected { reason: DecideError },
}
