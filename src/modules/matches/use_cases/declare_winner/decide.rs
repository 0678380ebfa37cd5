use crate::modules::matches::core::evolve::apply_manual_winner;
use crate::modules::matches::core::state::{MatchRecord, MatchStatus};
use crate::modules::matches::use_cases::declare_winner::{
    command::DeclareWinner,
    decision::{DecideError, Decision},
};

pub fn decide_declare(record: MatchRecord, command: DeclareWinner) -> Decision {
    if record.status == MatchStatus::Completed {
        return Decision::Rejected {
            reason: DecideError::MatchCompleted,
        };
    }
    Decision::Accepted {
        record: apply_manual_winner(record, command.winner, command.declared_at),
    }
}
