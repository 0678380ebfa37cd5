use crate::modules::matches::core::evaluate::evaluate;
use crate::modules::matches::core::evolve::{EvaluationTrigger, OverridePolicy, apply_outcome};
use crate::modules::matches::core::state::{MatchRecord, MatchStatus};
use crate::modules::matches::use_cases::record_scores::{
    command::RecordScores,
    decision::{DecideError, Decision},
};

pub fn decide_record(record: MatchRecord, command: RecordScores, policy: OverridePolicy) -> Decision {
    if record.status == MatchStatus::Completed {
        return Decision::Rejected {
            reason: DecideError::MatchCompleted,
        };
    }
    if !command.edits.fits(record.game_format) {
        return Decision::Rejected {
            reason: DecideError::ScoreShapeMismatch {
                format: record.game_format,
            },
        };
    }

    let mut next = record;
    next.score = command.edits.apply_to(next.score, next.game_format);
    let outcome = evaluate(next.game_format, &next.score);
    let record = apply_outcome(
        next,
        &outcome,
        command.recorded_at,
        EvaluationTrigger::ScoreEdit,
        policy,
    );
    Decision::Accepted { record, outcome }
}
