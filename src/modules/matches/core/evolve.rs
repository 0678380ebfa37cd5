// Evolve functions: fold an evaluator outcome or a manual winner into a match record.
//
// Purpose
// - Keep winner, status and end time consistent: a winner always comes with an end time.
//
// Boundaries
// - No input or output. The caller passes the current time.
//
// Testing guidance
// - Applying the same outcome twice must leave the record unchanged after the first time.

use crate::modules::matches::core::evaluate::Outcome;
use crate::modules::matches::core::score::Side;
use crate::modules::matches::core::state::{MatchRecord, MatchStatus, WinnerSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationTrigger {
    /// A score field changed.
    ScoreEdit,
    /// Anything else that re-runs the evaluator, such as a board move.
    Refresh,
}

/// How a manually declared winner interacts with later evaluations.
///
/// With `manual_override_locks_until_score_change` set, a manual winner is kept
/// through refreshes and replaced by the computed result on the next score
/// edit. Without it, every evaluation recomputes the winner from the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverridePolicy {
    pub manual_override_locks_until_score_change: bool,
}

impl Default for OverridePolicy {
    fn default() -> Self {
        Self {
            manual_override_locks_until_score_change: true,
        }
    }
}

pub fn apply_outcome(
    mut record: MatchRecord,
    outcome: &Outcome,
    now: i64,
    trigger: EvaluationTrigger,
    policy: OverridePolicy,
) -> MatchRecord {
    if record.status == MatchStatus::Completed {
        return record;
    }
    let manual_lock = record.winner_source == Some(WinnerSource::Manual)
        && trigger == EvaluationTrigger::Refresh
        && policy.manual_override_locks_until_score_change;
    if manual_lock {
        return record;
    }

    match (record.winner, outcome.winner) {
        (None, None) => {}
        (_, Some(winner)) => {
            record.winner = Some(winner);
            record.winner_source = Some(WinnerSource::Computed);
            record.status = MatchStatus::Win;
            record.actual_end_time.get_or_insert(now);
        }
        (Some(_), None) => clear_winner(&mut record),
    }
    record
}

pub fn apply_manual_winner(mut record: MatchRecord, winner: Option<Side>, now: i64) -> MatchRecord {
    match winner {
        Some(winner) => {
            record.winner = Some(winner);
            record.winner_source = Some(WinnerSource::Manual);
            record.status = MatchStatus::Win;
            record.actual_end_time.get_or_insert(now);
        }
        None => clear_winner(&mut record),
    }
    record
}

fn clear_winner(record: &mut MatchRecord) {
    record.winner = None;
    record.winner_source = None;
    record.status = MatchStatus::Pending;
    record.actual_end_time = None;
}
