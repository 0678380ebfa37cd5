use crate::modules::matches::core::evaluate::evaluate;
use crate::modules::matches::core::evolve::{EvaluationTrigger, OverridePolicy, apply_outcome};
use crate::modules::matches::core::state::{BoardRow, MatchRecord, MatchStatus};
use crate::modules::matches::use_cases::move_match::{
    command::MoveMatch,
    decision::{DecideError, Decision},
};

pub fn decide_move(
    record: MatchRecord,
    command: MoveMatch,
    courts: u32,
    policy: OverridePolicy,
) -> Decision {
    if record.status == MatchStatus::Completed {
        return Decision::Rejected {
            reason: DecideError::MatchCompleted,
        };
    }
    if let Some(position) = command.position {
        if !position.is_on_board(courts) {
            return Decision::Rejected {
                reason: DecideError::CourtOutOfRange {
                    court: position.court,
                    courts,
                },
            };
        }
    }

    let was_current = record.position.map(|p| p.row) == Some(BoardRow::Current);
    let to_current = command.position.map(|p| p.row) == Some(BoardRow::Current);

    let mut next = record;
    next.position = command.position;
    if next.winner.is_none() {
        next.status = command
            .position
            .map_or(MatchStatus::Unassigned, |p| p.row.status());
    }
    if to_current && !was_current {
        next.actual_start_time = Some(command.moved_at);
    }

    let outcome = evaluate(next.game_format, &next.score);
    Decision::Accepted {
        record: apply_outcome(
            next,
            &outcome,
            command.moved_at,
            EvaluationTrigger::Refresh,
            policy,
        ),
    }
}

#[cfg(test)]
mod move_match_decide_tests {
    use super::*;
    use crate::modules::matches::core::score::{MatchScore, Side, SingleSetScore};
    use crate::modules::matches::core::state::{CourtPosition, MatchId, WinnerSource};
    use crate::tests::fixtures::records::MatchRecordBuilder;
    use rstest::rstest;

    const NOW: i64 = 1_700_000_600_000;

    fn move_to(court: u32, row: BoardRow) -> MoveMatch {
        MoveMatch {
            match_id: MatchId(1),
            position: Some(CourtPosition { court, row }),
            moved_at: NOW,
        }
    }

    fn accepted(decision: Decision) -> MatchRecord {
        match decision {
            Decision::Accepted { record } => record,
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        }
    }

    #[rstest]
    #[case(BoardRow::Next, MatchStatus::Next, None)]
    #[case(BoardRow::Next2, MatchStatus::Next2, None)]
    #[case(BoardRow::Current, MatchStatus::Current, Some(NOW))]
    fn it_should_take_the_row_status(
        #[case] row: BoardRow,
        #[case] status: MatchStatus,
        #[case] start: Option<i64>,
    ) {
        let record = MatchRecordBuilder::new().build();
        let next = accepted(decide_move(record, move_to(2, row), 12, OverridePolicy::default()));
        assert_eq!(next.status, status);
        assert_eq!(next.actual_start_time, start);
        assert_eq!(next.position, Some(CourtPosition { court: 2, row }));
    }

    #[rstest]
    fn it_should_keep_the_start_time_when_moving_between_current_rows() {
        let record = MatchRecordBuilder::new()
            .position(CourtPosition {
                court: 1,
                row: BoardRow::Current,
            })
            .status(MatchStatus::Current)
            .start_time(NOW - 60_000)
            .build();
        let next = accepted(decide_move(
            record,
            move_to(4, BoardRow::Current),
            12,
            OverridePolicy::default(),
        ));
        assert_eq!(next.actual_start_time, Some(NOW - 60_000));
    }

    #[rstest]
    fn it_should_keep_a_decided_match_as_win() {
        let record = MatchRecordBuilder::new()
            .score(MatchScore::SingleSet(SingleSetScore::new(Some(5), Some(1))))
            .decided(Side::A, NOW - 1)
            .build();
        let next = accepted(decide_move(record, move_to(3, BoardRow::Next), 12, OverridePolicy::default()));
        assert_eq!(next.status, MatchStatus::Win);
        assert_eq!(next.actual_end_time, Some(NOW - 1));
    }

    #[rstest]
    fn it_should_keep_a_manual_winner_when_locked() {
        let mut record = MatchRecordBuilder::new().decided(Side::B, NOW - 1).build();
        record.winner_source = Some(WinnerSource::Manual);
        let next = accepted(decide_move(record.clone(), move_to(3, BoardRow::Next), 12, OverridePolicy::default()));
        assert_eq!(next.winner, Some(Side::B));

        let unlocked = OverridePolicy {
            manual_override_locks_until_score_change: false,
        };
        let next = accepted(decide_move(record, move_to(3, BoardRow::Next), 12, unlocked));
        assert_eq!(next.winner, None);
        assert_eq!(next.status, MatchStatus::Pending);
    }

    #[rstest]
    fn it_should_unassign_when_taken_off_the_board() {
        let record = MatchRecordBuilder::new()
            .position(CourtPosition {
                court: 1,
                row: BoardRow::Next,
            })
            .status(MatchStatus::Next)
            .build();
        let command = MoveMatch {
            match_id: MatchId(1),
            position: None,
            moved_at: NOW,
        };
        let next = accepted(decide_move(record, command, 12, OverridePolicy::default()));
        assert_eq!(next.status, MatchStatus::Unassigned);
        assert_eq!(next.position, None);
    }

    #[rstest]
    fn it_should_reject_a_court_off_the_board() {
        let record = MatchRecordBuilder::new().build();
        assert!(matches!(
            decide_move(record, move_to(0, BoardRow::Next), 12, OverridePolicy::default()),
            Decision::Rejected {
                reason: DecideError::CourtOutOfRange { court: 0, courts: 12 }
            }
        ));
    }

    #[rstest]
    fn it_should_reject_completed_matches() {
        let record = MatchRecordBuilder::new()
            .decided(Side::A, NOW)
            .status(MatchStatus::Completed)
            .build();
        assert!(matches!(
            decide_move(record, move_to(1, BoardRow::Next), 12, OverridePolicy::default()),
            Decision::Rejected {
                reason: DecideError::MatchCompleted
            }
        ));
    }
}
