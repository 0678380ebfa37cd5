use crate::modules::matches::core::state::{MatchRecord, MatchStatus};
use crate::modules::matches::use_cases::complete_match::{
    command::CompleteMatch,
    decision::{DecideError, Decision},
};

/// Moves a decided match to history. The position stays on the record so
/// history can still be filtered by court.
pub fn decide_complete(record: MatchRecord, command: CompleteMatch) -> Decision {
    if record.status == MatchStatus::Completed {
        return Decision::Rejected {
            reason: DecideError::AlreadyCompleted,
        };
    }
    if record.winner.is_none() {
        return Decision::Rejected {
            reason: DecideError::NoWinner,
        };
    }
    let mut record = record;
    record.status = MatchStatus::Completed;
    record.actual_end_time.get_or_insert(command.completed_at);
    Decision::Accepted { record }
}

#[cfg(test)]
mod complete_match_decide_tests {
    use super::*;
    use crate::modules::matches::core::score::Side;
    use crate::modules::matches::core::state::{BoardRow, CourtPosition, MatchId};
    use crate::tests::fixtures::records::MatchRecordBuilder;
    use rstest::rstest;

    const NOW: i64 = 1_700_000_600_000;

    fn complete() -> CompleteMatch {
        CompleteMatch {
            match_id: MatchId(1),
            completed_at: NOW,
        }
    }

    #[rstest]
    fn it_should_complete_a_decided_match() {
        let position = CourtPosition {
            court: 5,
            row: BoardRow::Current,
        };
        let record = MatchRecordBuilder::new()
            .position(position)
            .decided(Side::A, NOW - 10)
            .build();
        match decide_complete(record, complete()) {
            Decision::Accepted { record } => {
                assert_eq!(record.status, MatchStatus::Completed);
                assert_eq!(record.actual_end_time, Some(NOW - 10));
                assert_eq!(record.position, Some(position));
                assert!(record.is_decided());
            }
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        }
    }

    #[rstest]
    fn it_should_reject_a_match_without_winner() {
        let record = MatchRecordBuilder::new().build();
        assert!(matches!(
            decide_complete(record, complete()),
            Decision::Rejected {
                reason: DecideError::NoWinner
            }
        ));
    }

    #[rstest]
    fn it_should_reject_a_second_completion() {
        let record = MatchRecordBuilder::new()
            .decided(Side::B, NOW)
            .status(MatchStatus::Completed)
            .build();
        assert!(matches!(
            decide_complete(record, complete()),
            Decision::Rejected {
                reason: DecideError::AlreadyCompleted
            }
        ));
    }
}
