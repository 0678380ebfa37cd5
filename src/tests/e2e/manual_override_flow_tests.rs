// End to end in memory test of a manual winner surviving board moves.
//
// Responsibilities
// - Drive the use case handlers through AppState, as the inbound adapters do.
// - Assert that only a score edit replaces a manual winner while the lock is on.

use std::sync::Arc;

use crate::modules::matches::adapters::outbound::match_store_in_memory::InMemoryMatchStore;
use crate::modules::matches::core::evolve::OverridePolicy;
use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::score::{ScoreInput, Side};
use crate::modules::matches::core::score_edits::ScoreEdits;
use crate::modules::matches::core::state::{
    BoardRow, CourtPosition, MatchId, MatchStatus, WinnerSource,
};
use crate::modules::matches::use_cases::complete_match::command::CompleteMatch;
use crate::modules::matches::use_cases::create_match::command::CreateMatch;
use crate::modules::matches::use_cases::declare_winner::command::DeclareWinner;
use crate::modules::matches::use_cases::list_matches::query::HistoryQuery;
use crate::modules::matches::use_cases::move_match::command::MoveMatch;
use crate::modules::matches::use_cases::record_scores::command::RecordScores;
use crate::shell::state::{AppState, BoardSettings};
use rstest::rstest;

fn scores(a: i64, b: i64) -> ScoreEdits {
    ScoreEdits {
        score_a: Some(Some(ScoreInput::Integer(a))),
        score_b: Some(Some(ScoreInput::Integer(b))),
        ..ScoreEdits::default()
    }
}

fn on_court(court: u32, row: BoardRow) -> Option<CourtPosition> {
    Some(CourtPosition { court, row })
}

async fn state_with_match(locks: bool) -> AppState {
    let settings = BoardSettings {
        courts: 4,
        policy: OverridePolicy {
            manual_override_locks_until_score_change: locks,
        },
        ..BoardSettings::default()
    };
    let state = AppState::new(Arc::new(InMemoryMatchStore::new()), settings);
    state
        .create_match
        .handle(CreateMatch {
            player_a: "Aoki".into(),
            player_b: "Baba".into(),
            game_format: GameFormat::RaceTo5,
            memo: String::new(),
            position: on_court(2, BoardRow::Next),
            created_at: 1_700_000_000_000,
        })
        .await
        .unwrap();
    state
        .record_scores
        .handle(RecordScores {
            match_id: MatchId(1),
            edits: scores(3, 2),
            recorded_at: 1_700_000_100_000,
        })
        .await
        .unwrap();
    state
        .declare_winner
        .handle(DeclareWinner {
            match_id: MatchId(1),
            winner: Some(Side::B),
            declared_at: 1_700_000_200_000,
        })
        .await
        .unwrap();
    state
}

#[rstest]
#[tokio::test]
async fn manual_winner_survives_moves_until_the_score_changes() {
    let state = state_with_match(true).await;

    let moved = state
        .move_match
        .handle(MoveMatch {
            match_id: MatchId(1),
            position: on_court(3, BoardRow::Current),
            moved_at: 1_700_000_300_000,
        })
        .await
        .unwrap();
    assert_eq!(moved.winner, Some(Side::B));
    assert_eq!(moved.winner_source, Some(WinnerSource::Manual));
    assert_eq!(moved.status, MatchStatus::Win);

    let (rescored, outcome) = state
        .record_scores
        .handle(RecordScores {
            match_id: MatchId(1),
            edits: scores(4, 1),
            recorded_at: 1_700_000_400_000,
        })
        .await
        .unwrap();
    assert_eq!(outcome.winner, Some(Side::A));
    assert_eq!(rescored.winner, Some(Side::A));
    assert_eq!(rescored.winner_source, Some(WinnerSource::Computed));

    state
        .complete_match
        .handle(CompleteMatch {
            match_id: MatchId(1),
            completed_at: 1_700_000_500_000,
        })
        .await
        .unwrap();
    let history = state
        .list_matches
        .history(&HistoryQuery {
            court: Some(3),
            ..HistoryQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert!(state.list_matches.board().await.unwrap().courts[2].current.is_empty());
}

#[rstest]
#[tokio::test]
async fn without_the_lock_a_move_re_evaluates_the_winner() {
    let state = state_with_match(false).await;

    let moved = state
        .move_match
        .handle(MoveMatch {
            match_id: MatchId(1),
            position: on_court(1, BoardRow::Next2),
            moved_at: 1_700_000_300_000,
        })
        .await
        .unwrap();
    assert_eq!(moved.winner, Some(Side::A));
    assert_eq!(moved.winner_source, Some(WinnerSource::Computed));
}
