// Shared test fixtures for match records.
// Compiled into the crate only under cfg(test), exposed as crate::tests::fixtures.

use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::score::{MatchScore, Side};
use crate::modules::matches::core::state::{
    CourtPosition, MatchId, MatchRecord, MatchStatus, NewMatch, WinnerSource,
};

pub const FIXED_CREATED_AT: i64 = 1_700_000_000_000;

pub fn make_new_match(player_a: &str, player_b: &str, game_format: GameFormat) -> NewMatch {
    NewMatch {
        player_a: player_a.to_string(),
        player_b: player_b.to_string(),
        game_format,
        score: MatchScore::empty_for(game_format),
        status: MatchStatus::Unassigned,
        position: None,
        memo: String::new(),
        actual_start_time: None,
        created_at: FIXED_CREATED_AT,
    }
}

pub struct MatchRecordBuilder {
    inner: MatchRecord,
}

impl Default for MatchRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MatchRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: make_new_match("Aoki", "Baba", GameFormat::RaceTo5).into_record(MatchId(1)),
        }
    }

    pub fn id(mut self, v: u64) -> Self {
        self.inner.id = MatchId(v);
        self
    }

    pub fn players(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.inner.player_a = a.into();
        self.inner.player_b = b.into();
        self
    }

    /// Also resets the score to the empty payload of the new format.
    pub fn game_format(mut self, v: GameFormat) -> Self {
        self.inner.game_format = v;
        self.inner.score = MatchScore::empty_for(v);
        self
    }

    pub fn score(mut self, v: MatchScore) -> Self {
        self.inner.score = v;
        self
    }

    pub fn status(mut self, v: MatchStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn position(mut self, v: CourtPosition) -> Self {
        self.inner.position = Some(v);
        self
    }

    pub fn decided(mut self, winner: Side, end_time: i64) -> Self {
        self.inner.winner = Some(winner);
        self.inner.winner_source = Some(WinnerSource::Computed);
        self.inner.status = MatchStatus::Win;
        self.inner.actual_end_time = Some(end_time);
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.actual_start_time = Some(v);
        self
    }

    pub fn memo(mut self, v: impl Into<String>) -> Self {
        self.inner.memo = v.into();
        self
    }

    pub fn build(self) -> MatchRecord {
        self.inner
    }
}

#[cfg(test)]
mod match_record_builder_tests {
    use super::*;
    use crate::modules::matches::core::state::BoardRow;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = MatchRecordBuilder::default().build();
        assert_eq!(built.id, MatchId(1));
        assert_eq!(built.game_format, GameFormat::RaceTo5);
        assert_eq!(built.created_at, FIXED_CREATED_AT);
        assert!(!built.is_decided());
    }

    #[rstest]
    fn setters_override_fields() {
        let position = CourtPosition {
            court: 3,
            row: BoardRow::Next,
        };
        let built = MatchRecordBuilder::new()
            .id(9)
            .players("Chiba", "Doi")
            .game_format(GameFormat::BestOf3SixGameFullSets)
            .position(position)
            .decided(Side::B, 42)
            .build();
        assert_eq!(built.id, MatchId(9));
        assert_eq!(built.player_a, "Chiba");
        assert!(matches!(built.score, MatchScore::BestOfThree(_)));
        assert_eq!(built.position, Some(position));
        assert!(built.is_decided());
    }
}
