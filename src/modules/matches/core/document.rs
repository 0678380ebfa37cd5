// Flat match document: the persisted and wire shape of a MatchRecord.
//
// Purpose
// - One camelCase document per match, the same in the tournament file and in HTTP bodies.
//
// Responsibilities
// - Map record to document and back through explicit functions.
// - For best-of-3 formats, publish the derived set wins in scoreA/scoreB. They are never read back.
//
// Boundaries
// - Stored documents may predate fields; every field except id tolerates being absent.

use serde::{Deserialize, Serialize};

use crate::modules::matches::core::evaluate::evaluate;
use crate::modules::matches::core::game_format::{GameFormat, SET_SLOTS};
use crate::modules::matches::core::score::{BestOfThreeScore, MatchScore, Side, SingleSetScore};
use crate::modules::matches::core::state::{
    BoardRow, CourtPosition, MatchId, MatchRecord, MatchStatus, WinnerSource,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSlots {
    #[serde(rename = "A", default)]
    pub a: [Option<u32>; SET_SLOTS],
    #[serde(rename = "B", default)]
    pub b: [Option<u32>; SET_SLOTS],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDocument {
    pub id: MatchId,
    #[serde(default)]
    pub player_a: String,
    #[serde(default)]
    pub player_b: String,
    #[serde(default)]
    pub game_format: GameFormat,
    #[serde(default)]
    pub score_a: Option<u32>,
    #[serde(default)]
    pub score_b: Option<u32>,
    #[serde(default)]
    pub set_scores: SideSlots,
    #[serde(default)]
    pub set_tie_breaks: SideSlots,
    #[serde(default)]
    pub tie_break_a: Option<u32>,
    #[serde(default)]
    pub tie_break_b: Option<u32>,
    #[serde(default)]
    pub winner: Option<Side>,
    #[serde(default)]
    pub winner_source: Option<WinnerSource>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub court_number: Option<u32>,
    #[serde(default)]
    pub row_position: Option<BoardRow>,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub actual_start_time: Option<i64>,
    #[serde(default)]
    pub actual_end_time: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
}

impl From<&MatchRecord> for MatchDocument {
    fn from(record: &MatchRecord) -> Self {
        let (score_a, score_b, tie_break_a, tie_break_b, set_scores, set_tie_breaks) =
            match &record.score {
                MatchScore::SingleSet(score) => (
                    score.a,
                    score.b,
                    score.tie_break_a,
                    score.tie_break_b,
                    SideSlots::default(),
                    SideSlots::default(),
                ),
                MatchScore::BestOfThree(score) => {
                    let set_wins = evaluate(record.game_format, &record.score)
                        .set_wins
                        .unwrap_or_default();
                    (
                        Some(set_wins.a),
                        Some(set_wins.b),
                        None,
                        None,
                        SideSlots {
                            a: score.sets_a,
                            b: score.sets_b,
                        },
                        SideSlots {
                            a: score.tie_breaks_a,
                            b: score.tie_breaks_b,
                        },
                    )
                }
            };

        Self {
            id: record.id,
            player_a: record.player_a.clone(),
            player_b: record.player_b.clone(),
            game_format: record.game_format,
            score_a,
            score_b,
            set_scores,
            set_tie_breaks,
            tie_break_a,
            tie_break_b,
            winner: record.winner,
            winner_source: record.winner_source,
            status: record.status,
            court_number: record.position.map(|p| p.court),
            row_position: record.position.map(|p| p.row),
            memo: record.memo.clone(),
            actual_start_time: record.actual_start_time,
            actual_end_time: record.actual_end_time,
            created_at: record.created_at,
        }
    }
}

impl From<MatchRecord> for MatchDocument {
    fn from(record: MatchRecord) -> Self {
        MatchDocument::from(&record)
    }
}

impl MatchDocument {
    pub fn into_record(self) -> MatchRecord {
        let score = score_from_document(&self);
        let position = match (self.court_number, self.row_position) {
            (Some(court), Some(row)) => Some(CourtPosition { court, row }),
            _ => None,
        };
        // Documents written before winnerSource existed only carry computed winners.
        let winner_source = self
            .winner
            .map(|_| self.winner_source.unwrap_or(WinnerSource::Computed));

        MatchRecord {
            id: self.id,
            player_a: self.player_a,
            player_b: self.player_b,
            game_format: self.game_format,
            score,
            winner: self.winner,
            winner_source,
            status: self.status,
            position,
            memo: self.memo,
            actual_start_time: self.actual_start_time,
            actual_end_time: self.actual_end_time,
            created_at: self.created_at,
        }
    }
}

fn score_from_document(document: &MatchDocument) -> MatchScore {
    if document.game_format.is_best_of_three() {
        MatchScore::BestOfThree(BestOfThreeScore {
            sets_a: document.set_scores.a,
            sets_b: document.set_scores.b,
            tie_breaks_a: document.set_tie_breaks.a,
            tie_breaks_b: document.set_tie_breaks.b,
        })
    } else {
        MatchScore::SingleSet(SingleSetScore {
            a: document.score_a,
            b: document.score_b,
            tie_break_a: document.tie_break_a,
            tie_break_b: document.tie_break_b,
        })
    }
}
