// GraphQL object types shared by the use case resolvers.

use async_graphql::SimpleObject;

use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::evaluate::{Outcome, TiebreakVisibility};
use crate::modules::matches::core::state::MatchRecord;
use crate::modules::matches::use_cases::application_error::ApplicationError;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Match")]
pub struct GqlMatch {
    pub id: u64,
    pub player_a: String,
    pub player_b: String,
    pub game_format: String,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub set_scores_a: Vec<Option<u32>>,
    pub set_scores_b: Vec<Option<u32>>,
    pub set_tie_breaks_a: Vec<Option<u32>>,
    pub set_tie_breaks_b: Vec<Option<u32>>,
    pub tie_break_a: Option<u32>,
    pub tie_break_b: Option<u32>,
    pub winner: Option<String>,
    pub winner_source: Option<String>,
    pub status: String,
    pub court_number: Option<u32>,
    pub row_position: Option<String>,
    pub memo: String,
    pub actual_start_time: Option<i64>,
    pub actual_end_time: Option<i64>,
    pub created_at: i64,
}

impl From<MatchDocument> for GqlMatch {
    fn from(d: MatchDocument) -> Self {
        Self {
            id: d.id.0,
            player_a: d.player_a,
            player_b: d.player_b,
            game_format: d.game_format.tag().to_string(),
            score_a: d.score_a,
            score_b: d.score_b,
            set_scores_a: d.set_scores.a.to_vec(),
            set_scores_b: d.set_scores.b.to_vec(),
            set_tie_breaks_a: d.set_tie_breaks.a.to_vec(),
            set_tie_breaks_b: d.set_tie_breaks.b.to_vec(),
            tie_break_a: d.tie_break_a,
            tie_break_b: d.tie_break_b,
            winner: d.winner.map(|w| w.as_str().to_string()),
            winner_source: d.winner_source.map(|s| s.as_str().to_string()),
            status: d.status.as_str().to_string(),
            court_number: d.court_number,
            row_position: d.row_position.map(|r| r.as_str().to_string()),
            memo: d.memo,
            actual_start_time: d.actual_start_time,
            actual_end_time: d.actual_end_time,
            created_at: d.created_at,
        }
    }
}

impl From<&MatchRecord> for GqlMatch {
    fn from(record: &MatchRecord) -> Self {
        MatchDocument::from(record).into()
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Outcome")]
pub struct GqlOutcome {
    pub winner: Option<String>,
    pub is_complete: bool,
    pub status: String,
    pub set_wins_a: Option<u32>,
    pub set_wins_b: Option<u32>,
    pub tiebreak_visible_a: bool,
    pub tiebreak_visible_b: bool,
    /// Per set slot, best-of-3 formats only.
    pub tiebreak_visible_sets: Vec<bool>,
}

impl From<&Outcome> for GqlOutcome {
    fn from(outcome: &Outcome) -> Self {
        let (tiebreak_visible_a, tiebreak_visible_b, tiebreak_visible_sets) = match outcome.tiebreak {
            TiebreakVisibility::Single { a, b } => (a, b, Vec::new()),
            TiebreakVisibility::PerSet { slots } => (false, false, slots.to_vec()),
        };
        Self {
            winner: outcome.winner.map(|w| w.as_str().to_string()),
            is_complete: outcome.is_complete(),
            status: outcome.status_label().as_str().to_string(),
            set_wins_a: outcome.set_wins.map(|w| w.a),
            set_wins_b: outcome.set_wins.map(|w| w.b),
            tiebreak_visible_a,
            tiebreak_visible_b,
            tiebreak_visible_sets,
        }
    }
}

pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string())
}
