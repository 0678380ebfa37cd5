// MatchRecord is the canonical domain state of one match on the board.
//
// Notes
// - All i64 time values are epoch milliseconds.
// - Use Option for times that are not set yet instead of sentinel values.

use serde::{Deserialize, Serialize};

use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::score::{MatchScore, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u64);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Unassigned,
    Current,
    Next,
    Next2,
    Pending,
    Win,
    Completed,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Unassigned => "Unassigned",
            MatchStatus::Current => "Current",
            MatchStatus::Next => "Next",
            MatchStatus::Next2 => "Next2",
            MatchStatus::Pending => "Pending",
            MatchStatus::Win => "Win",
            MatchStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardRow {
    Current,
    Next,
    Next2,
}

impl BoardRow {
    pub const ALL: [BoardRow; 3] = [BoardRow::Current, BoardRow::Next, BoardRow::Next2];

    pub fn as_str(self) -> &'static str {
        match self {
            BoardRow::Current => "current",
            BoardRow::Next => "next",
            BoardRow::Next2 => "next2",
        }
    }

    pub fn status(self) -> MatchStatus {
        match self {
            BoardRow::Current => MatchStatus::Current,
            BoardRow::Next => MatchStatus::Next,
            BoardRow::Next2 => MatchStatus::Next2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourtPosition {
    pub court: u32,
    pub row: BoardRow,
}

impl CourtPosition {
    /// Courts are numbered from 1.
    pub fn is_on_board(&self, courts: u32) -> bool {
        (1..=courts).contains(&self.court)
    }
}

/// Display names of the courts, by court number. Courts without a custom
/// name are called `Court <n>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtNames(Vec<String>);

impl CourtNames {
    /// Parses a comma separated list in court order. Blank entries keep the
    /// default name.
    pub fn from_list(raw: &str) -> Self {
        Self(raw.split(',').map(|name| name.trim().to_string()).collect())
    }

    pub fn name_for(&self, court: u32) -> String {
        court
            .checked_sub(1)
            .and_then(|index| self.0.get(index as usize))
            .filter(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Court {court}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinnerSource {
    Computed,
    Manual,
}

impl WinnerSource {
    pub fn as_str(self) -> &'static str {
        match self {
            WinnerSource::Computed => "Computed",
            WinnerSource::Manual => "Manual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub id: MatchId,
    pub player_a: String,
    pub player_b: String,
    pub game_format: GameFormat,
    pub score: MatchScore,
    pub winner: Option<Side>,
    pub winner_source: Option<WinnerSource>,
    pub status: MatchStatus,
    pub position: Option<CourtPosition>,
    pub memo: String,
    pub actual_start_time: Option<i64>,
    pub actual_end_time: Option<i64>,
    pub created_at: i64,
}

impl MatchRecord {
    pub fn is_decided(&self) -> bool {
        self.winner.is_some() && self.actual_end_time.is_some()
    }
}

/// Everything a store needs to create a record; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub player_a: String,
    pub player_b: String,
    pub game_format: GameFormat,
    pub score: MatchScore,
    pub status: MatchStatus,
    pub position: Option<CourtPosition>,
    pub memo: String,
    pub actual_start_time: Option<i64>,
    pub created_at: i64,
}

impl NewMatch {
    pub fn into_record(self, id: MatchId) -> MatchRecord {
        MatchRecord {
            id,
            player_a: self.player_a,
            player_b: self.player_b,
            game_format: self.game_format,
            score: self.score,
            winner: None,
            winner_source: None,
            status: self.status,
            position: self.position,
            memo: self.memo,
            actual_start_time: self.actual_start_time,
            actual_end_time: None,
            created_at: self.created_at,
        }
    }
}
