// Game formats and the rule table the evaluator dispatches on.
//
// Purpose
// - Name every supported scoring format once, with its wire tag and display label.
// - Carry the threshold constants of each format in its rule, so the evaluator never branches on tags.
//
// Boundaries
// - No input or output. Unknown tags fall back to the race-to-5 format.

use serde::{Deserialize, Serialize};

pub const RACE_TOTAL_GAMES: u32 = 5;
pub const SHORT_SET_GAMES: u32 = 4;
pub const REGULAR_SET_GAMES: u32 = 6;
pub const PRO_SET_GAMES: u32 = 8;
pub const MATCH_TIEBREAK_POINTS: u32 = 10;
pub const MATCH_TIEBREAK_MARGIN: u32 = 2;
pub const SETS_TO_WIN: u32 = 2;
pub const SET_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum GameFormat {
    #[default]
    RaceTo5,
    OneSet4Game,
    OneSet6Game,
    ProSet8Game,
    BestOf3FourGameMatchTiebreak,
    BestOf3SixGameMatchTiebreak,
    BestOf3FourGameFullSets,
    BestOf3SixGameFullSets,
}

impl GameFormat {
    pub const ALL: [GameFormat; 8] = [
        GameFormat::RaceTo5,
        GameFormat::OneSet4Game,
        GameFormat::OneSet6Game,
        GameFormat::ProSet8Game,
        GameFormat::BestOf3FourGameMatchTiebreak,
        GameFormat::BestOf3SixGameMatchTiebreak,
        GameFormat::BestOf3FourGameFullSets,
        GameFormat::BestOf3SixGameFullSets,
    ];

    /// Parses a stored or submitted tag. Matching is case-insensitive and
    /// accepts the short labels; anything unrecognised is race-to-5.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "4game1set" | "4g1set" => GameFormat::OneSet4Game,
            "6game1set" | "6g1set" => GameFormat::OneSet6Game,
            "8game1set" | "8game-pro" | "8g-pro" => GameFormat::ProSet8Game,
            "4game2set" | "4g2set+10mtb" => GameFormat::BestOf3FourGameMatchTiebreak,
            "6game2set" | "6g2set+10mtb" => GameFormat::BestOf3SixGameMatchTiebreak,
            "4game3set" | "4g3set" => GameFormat::BestOf3FourGameFullSets,
            "6game3set" | "6g3set" => GameFormat::BestOf3SixGameFullSets,
            _ => GameFormat::RaceTo5,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            GameFormat::RaceTo5 => "5game",
            GameFormat::OneSet4Game => "4game1set",
            GameFormat::OneSet6Game => "6game1set",
            GameFormat::ProSet8Game => "8game1set",
            GameFormat::BestOf3FourGameMatchTiebreak => "4game2set",
            GameFormat::BestOf3SixGameMatchTiebreak => "6game2set",
            GameFormat::BestOf3FourGameFullSets => "4game3set",
            GameFormat::BestOf3SixGameFullSets => "6game3set",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameFormat::RaceTo5 => "5G",
            GameFormat::OneSet4Game => "4G1set",
            GameFormat::OneSet6Game => "6G1set",
            GameFormat::ProSet8Game => "8G-Pro",
            GameFormat::BestOf3FourGameMatchTiebreak => "4G2set+10MTB",
            GameFormat::BestOf3SixGameMatchTiebreak => "6G2set+10MTB",
            GameFormat::BestOf3FourGameFullSets => "4G3set",
            GameFormat::BestOf3SixGameFullSets => "6G3set",
        }
    }

    pub fn rule(self) -> FormatRule {
        let short_set = SetRule { games: SHORT_SET_GAMES };
        let regular_set = SetRule { games: REGULAR_SET_GAMES };
        let match_tiebreak = DeciderRule::MatchTiebreak {
            points: MATCH_TIEBREAK_POINTS,
            margin: MATCH_TIEBREAK_MARGIN,
        };
        match self {
            GameFormat::RaceTo5 => FormatRule::SingleSet(SingleSetRule::TotalGames {
                total: RACE_TOTAL_GAMES,
            }),
            GameFormat::OneSet4Game => FormatRule::SingleSet(SingleSetRule::FirstTo {
                games: SHORT_SET_GAMES,
            }),
            GameFormat::OneSet6Game => FormatRule::SingleSet(SingleSetRule::Set(regular_set)),
            GameFormat::ProSet8Game => FormatRule::SingleSet(SingleSetRule::FirstTo {
                games: PRO_SET_GAMES,
            }),
            GameFormat::BestOf3FourGameMatchTiebreak => FormatRule::BestOfThree {
                set: short_set,
                decider: match_tiebreak,
            },
            GameFormat::BestOf3SixGameMatchTiebreak => FormatRule::BestOfThree {
                set: regular_set,
                decider: match_tiebreak,
            },
            GameFormat::BestOf3FourGameFullSets => FormatRule::BestOfThree {
                set: short_set,
                decider: DeciderRule::FullSet,
            },
            GameFormat::BestOf3SixGameFullSets => FormatRule::BestOfThree {
                set: regular_set,
                decider: DeciderRule::FullSet,
            },
        }
    }

    pub fn is_best_of_three(self) -> bool {
        matches!(self.rule(), FormatRule::BestOfThree { .. })
    }
}

impl From<String> for GameFormat {
    fn from(tag: String) -> Self {
        GameFormat::from_tag(&tag)
    }
}

impl From<GameFormat> for &'static str {
    fn from(format: GameFormat) -> Self {
        format.tag()
    }
}

impl std::fmt::Display for GameFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    SingleSet(SingleSetRule),
    /// Two regular set slots followed by a deciding slot.
    BestOfThree { set: SetRule, decider: DeciderRule },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSetRule {
    /// Decided once both scores add up to `total`.
    TotalGames { total: u32 },
    /// Leader reaches `games`, no margin required.
    FirstTo { games: u32 },
    Set(SetRule),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeciderRule {
    FullSet,
    MatchTiebreak { points: u32, margin: u32 },
}

/// A set to `games` games: won by two at `games`, or by one at `games + 1`
/// (the tiebreak game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRule {
    pub games: u32,
}

impl SetRule {
    pub fn is_won(self, leader: u32, trailer: u32) -> bool {
        let margin = leader.saturating_sub(trailer);
        (leader >= self.games && margin >= 2) || (leader > self.games && margin >= 1)
    }

    pub fn is_tiebreak_boundary(self, a: u32, b: u32) -> bool {
        let (high, low) = (self.games + 1, self.games);
        (a == high && b == low) || (a == low && b == high)
    }
}
