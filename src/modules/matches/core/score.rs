// Score payloads, one fixed shape per kind of format.
//
// Purpose
// - Hold the entered scores of a match as a sum type picked from the game format at creation.
// - Coerce raw field input (numbers, numeric text, blanks) into entered or not-entered values.
//
// Boundaries
// - No input or output. Coercion never fails: bad input counts as not entered.

use serde::{Deserialize, Serialize};

use crate::modules::matches::core::game_format::{GameFormat, SET_SLOTS};

/// Highest value a score field accepts. Larger input is ignored.
pub const MAX_SCORE: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "A" | "a" => Some(Side::A),
            "B" | "b" => Some(Side::B),
            _ => None,
        }
    }
}

/// A score field as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreInput {
    Integer(i64),
    Decimal(f64),
    Text(String),
    /// Booleans, arrays and objects. Never a score.
    Other(serde_json::Value),
}

impl ScoreInput {
    pub fn coerce(&self) -> Option<u32> {
        match self {
            ScoreInput::Integer(value) => clamp_score(*value),
            ScoreInput::Decimal(value) if value.is_finite() => clamp_score(value.trunc() as i64),
            ScoreInput::Decimal(_) => None,
            ScoreInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if let Ok(value) = trimmed.parse::<i64>() {
                    return clamp_score(value);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() => clamp_score(value.trunc() as i64),
                    _ => None,
                }
            }
            ScoreInput::Other(_) => None,
        }
    }
}

impl From<u32> for ScoreInput {
    fn from(value: u32) -> Self {
        ScoreInput::Integer(i64::from(value))
    }
}

pub fn coerce_score(input: Option<&ScoreInput>) -> Option<u32> {
    input.and_then(ScoreInput::coerce)
}

fn clamp_score(value: i64) -> Option<u32> {
    if value < 0 {
        Some(0)
    } else if value > i64::from(MAX_SCORE) {
        None
    } else {
        Some(value as u32)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSetScore {
    pub a: Option<u32>,
    pub b: Option<u32>,
    pub tie_break_a: Option<u32>,
    pub tie_break_b: Option<u32>,
}

impl SingleSetScore {
    pub fn new(a: Option<u32>, b: Option<u32>) -> Self {
        Self {
            a,
            b,
            ..Self::default()
        }
    }
}

/// Per-slot game counts. Slot 2 holds match-tiebreak points in the
/// match-tiebreak formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestOfThreeScore {
    pub sets_a: [Option<u32>; SET_SLOTS],
    pub sets_b: [Option<u32>; SET_SLOTS],
    pub tie_breaks_a: [Option<u32>; SET_SLOTS],
    pub tie_breaks_b: [Option<u32>; SET_SLOTS],
}

impl BestOfThreeScore {
    pub fn from_sets(sets_a: [Option<u32>; SET_SLOTS], sets_b: [Option<u32>; SET_SLOTS]) -> Self {
        Self {
            sets_a,
            sets_b,
            ..Self::default()
        }
    }

    pub fn slot(&self, index: usize) -> Option<(u32, u32)> {
        match (self.sets_a.get(index)?, self.sets_b.get(index)?) {
            (Some(a), Some(b)) => Some((*a, *b)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchScore {
    SingleSet(SingleSetScore),
    BestOfThree(BestOfThreeScore),
}

impl MatchScore {
    /// The empty payload a new match of `format` starts with.
    pub fn empty_for(format: GameFormat) -> Self {
        if format.is_best_of_three() {
            MatchScore::BestOfThree(BestOfThreeScore::default())
        } else {
            MatchScore::SingleSet(SingleSetScore::default())
        }
    }

    pub fn fits(&self, format: GameFormat) -> bool {
        matches!(self, MatchScore::BestOfThree(_)) == format.is_best_of_three()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWins {
    pub a: u32,
    pub b: u32,
}
