// Match outcome evaluator.
//
// Purpose
// - Decide from a format and its score payload whether a match is over, who won,
//   and which tiebreak entry fields must be shown.
//
// Responsibilities
// - Derive set-win counts for best-of-3 formats from the per-slot game counts only.
// - Stop counting at the slot that gives a side its second set.
//
// Boundaries
// - Pure and synchronous. No clock, no store. Folding the outcome into a record lives in evolve.rs.
//
// Testing guidance
// - Same inputs give the same outcome. Feeding derived values back in never changes the result.

use serde::Serialize;

use crate::modules::matches::core::game_format::{
    DeciderRule, FormatRule, GameFormat, SETS_TO_WIN, SET_SLOTS, SetRule, SingleSetRule,
};
use crate::modules::matches::core::score::{
    BestOfThreeScore, MatchScore, SetWins, Side, SingleSetScore,
};
use crate::modules::matches::core::state::MatchStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TiebreakVisibility {
    Single { a: bool, b: bool },
    PerSet { slots: [bool; SET_SLOTS] },
}

impl TiebreakVisibility {
    pub fn hidden_for(format: GameFormat) -> Self {
        if format.is_best_of_three() {
            TiebreakVisibility::PerSet {
                slots: [false; SET_SLOTS],
            }
        } else {
            TiebreakVisibility::Single { a: false, b: false }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub winner: Option<Side>,
    pub set_wins: Option<SetWins>,
    pub tiebreak: TiebreakVisibility,
}

impl Outcome {
    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }

    pub fn status_label(&self) -> MatchStatus {
        if self.is_complete() {
            MatchStatus::Win
        } else {
            MatchStatus::Pending
        }
    }
}

pub fn evaluate(format: GameFormat, score: &MatchScore) -> Outcome {
    match (format.rule(), score) {
        (FormatRule::SingleSet(rule), MatchScore::SingleSet(score)) => evaluate_single_set(rule, score),
        (FormatRule::BestOfThree { set, decider }, MatchScore::BestOfThree(score)) => {
            evaluate_best_of_three(set, decider, score)
        }
        // A payload of the other shape carries nothing usable for this format.
        _ => evaluate(format, &MatchScore::empty_for(format)),
    }
}

fn evaluate_single_set(rule: SingleSetRule, score: &SingleSetScore) -> Outcome {
    let winner = match (score.a, score.b) {
        (Some(a), Some(b)) => single_set_winner(rule, a, b),
        _ => None,
    };
    let at_boundary = match (rule, score.a, score.b) {
        (SingleSetRule::Set(set), Some(a), Some(b)) => set.is_tiebreak_boundary(a, b),
        _ => false,
    };
    Outcome {
        winner,
        set_wins: None,
        // The tiebreak score is entered on A's side only.
        tiebreak: TiebreakVisibility::Single {
            a: at_boundary,
            b: false,
        },
    }
}

fn single_set_winner(rule: SingleSetRule, a: u32, b: u32) -> Option<Side> {
    let (leader, high, low) = leader_of(a, b)?;
    let decided = match rule {
        SingleSetRule::TotalGames { total } => a + b >= total,
        SingleSetRule::FirstTo { games } => high >= games,
        SingleSetRule::Set(set) => set.is_won(high, low),
    };
    decided.then_some(leader)
}

fn evaluate_best_of_three(set: SetRule, decider: DeciderRule, score: &BestOfThreeScore) -> Outcome {
    let mut wins = SetWins::default();
    let mut slots = [false; SET_SLOTS];

    for index in 0..SET_SLOTS {
        let Some((a, b)) = score.slot(index) else {
            continue;
        };
        let is_decider = index == SET_SLOTS - 1;
        match (is_decider, decider) {
            (true, DeciderRule::MatchTiebreak { points, margin }) => {
                if let Some((leader, high, low)) = leader_of(a, b) {
                    if high >= points && high - low >= margin {
                        add_set(&mut wins, leader);
                    }
                }
            }
            _ => {
                slots[index] = set.is_tiebreak_boundary(a, b);
                if let Some((leader, high, low)) = leader_of(a, b) {
                    if set.is_won(high, low) {
                        add_set(&mut wins, leader);
                    }
                }
            }
        }
        if wins.a >= SETS_TO_WIN || wins.b >= SETS_TO_WIN {
            break;
        }
    }

    let winner = if wins.a >= SETS_TO_WIN {
        Some(Side::A)
    } else if wins.b >= SETS_TO_WIN {
        Some(Side::B)
    } else {
        None
    };

    Outcome {
        winner,
        set_wins: Some(wins),
        tiebreak: TiebreakVisibility::PerSet { slots },
    }
}

fn leader_of(a: u32, b: u32) -> Option<(Side, u32, u32)> {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Some((Side::A, a, b)),
        std::cmp::Ordering::Less => Some((Side::B, b, a)),
        std::cmp::Ordering::Equal => None,
    }
}

fn add_set(wins: &mut SetWins, side: Side) {
    match side {
        Side::A => wins.a += 1,
        Side::B => wins.b += 1,
    }
}
