use tracing::debug;

use crate::modules::matches::core::evaluate::{Outcome, evaluate};
use crate::modules::matches::core::score::MatchScore;
use crate::modules::matches::use_cases::evaluate_scores::command::EvaluateScores;

/// Stateless preview. Fields that do not belong to the format are ignored.
#[derive(Debug, Default)]
pub struct EvaluateScoresHandler;

impl EvaluateScoresHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: EvaluateScores) -> Outcome {
        let format = command.game_format;
        let score = command.edits.apply_to(MatchScore::empty_for(format), format);
        let outcome = evaluate(format, &score);
        debug!(format = format.tag(), winner = ?outcome.winner, "evaluated preview");
        outcome
    }
}
