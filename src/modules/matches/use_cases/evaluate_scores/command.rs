use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::score_edits::ScoreEdits;

/// A raw score document to preview, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluateScores {
    pub game_format: GameFormat,
    pub edits: ScoreEdits,
}
