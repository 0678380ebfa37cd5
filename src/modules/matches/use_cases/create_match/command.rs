use crate::modules::matches::core::game_format::GameFormat;
use crate::modules::matches::core::state::CourtPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMatch {
    pub player_a: String,
    pub player_b: String,
    pub game_format: GameFormat,
    pub memo: String,
    pub position: Option<CourtPosition>,
    pub created_at: i64,
}
