use crate::modules::matches::core::score::MatchScore;
use crate::modules::matches::core::state::{BoardRow, MatchStatus, NewMatch};
use crate::modules::matches::use_cases::create_match::{
    command::CreateMatch,
    decision::{DecideError, Decision},
};

pub fn decide_create(command: CreateMatch, courts: u32) -> Decision {
    let player_a = command.player_a.trim().to_string();
    let player_b = command.player_b.trim().to_string();
    if player_a.is_empty() && player_b.is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingPlayers,
        };
    }
    if let Some(position) = command.position {
        if !position.is_on_board(courts) {
            return Decision::Rejected {
                reason: DecideError::CourtOutOfRange {
                    court: position.court,
                    courts,
                },
            };
        }
    }

    let status = command
        .position
        .map_or(MatchStatus::Unassigned, |p| p.row.status());
    let actual_start_time = command
        .position
        .filter(|p| p.row == BoardRow::Current)
        .map(|_| command.created_at);

    Decision::Accepted {
        new_match: NewMatch {
            player_a,
            player_b,
            game_format: command.game_format,
            score: MatchScore::empty_for(command.game_format),
            status,
            position: command.position,
            memo: command.memo,
            actual_start_time,
            created_at: command.created_at,
        },
    }
}
