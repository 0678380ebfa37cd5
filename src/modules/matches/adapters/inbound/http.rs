// Shared pieces of the HTTP inbound adapters.
//
// Responsibilities
// - Map application errors to status codes and a small JSON error body.
// - Render evaluator outcomes in the flat camelCase vocabulary of the board.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, error};

use crate::modules::matches::core::evaluate::{Outcome, TiebreakVisibility};
use crate::modules::matches::core::ports::MatchStoreError;
use crate::modules::matches::core::score::{SetWins, Side};
use crate::modules::matches::core::state::{BoardRow, CourtPosition, MatchStatus};
use crate::modules::matches::use_cases::application_error::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::NotFound(_) | ApplicationError::Store(MatchStoreError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Store(MatchStoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        error!(error = %error, "request failed");
    } else {
        debug!(error = %error, status = status.as_u16(), "request rejected");
    }
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

/// Builds a board position from the flat `courtNumber` / `rowPosition` pair.
/// Both or neither must be present.
pub fn position_from(
    court_number: Option<u32>,
    row_position: Option<BoardRow>,
) -> Result<Option<CourtPosition>, ApplicationError> {
    match (court_number, row_position) {
        (Some(court), Some(row)) => Ok(Some(CourtPosition { court, row })),
        (None, None) => Ok(None),
        _ => Err(ApplicationError::InvalidInput(
            "courtNumber and rowPosition must be sent together".into(),
        )),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeBody {
    pub winner: Option<Side>,
    pub is_complete: bool,
    pub status: MatchStatus,
    pub set_wins: Option<SetWins>,
    pub tiebreak: TiebreakVisibility,
}

impl From<&Outcome> for OutcomeBody {
    fn from(outcome: &Outcome) -> Self {
        Self {
            winner: outcome.winner,
            is_complete: outcome.is_complete(),
            status: outcome.status_label(),
            set_wins: outcome.set_wins,
            tiebreak: outcome.tiebreak,
        }
    }
}

#[cfg(test)]
mod matches_http_inbound_shared_tests {
    use super::*;
    use crate::modules::matches::core::state::MatchId;
    use rstest::rstest;

    #[rstest]
    #[case(ApplicationError::NotFound(MatchId(1)), StatusCode::NOT_FOUND)]
    #[case(ApplicationError::Store(MatchStoreError::NotFound(MatchId(1))), StatusCode::NOT_FOUND)]
    #[case(ApplicationError::Domain("x".into()), StatusCode::CONFLICT)]
    #[case(ApplicationError::InvalidInput("x".into()), StatusCode::BAD_REQUEST)]
    #[case(
        ApplicationError::Store(MatchStoreError::Backend("x".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn it_should_map_errors_to_status_codes(
        #[case] error: ApplicationError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(status_for(&error), expected);
    }

    #[rstest]
    fn it_should_require_court_and_row_together() {
        assert_eq!(
            position_from(Some(2), Some(BoardRow::Next)).unwrap(),
            Some(CourtPosition {
                court: 2,
                row: BoardRow::Next
            })
        );
        assert_eq!(position_from(None, None).unwrap(), None);
        assert!(matches!(
            position_from(Some(2), None),
            Err(ApplicationError::InvalidInput(_))
        ));
    }
}
