use std::sync::Arc;

use crate::modules::matches::core::evolve::OverridePolicy;
use crate::modules::matches::core::ports::MatchStore;
use crate::modules::matches::core::state::CourtNames;
use crate::modules::matches::use_cases::complete_match::handler::CompleteMatchHandler;
use crate::modules::matches::use_cases::create_match::handler::CreateMatchHandler;
use crate::modules::matches::use_cases::declare_winner::handler::DeclareWinnerHandler;
use crate::modules::matches::use_cases::delete_matches::handler::DeleteMatchesHandler;
use crate::modules::matches::use_cases::evaluate_scores::handler::EvaluateScoresHandler;
use crate::modules::matches::use_cases::list_matches::handler::ListMatchesHandler;
use crate::modules::matches::use_cases::move_match::handler::MoveMatchHandler;
use crate::modules::matches::use_cases::record_scores::handler::RecordScoresHandler;

pub const DEFAULT_COURTS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    pub courts: u32,
    pub court_names: CourtNames,
    pub policy: OverridePolicy,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            courts: DEFAULT_COURTS,
            court_names: CourtNames::default(),
            policy: OverridePolicy::default(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: BoardSettings,
    pub create_match: Arc<CreateMatchHandler>,
    pub record_scores: Arc<RecordScoresHandler>,
    pub declare_winner: Arc<DeclareWinnerHandler>,
    pub move_match: Arc<MoveMatchHandler>,
    pub complete_match: Arc<CompleteMatchHandler>,
    pub delete_matches: Arc<DeleteMatchesHandler>,
    pub list_matches: Arc<ListMatchesHandler>,
    pub evaluate_scores: Arc<EvaluateScoresHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn MatchStore>, settings: BoardSettings) -> Self {
        Self {
            create_match: Arc::new(CreateMatchHandler::new(store.clone(), settings.courts)),
            record_scores: Arc::new(RecordScoresHandler::new(store.clone(), settings.policy)),
            declare_winner: Arc::new(DeclareWinnerHandler::new(store.clone())),
            move_match: Arc::new(MoveMatchHandler::new(
                store.clone(),
                settings.courts,
                settings.policy,
            )),
            complete_match: Arc::new(CompleteMatchHandler::new(store.clone())),
            delete_matches: Arc::new(DeleteMatchesHandler::new(store.clone())),
            list_matches: Arc::new(ListMatchesHandler::new(
                store,
                settings.courts,
                settings.court_names.clone(),
            )),
            evaluate_scores: Arc::new(EvaluateScoresHandler::new()),
            settings,
        }
    }
}
