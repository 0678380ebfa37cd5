// Shared AppState fixtures for inbound adapter tests.

use std::sync::Arc;

use crate::modules::matches::adapters::outbound::match_store_in_memory::InMemoryMatchStore;
use crate::modules::matches::core::ports::MatchStore;
use crate::shell::state::{AppState, BoardSettings};

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryMatchStore::new()), BoardSettings::default())
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryMatchStore::new();
    store.toggle_offline();
    let store: Arc<dyn MatchStore> = Arc::new(store);
    AppState::new(store, BoardSettings::default())
}
