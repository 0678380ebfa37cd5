use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use court_board::modules::matches::adapters::outbound::match_store_in_memory::InMemoryMatchStore;
use court_board::modules::matches::adapters::outbound::match_store_json_file::JsonFileMatchStore;
use court_board::modules::matches::core::ports::MatchStore;
use court_board::shell::config::{AppConfig, StoreKind};
use court_board::shell::graphql::{self, GRAPHQL_PATH};
use court_board::shell::http;
use court_board::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => return Err(e).context("failed to read .env"),
        _ => {}
    }
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn MatchStore> = match config.store {
        StoreKind::File => Arc::new(
            JsonFileMatchStore::open(&config.data_dir, &config.tournament_id)
                .await
                .context("failed to open the match store")?,
        ),
        StoreKind::Memory => {
            tracing::warn!("using the in-memory match store, nothing survives a restart");
            Arc::new(InMemoryMatchStore::new())
        }
    };

    let state = AppState::new(store, config.board.clone());
    let schema = graphql::schema(state.clone());
    let app = http::router(state).merge(graphql::routes(schema));

    tracing::info!(
        courts = config.board.courts,
        tournament = %config.tournament_id,
        "GraphQL endpoint: http://{}{}",
        config.addr,
        GRAPHQL_PATH
    );
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
