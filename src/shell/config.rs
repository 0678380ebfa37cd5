// Runtime configuration read from `COURT_BOARD_*` environment variables.
//
// Notes
// - Blank values count as unset.
// - `main` loads a `.env` file first, when present.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::modules::matches::core::evolve::OverridePolicy;
use crate::modules::matches::core::state::CourtNames;
use crate::shell::state::{BoardSettings, DEFAULT_COURTS};

pub const ENV_ADDR: &str = "COURT_BOARD_ADDR";
pub const ENV_STORE: &str = "COURT_BOARD_STORE";
pub const ENV_DATA_DIR: &str = "COURT_BOARD_DATA_DIR";
pub const ENV_TOURNAMENT_ID: &str = "COURT_BOARD_TOURNAMENT_ID";
pub const ENV_COURTS: &str = "COURT_BOARD_COURTS";
pub const ENV_MANUAL_OVERRIDE_LOCK: &str = "COURT_BOARD_MANUAL_OVERRIDE_LOCK";
pub const ENV_COURT_NAMES: &str = "COURT_BOARD_COURT_NAMES";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_TOURNAMENT_ID: &str = "default";
pub const MAX_COURTS: u32 = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("COURT_BOARD_ADDR is not a socket address: {0}")]
    InvalidAddr(String),

    #[error("COURT_BOARD_STORE must be `file` or `memory`, got {0}")]
    UnknownStore(String),

    #[error("COURT_BOARD_COURTS must be a number between 1 and 64, got {0}")]
    InvalidCourts(String),

    #[error("COURT_BOARD_MANUAL_OVERRIDE_LOCK must be a boolean, got {0}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    File,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub store: StoreKind,
    pub data_dir: PathBuf,
    pub tournament_id: String,
    pub board: BoardSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let addr = value(ENV_ADDR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;

        let store = match value(ENV_STORE).map(|v| v.to_ascii_lowercase()).as_deref() {
            None | Some("file") => StoreKind::File,
            Some("memory") => StoreKind::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        let courts = match value(ENV_COURTS) {
            None => DEFAULT_COURTS,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|courts| (1..=MAX_COURTS).contains(courts))
                .ok_or(ConfigError::InvalidCourts(raw))?,
        };

        let manual_override_locks_until_score_change = match value(ENV_MANUAL_OVERRIDE_LOCK) {
            None => OverridePolicy::default().manual_override_locks_until_score_change,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
        };

        Ok(Self {
            addr,
            store,
            data_dir: value(ENV_DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            tournament_id: value(ENV_TOURNAMENT_ID)
                .unwrap_or_else(|| DEFAULT_TOURNAMENT_ID.to_string()),
            board: BoardSettings {
                courts,
                court_names: value(ENV_COURT_NAMES)
                    .map(|raw| CourtNames::from_list(&raw))
                    .unwrap_or_default(),
                policy: OverridePolicy {
                    manual_override_locks_until_score_change,
                },
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
