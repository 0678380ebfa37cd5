// JSON file match store, one file per tournament.
//
// Purpose
// - Keep the board across restarts: `<data_dir>/matches_<tournament>.json`.
//
// Responsibilities
// - Load the file once on open. A missing file is an empty store; an unreadable one is logged and ignored.
// - Persist every mutation through a temp file and a rename, then commit it in memory.
//
// Boundaries
// - Single process. Concurrent writers in other processes are not detected.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::modules::matches::adapters::outbound::match_table::MatchTable;
use crate::modules::matches::core::document::MatchDocument;
use crate::modules::matches::core::ports::{MatchStore, MatchStoreError};
use crate::modules::matches::core::state::{MatchId, MatchRecord, NewMatch};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    #[serde(default)]
    matches: Vec<MatchDocument>,
    #[serde(default)]
    next_id: u64,
}

pub struct JsonFileMatchStore {
    path: PathBuf,
    table: RwLock<MatchTable>,
}

impl JsonFileMatchStore {
    pub async fn open(
        data_dir: impl AsRef<Path>,
        tournament_id: &str,
    ) -> Result<Self, MatchStoreError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|e| backend("create data dir", data_dir, e))?;
        let path = data_dir.join(file_name_for(tournament_id));
        let table = load_table(&path).await?;
        info!(
            path = %path.display(),
            matches = table.all().len(),
            next_id = table.next_id(),
            "opened match store"
        );
        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &MatchTable) -> Result<(), MatchStoreError> {
        let file = StoreFile {
            matches: table.to_documents(),
            next_id: table.next_id(),
        };
        let bytes = serde_json::to_vec_pretty(&file)
            .map_err(|e| MatchStoreError::Backend(format!("encode match file: {e}")))?;
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| backend("write", &temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| backend("replace", &self.path, e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "saved match store");
        Ok(())
    }

    /// Applies `change` to a copy of the table, persists the copy and only then
    /// swaps it in, so a failed write leaves memory matching the file.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut MatchTable) -> Result<T, MatchStoreError>,
    ) -> Result<T, MatchStoreError> {
        let mut guard = self.table.write().await;
        let mut next = guard.clone();
        let result = change(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(result)
    }
}

/// Tournament ids become part of a file name; anything outside `[A-Za-z0-9_-]` is replaced.
pub fn file_name_for(tournament_id: &str) -> String {
    let sanitized: String = tournament_id
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = if sanitized.is_empty() {
        "default".to_string()
    } else {
        sanitized
    };
    format!("matches_{sanitized}.json")
}

async fn load_table(path: &Path) -> Result<MatchTable, MatchStoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(MatchTable::default()),
        Err(e) => return Err(backend("read", path, e)),
    };
    match serde_json::from_slice::<StoreFile>(&bytes) {
        Ok(file) => Ok(MatchTable::from_documents(file.matches, file.next_id)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "match file is unreadable, starting empty");
            Ok(MatchTable::default())
        }
    }
}

fn backend(action: &str, path: &Path, error: std::io::Error) -> MatchStoreError {
    MatchStoreError::Backend(format!("{action} {}: {error}", path.display()))
}

#[async_trait]
impl MatchStore for JsonFileMatchStore {
    async fn add_match(&self, new_match: NewMatch) -> Result<MatchRecord, MatchStoreError> {
        self.mutate(|table| Ok(table.insert(new_match))).await
    }

    async fn get_match(&self, id: MatchId) -> Result<Option<MatchRecord>, MatchStoreError> {
        Ok(self.table.read().await.get(id))
    }

    async fn update_match(&self, record: MatchRecord) -> Result<MatchRecord, MatchStoreError> {
        self.mutate(|table| table.replace(record)).await
    }

    async fn delete_match(&self, id: MatchId) -> Result<(), MatchStoreError> {
        self.mutate(|table| table.remove(id)).await
    }

    async fn get_all_matches(&self) -> Result<Vec<MatchRecord>, MatchStoreError> {
        Ok(self.table.read().await.all())
    }

    async fn get_completed_matches(&self) -> Result<Vec<MatchRecord>, MatchStoreError> {
        Ok(self.table.read().await.completed())
    }

    async fn delete_all_matches(&self) -> Result<(), MatchStoreError> {
        self.mutate(|table| {
            table.clear();
            Ok(())
        })
        .await
    }

    async fn clear_completed_matches(&self) -> Result<usize, MatchStoreError> {
        self.mutate(|table| Ok(table.clear_completed())).await
    }
}
