//! Append-only JSON Lines store
//!
//! Each submitted application becomes one line in the store file. The id
//! and creation timestamp are assigned here, not by the form.

use super::record::{DocumentId, NewApplication, StoredApplication};
use super::traits::ApplicationStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Store file name inside the data directory
pub const STORE_FILE_NAME: &str = "loanApplications.jsonl";

pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every stored application, oldest first
    pub async fn list(&self) -> Result<Vec<StoredApplication>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("Malformed record on line {}", n + 1))
            })
            .collect()
    }
}

#[async_trait]
impl ApplicationStore for JsonlStore {
    async fn create(&self, record: &NewApplication) -> Result<DocumentId> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let stored = StoredApplication {
            id: DocumentId::generate(),
            record: record.clone(),
            created_at: Utc::now(),
        };
        let mut line = serde_json::to_string(&stored)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(id = %stored.id, path = %self.path.display(), "appended application");
        Ok(stored.id)
    }
}
