//! JSON document store backing both the Character Store and the Mission Tracker
//!
//! The whole game state lives in one document, `{ "heroes": [...], "missions": [...] }`.
//! Every mutation rewrites the document to a temp file and renames it over the
//! original, so a crash never leaves a half-written file behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::entities::{seed_missions, Hero, Mission};
use crate::domain::value_objects::class_skills;

/// Persisted layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgeDocument {
    #[serde(default)]
    pub heroes: Vec<Hero>,
    /// Documents without a mission list start from the seed missions
    #[serde(default = "seed_missions")]
    pub missions: Vec<Mission>,
}

impl ForgeDocument {
    /// Empty hero roster with the seed missions
    pub fn fresh() -> Self {
        Self {
            heroes: Vec::new(),
            missions: seed_missions(),
        }
    }
}

/// Single-writer document store
pub struct JsonDocumentStore {
    path: Option<PathBuf>,
    document: RwLock<ForgeDocument>,
}

impl JsonDocumentStore {
    /// Open the document at `path`, starting fresh if it does not exist yet
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut document: ForgeDocument = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No data file at {}, starting fresh", path.display());
                ForgeDocument::fresh()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        // Older documents may predate skills
        for hero in document.heroes.iter_mut().filter(|h| h.skills.is_empty()) {
            hero.skills = class_skills(&hero.class);
        }

        Ok(Self {
            path: Some(path),
            document: RwLock::new(document),
        })
    }

    /// Store that never touches the filesystem
    pub fn in_memory() -> Self {
        Self {
            path: None,
            document: RwLock::new(ForgeDocument::fresh()),
        }
    }

    /// Run `f` against the current document
    pub async fn read<T>(&self, f: impl FnOnce(&ForgeDocument) -> T) -> T {
        let document = self.document.read().await;
        f(&document)
    }

    /// Apply `f` to a copy of the document, persist it, then make it current.
    ///
    /// If `f` or the write fails, the in-memory document is left unchanged.
    pub async fn update<T, F>(&self, f: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(&mut ForgeDocument) -> Result<T> + Send,
    {
        let mut document = self.document.write().await;
        let mut next = document.clone();
        let value = f(&mut next)?;

        self.persist(&next).await?;
        *document = next;
        Ok(value)
    }

    async fn persist(&self, document: &ForgeDocument) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let bytes =
            serde_json::to_vec_pretty(document).context("Failed to serialize document")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        tokio::fs::rename(&temp_path, path)
            .await
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        tracing::debug!("Saved document to {}", path.display());
        Ok(())
    }
}
