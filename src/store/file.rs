// ABOUTME: File-backed recipe store keeping each collection in its own JSON document
// ABOUTME: Documents are replaced atomically via a temp file renamed over the target
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::RecipeStore;
use crate::constants::store::{DETAILS_FILE, SUMMARIES_FILE};
use crate::errors::{AppError, AppResult};
use crate::models::{RecipeDetailBatch, RecipeSummary};
use serde::de::DeserializeOwned;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

/// Store persisting `recipes.json` and `recipe_details.json` under a directory
///
/// Writers are serialized by a mutex. Readers take no lock: a document is only
/// ever swapped in by rename, so a read sees a complete old or new document.
#[derive(Clone)]
pub struct JsonFileRecipeStore {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileRecipeStore {
    /// Open the store, creating the data directory if needed
    ///
    /// Existing documents are picked up as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub async fn open(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "Failed to create data directory {}",
                data_dir.display()
            ))
            .with_source(e)
        })?;

        debug!("Opened JSON file recipe store at {}", data_dir.display());
        Ok(Self {
            data_dir,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Directory holding the documents
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn summaries_path(&self) -> PathBuf {
        self.data_dir.join(SUMMARIES_FILE)
    }

    fn details_path(&self) -> PathBuf {
        self.data_dir.join(DETAILS_FILE)
    }
}

#[async_trait::async_trait]
impl RecipeStore for JsonFileRecipeStore {
    async fn replace_summaries(&self, summaries: Vec<RecipeSummary>) -> AppResult<()> {
        let bytes = serde_json::to_vec_pretty(&summaries)?;
        let summaries_path = self.summaries_path();
        let details_path = self.details_path();

        let _guard = self.write_lock.lock().await;
        // Details go first: a crash in between leaves no stale batch behind
        blocking(move || {
            remove_if_exists(&details_path)?;
            write_atomic(&summaries_path, &bytes)
        })
        .await
    }

    async fn replace_details(&self, batch: RecipeDetailBatch) -> AppResult<bool> {
        let bytes = serde_json::to_vec_pretty(&batch)?;
        let summaries_path = self.summaries_path();
        let details_path = self.details_path();

        let _guard = self.write_lock.lock().await;
        blocking(move || {
            let summaries: Option<Vec<RecipeSummary>> = read_document(&summaries_path)?;
            if !summaries.is_some_and(|summaries| batch.fetched_for(&summaries)) {
                return Ok(false);
            }
            write_atomic(&details_path, &bytes)?;
            Ok(true)
        })
        .await
    }

    async fn summaries(&self) -> AppResult<Option<Vec<RecipeSummary>>> {
        let path = self.summaries_path();
        blocking(move || read_document(&path)).await
    }

    async fn details(&self) -> AppResult<Option<RecipeDetailBatch>> {
        let path = self.details_path();
        blocking(move || read_document(&path)).await
    }

    async fn health_check(&self) -> AppResult<()> {
        let metadata = tokio::fs::metadata(&self.data_dir).await.map_err(|e| {
            AppError::storage(format!(
                "Data directory {} is not accessible",
                self.data_dir.display()
            ))
            .with_source(e)
        })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(AppError::storage(format!(
                "{} is not a directory",
                self.data_dir.display()
            )))
        }
    }

    async fn clear_all(&self) -> AppResult<()> {
        let summaries_path = self.summaries_path();
        let details_path = self.details_path();

        let _guard = self.write_lock.lock().await;
        blocking(move || {
            remove_if_exists(&details_path)?;
            remove_if_exists(&summaries_path)
        })
        .await
    }
}

/// Run blocking filesystem work off the async runtime
async fn blocking<T, F>(work: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::internal("Store task failed").with_source(e))?
}

/// Write `bytes` to a temp file in the target's directory, then rename it over the target
fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let dir = path
        .parent()
        .ok_or_else(|| AppError::storage(format!("{} has no parent directory", path.display())))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        AppError::storage(format!("Failed to create temp file in {}", dir.display()))
            .with_source(e)
    })?;
    temp.write_all(bytes)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| {
            AppError::storage(format!("Failed to write {}", path.display())).with_source(e)
        })?;
    temp.persist(path).map_err(|e| {
        AppError::storage(format!("Failed to replace {}", path.display())).with_source(e.error)
    })?;

    Ok(())
}

/// Read a JSON document; a missing file reads as `None`
fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(
                AppError::storage(format!("Failed to read {}", path.display())).with_source(e),
            )
        }
    };

    serde_json::from_slice(&bytes).map(Some).map_err(|e| {
        AppError::serialization(format!("Corrupt document {}", path.display())).with_source(e)
    })
}

fn remove_if_exists(path: &Path) -> AppResult<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(AppError::storage(format!("Failed to remove {}", path.display())).with_source(e))
        }
    }
}
