//! JSON file page state cache.
//!
//! Keeps the single page state entry in one JSON file so it survives a
//! restart of the frontend process. A missing file means "no entry"; a file
//! that does not parse is reported as a serialization error, which the core
//! treats as "no entry" as well.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use seed_import_core::error::{CoreError, CoreResult};
use seed_import_core::traits::PageStateCache;
use seed_import_core::types::PageStateCacheEntry;

/// JSON file page state cache.
pub struct JsonFilePageStateCache {
    path: PathBuf,
    /// Serializes file access within the process
    lock: Arc<Mutex<()>>,
}

impl JsonFilePageStateCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_sync(path: &Path) -> CoreResult<Option<PageStateCacheEntry>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CoreError::CacheError(e.to_string())),
        };
        if json.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn write_sync(path: &Path, entry: &PageStateCacheEntry) -> CoreResult<()> {
        let json = serde_json::to_string(entry)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CoreError::CacheError(e.to_string()))?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| CoreError::CacheError(e.to_string()))?;
        std::fs::rename(&tmp, path).map_err(|e| CoreError::CacheError(e.to_string()))
    }

    fn remove_sync(path: &Path) -> CoreResult<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::CacheError(e.to_string())),
        }
    }

    async fn run_blocking<T, F>(&self, f: F) -> CoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> CoreResult<T> + Send + 'static,
    {
        let _guard = self.lock.lock().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || f(&path))
            .await
            .map_err(|e| CoreError::CacheError(format!("Task join error: {e}")))?
    }
}

#[async_trait]
impl PageStateCache for JsonFilePageStateCache {
    async fn has(&self) -> CoreResult<bool> {
        Ok(self.get().await?.is_some())
    }

    async fn get(&self) -> CoreResult<Option<PageStateCacheEntry>> {
        self.run_blocking(Self::read_sync).await
    }

    async fn set(&self, entry: PageStateCacheEntry) -> CoreResult<()> {
        log::debug!("Writing page state cache for {}", entry.path);
        self.run_blocking(move |path| Self::write_sync(path, &entry))
            .await
    }

    async fn clear(&self) -> CoreResult<()> {
        self.run_blocking(Self::remove_sync).await
    }
}
