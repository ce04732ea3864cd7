//! Page state cache abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::PageStateCacheEntry;

/// Page State Cache Trait
///
/// Thin per-route UI state store that survives a remount of the view. Only
/// one entry exists at a time; writing replaces it.
#[async_trait]
pub trait PageStateCache: Send + Sync {
    /// Whether an entry exists
    async fn has(&self) -> CoreResult<bool>;

    /// Get the current entry
    async fn get(&self) -> CoreResult<Option<PageStateCacheEntry>>;

    /// Replace the current entry
    ///
    /// # Arguments
    /// * `entry` - New entry
    async fn set(&self, entry: PageStateCacheEntry) -> CoreResult<()>;

    /// Delete the current entry
    async fn clear(&self) -> CoreResult<()>;
}

/// In-memory page state cache
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryPageStateCache {
    entry: Arc<RwLock<Option<PageStateCacheEntry>>>,
}

impl InMemoryPageStateCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageStateCache for InMemoryPageStateCache {
    async fn has(&self) -> CoreResult<bool> {
        Ok(self.entry.read().await.is_some())
    }

    async fn get(&self) -> CoreResult<Option<PageStateCacheEntry>> {
        Ok(self.entry.read().await.clone())
    }

    async fn set(&self, entry: PageStateCacheEntry) -> CoreResult<()> {
        *self.entry.write().await = Some(entry);
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        self.entry.write().await.take();
        Ok(())
    }
}
