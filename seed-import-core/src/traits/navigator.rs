//! Navigation abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::Location;

/// Router Trait
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Path of the route currently shown
    async fn current_path(&self) -> String;

    /// Push a new history entry
    async fn push(&self, location: Location) -> CoreResult<()>;

    /// Replace the current history entry
    async fn replace(&self, location: Location) -> CoreResult<()>;
}

/// In-memory history stack
///
/// Used by hosts without a router of their own (CLI, tests). The stack
/// starts with the initial entry and only ever grows or swaps its top.
#[derive(Clone)]
pub struct HistoryNavigator {
    entries: Arc<RwLock<Vec<Location>>>,
}

impl HistoryNavigator {
    /// Create a history positioned at `initial_path`
    #[must_use]
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(vec![Location::new(initial_path)])),
        }
    }

    /// Snapshot of the history stack, oldest first
    pub async fn entries(&self) -> Vec<Location> {
        self.entries.read().await.clone()
    }

    /// Current history entry
    pub async fn current(&self) -> Option<Location> {
        self.entries.read().await.last().cloned()
    }

    fn check_route(location: &Location) -> CoreResult<()> {
        if location.pathname.starts_with('/') {
            Ok(())
        } else {
            Err(CoreError::NavigationError(format!(
                "Route must be an absolute path: {:?}",
                location.pathname
            )))
        }
    }
}

#[async_trait]
impl Navigator for HistoryNavigator {
    async fn current_path(&self) -> String {
        self.entries
            .read()
            .await
            .last()
            .map(|l| l.pathname.clone())
            .unwrap_or_default()
    }

    async fn push(&self, location: Location) -> CoreResult<()> {
        Self::check_route(&location)?;
        log::debug!("Navigating to {}", location.pathname);
        self.entries.write().await.push(location);
        Ok(())
    }

    /// # Errors
    /// `CoreError::NavigationError` for a relative route or an empty history.
    async fn replace(&self, location: Location) -> CoreResult<()> {
        Self::check_route(&location)?;
        log::debug!("Replacing route with {}", location.pathname);
        let mut entries = self.entries.write().await;
        let current = entries
            .last_mut()
            .ok_or_else(|| CoreError::NavigationError("No history entry to replace".to_string()))?;
        *current = location;
        Ok(())
    }
}
