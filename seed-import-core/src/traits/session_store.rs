//! Import session store abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::SwitchKeyringRequest;

/// Import Session Store Trait
///
/// Write-only handoff from the import form to the address selection step.
#[async_trait]
pub trait ImportSessionStore: Send + Sync {
    /// Record the finalized import
    ///
    /// # Arguments
    /// * `request` - Phrase, passphrase and keyring id of the import
    async fn switch_keyring(&self, request: SwitchKeyringRequest) -> CoreResult<()>;
}

/// In-memory import session store
///
/// Keeps the last handoff until the next screen takes it.
#[derive(Clone, Default)]
pub struct InMemoryImportSessionStore {
    current: Arc<RwLock<Option<SwitchKeyringRequest>>>,
}

impl InMemoryImportSessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last handoff
    pub async fn current(&self) -> Option<SwitchKeyringRequest> {
        self.current.read().await.clone()
    }

    /// Take the last handoff, leaving the store empty
    pub async fn take(&self) -> Option<SwitchKeyringRequest> {
        self.current.write().await.take()
    }
}

#[async_trait]
impl ImportSessionStore for InMemoryImportSessionStore {
    async fn switch_keyring(&self, request: SwitchKeyringRequest) -> CoreResult<()> {
        *self.current.write().await = Some(request);
        Ok(())
    }
}
