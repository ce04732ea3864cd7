//! OS clipboard via the `arboard` crate.

use async_trait::async_trait;

use seed_import_core::error::{CoreError, CoreResult};
use seed_import_core::traits::Clipboard;

/// System clipboard.
///
/// A new `arboard::Clipboard` handle is opened for every wipe; some platforms
/// do not allow the handle to move between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn clear_sync() -> CoreResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CoreError::ClipboardError(e.to_string()))?;
        clipboard
            .clear()
            .map_err(|e| CoreError::ClipboardError(e.to_string()))
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn clear(&self) -> CoreResult<()> {
        tokio::task::spawn_blocking(|| {
            log::debug!("Clearing system clipboard");
            Self::clear_sync()
        })
        .await
        .map_err(|e| CoreError::ClipboardError(format!("Task join error: {e}")))?
    }
}
