//! Clipboard abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Clipboard Trait
///
/// Only wiping is needed: a pasted seed phrase must not stay on the clipboard
/// after the import.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Wipe the clipboard content (best effort)
    async fn clear(&self) -> CoreResult<()>;
}

/// Clipboard for hosts without clipboard access
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

#[async_trait]
impl Clipboard for NoopClipboard {
    async fn clear(&self) -> CoreResult<()> {
        Ok(())
    }
}
