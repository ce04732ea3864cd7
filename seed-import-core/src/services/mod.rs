//! 业务逻辑服务层

mod entry_guard;
mod error_channel;
mod import_controller;
mod page_cache_lifecycle;
mod passphrase_toggle;

pub use entry_guard::{EntryGuard, GuardDecision};
pub use error_channel::ErrorChannel;
pub use import_controller::{ImportController, MountOutcome, SubmitOutcome};
pub use page_cache_lifecycle::PageCacheLifecycle;
pub use passphrase_toggle::{PassphraseState, PassphraseTransition};

use std::sync::Arc;

use crate::traits::{
    Clipboard, ImportSessionStore, Navigator, PageStateCache, UiSurface, WalletService,
};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的实现。
pub struct ImportContext {
    /// Keyring derivation
    pub wallet_service: Arc<dyn WalletService>,
    /// Per-route UI state cache
    pub page_state_cache: Arc<dyn PageStateCache>,
    /// Handoff to the address selection step
    pub session_store: Arc<dyn ImportSessionStore>,
    /// Router
    pub navigator: Arc<dyn Navigator>,
    /// System clipboard
    pub clipboard: Arc<dyn Clipboard>,
    /// Hosting window
    pub ui_surface: Arc<dyn UiSurface>,
}

impl ImportContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        wallet_service: Arc<dyn WalletService>,
        page_state_cache: Arc<dyn PageStateCache>,
        session_store: Arc<dyn ImportSessionStore>,
        navigator: Arc<dyn Navigator>,
        clipboard: Arc<dyn Clipboard>,
        ui_surface: Arc<dyn UiSurface>,
    ) -> Self {
        Self {
            wallet_service,
            page_state_cache,
            session_store,
            navigator,
            clipboard,
            ui_surface,
        }
    }
}
