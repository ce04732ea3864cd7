//! Platform-agnostic application bootstrap for the seed phrase import flow.
//!
//! Provides `AppState` (collaborator container and page factory),
//! `AppStateBuilder` (adapter injection) and `load_config` (JSON config file).

pub mod adapters;

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use seed_import_core::error::{CoreError, CoreResult};
use seed_import_core::services::{ImportContext, ImportController};
use seed_import_core::traits::{
    Clipboard, HistoryNavigator, ImportSessionStore, InMemoryImportSessionStore,
    InMemoryPageStateCache, Navigator, NoopClipboard, PageStateCache, StaticUiSurface, UiSurface,
    WalletService,
};
use seed_import_core::ImportConfig;

/// Load the import configuration from a JSON file.
///
/// A missing file yields the default configuration.
///
/// # Errors
/// `CoreError::StorageError` when the file exists but cannot be read,
/// `CoreError::SerializationError` when it is not valid config JSON.
pub fn load_config(path: &Path) -> CoreResult<ImportConfig> {
    match std::fs::read_to_string(path) {
        Ok(json) => {
            let config = ImportConfig::from_json_str(&json)?;
            log::info!("Loaded import config from {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("No import config at {}, using defaults", path.display());
            Ok(ImportConfig::default())
        }
        Err(e) => Err(CoreError::StorageError(format!(
            "Failed to read config {}: {e}",
            path.display()
        ))),
    }
}

/// Platform-agnostic application state.
///
/// Holds the injected collaborators. Every frontend constructs this once at
/// startup via `AppStateBuilder` and asks it for a fresh controller each time
/// the import page mounts.
pub struct AppState {
    /// Collaborators shared by every page instance
    pub ctx: Arc<ImportContext>,
    /// Import page configuration
    pub config: ImportConfig,
}

impl AppState {
    /// Controller for a newly mounted import page.
    pub fn import_page(&self) -> ImportController {
        ImportController::new(Arc::clone(&self.ctx), self.config.clone())
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Required adapters
/// - `wallet_service` — keyring derivation backend
///
/// # Optional
/// - `page_state_cache` — defaults to `InMemoryPageStateCache`
/// - `session_store` — defaults to `InMemoryImportSessionStore`
/// - `navigator` — defaults to `HistoryNavigator` at `initial_path`
/// - `clipboard` — defaults to `NoopClipboard`
/// - `ui_surface` — defaults to a tab surface
/// - `config` — defaults to `ImportConfig::default()`
pub struct AppStateBuilder {
    wallet_service: Option<Arc<dyn WalletService>>,
    page_state_cache: Option<Arc<dyn PageStateCache>>,
    session_store: Option<Arc<dyn ImportSessionStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    ui_surface: Option<Arc<dyn UiSurface>>,
    config: Option<ImportConfig>,
    initial_path: String,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            wallet_service: None,
            page_state_cache: None,
            session_store: None,
            navigator: None,
            clipboard: None,
            ui_surface: None,
            config: None,
            initial_path: "/import/mnemonics".to_string(),
        }
    }

    #[must_use]
    pub fn wallet_service(mut self, service: Arc<dyn WalletService>) -> Self {
        self.wallet_service = Some(service);
        self
    }

    #[must_use]
    pub fn page_state_cache(mut self, cache: Arc<dyn PageStateCache>) -> Self {
        self.page_state_cache = Some(cache);
        self
    }

    #[must_use]
    pub fn session_store(mut self, store: Arc<dyn ImportSessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    #[must_use]
    pub fn ui_surface(mut self, surface: Arc<dyn UiSurface>) -> Self {
        self.ui_surface = Some(surface);
        self
    }

    #[must_use]
    pub fn config(mut self, config: ImportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Route the default navigator starts at.
    #[must_use]
    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let wallet_service = self.wallet_service.ok_or_else(|| {
            CoreError::ValidationError("wallet_service is required".to_string())
        })?;
        let page_state_cache = self
            .page_state_cache
            .unwrap_or_else(|| Arc::new(InMemoryPageStateCache::new()));
        let session_store = self
            .session_store
            .unwrap_or_else(|| Arc::new(InMemoryImportSessionStore::new()));
        let navigator = self
            .navigator
            .unwrap_or_else(|| Arc::new(HistoryNavigator::new(self.initial_path)));
        let clipboard = self.clipboard.unwrap_or_else(|| Arc::new(NoopClipboard));
        let ui_surface = self
            .ui_surface
            .unwrap_or_else(|| Arc::new(StaticUiSurface::default()));
        let config = self.config.unwrap_or_default();

        let ctx = Arc::new(ImportContext::new(
            wallet_service,
            page_state_cache,
            session_store,
            navigator,
            clipboard,
            ui_surface,
        ));

        Ok(AppState { ctx, config })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
