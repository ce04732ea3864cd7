//! Collaborator abstraction trait definitions

mod clipboard;
mod navigator;
mod page_state_cache;
mod session_store;
mod ui_surface;
mod wallet_service;

pub use clipboard::{Clipboard, NoopClipboard};
pub use navigator::{HistoryNavigator, Navigator};
pub use page_state_cache::{InMemoryPageStateCache, PageStateCache};
pub use session_store::{ImportSessionStore, InMemoryImportSessionStore};
pub use ui_surface::{StaticUiSurface, UiKind, UiSurface};
pub use wallet_service::WalletService;
