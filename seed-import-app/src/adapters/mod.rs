//! Platform-agnostic adapters for non-browser frontends (desktop, TUI, CLI).

mod json_file_page_cache;

#[cfg(feature = "system-clipboard")]
mod system_clipboard;

pub use json_file_page_cache::JsonFilePageStateCache;

#[cfg(feature = "system-clipboard")]
pub use system_clipboard::SystemClipboard;
