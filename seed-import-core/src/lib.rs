//! Seed Import Core Library
//!
//! Provides the workflow behind the "import seed phrase" onboarding step:
//! - Import controller (submit lifecycle, error channel, loading guard)
//! - Passphrase toggle
//! - Page state cache lifecycle
//! - Entry guard (popup redirect)
//!
//! The library is platform-independent. Wallet service, page state cache,
//! session store, navigation, clipboard and UI surface are all abstracted
//! through traits and injected by the host.

pub mod config;
pub mod error;
pub mod i18n;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ImportConfig, SecretCachePolicy};
pub use error::{CoreError, CoreResult};
pub use services::{ImportContext, ImportController, MountOutcome, SubmitOutcome};
pub use traits::{
    Clipboard, ImportSessionStore, Navigator, PageStateCache, UiSurface, WalletService,
};
