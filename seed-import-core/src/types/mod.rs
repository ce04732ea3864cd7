//! 类型定义模块

mod cache;
mod form;
mod keyring;
mod route;
mod session;

pub use cache::PageStateCacheEntry;
pub use form::{FormPatch, FormState, MNEMONICS_FIELD, PASSPHRASE_FIELD};
pub use keyring::{ImportResult, KeyringKind};
pub use route::{Location, SelectAddressState};
pub use session::SwitchKeyringRequest;
