//! Keyring related type definitions

use serde::{Deserialize, Serialize};

/// Kind of keyring produced by the import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyringKind {
    /// HD keyring derived from a BIP-39 mnemonic
    #[serde(rename = "mnemonic")]
    Mnemonic,
}

/// Wallet service answer for one successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// Opaque keyring id (stashed keyring for a new import)
    pub keyring_id: u64,
    /// Whether the phrase matched a keyring that already exists
    pub is_existed_keyring: bool,
}
