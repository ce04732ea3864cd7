//! Wallet service abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ImportResult;

/// Wallet service Trait
///
/// Derives the keyring for a seed phrase. Mnemonic validity checking and key
/// derivation both live behind this trait.
///
/// Platform implementation:
/// - Browser extension: background-page RPC
/// - Desktop: in-process keyring manager
#[async_trait]
pub trait WalletService: Send + Sync {
    /// Generate (or match) a keyring for the given seed phrase
    ///
    /// # Arguments
    /// * `mnemonic` - Space-joined seed words
    /// * `passphrase` - BIP-39 passphrase, empty when unused
    ///
    /// # Errors
    /// * `CoreError::InvalidMnemonic` - the phrase was rejected
    /// * `CoreError::WalletService` - any other failure
    async fn generate_keyring_with_mnemonic(
        &self,
        mnemonic: &str,
        passphrase: &str,
    ) -> CoreResult<ImportResult>;
}
