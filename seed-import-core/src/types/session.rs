//! Import session handoff

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Finalized import data handed to the session store on success
///
/// The address selection screen reads it synchronously on mount.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct SwitchKeyringRequest {
    pub final_mnemonics: String,
    pub passphrase: String,
    #[zeroize(skip)]
    pub is_existed_keyring: bool,
    #[zeroize(skip)]
    pub stash_keyring_id: u64,
}

impl fmt::Debug for SwitchKeyringRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchKeyringRequest")
            .field("final_mnemonics", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .field("is_existed_keyring", &self.is_existed_keyring)
            .field("stash_keyring_id", &self.stash_keyring_id)
            .finish()
    }
}
