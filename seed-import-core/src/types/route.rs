//! Navigation type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::KeyringKind;

/// Route target handed to the navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Route path
    pub pathname: String,
    /// Route state read by the target screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
}

impl Location {
    /// Location without route state
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            state: None,
        }
    }

    /// Location carrying route state
    #[must_use]
    pub fn with_state(pathname: impl Into<String>, state: Value) -> Self {
        Self {
            pathname: pathname.into(),
            state: Some(state),
        }
    }
}

/// Route state of the address selection step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAddressState {
    pub keyring: KeyringKind,
    pub keyring_id: u64,
}
