//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The wallet service rejected the seed phrase
    #[error("{0}")]
    InvalidMnemonic(String),

    /// Any other wallet service failure
    #[error("{0}")]
    WalletService(String),

    /// The submission was cancelled because the page was torn down
    #[error("Import cancelled")]
    Cancelled,

    /// Page state cache read/write error
    #[error("Page state cache error: {0}")]
    CacheError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Session store rejected the handoff
    #[error("Session store error: {0}")]
    SessionStoreError(String),

    /// Route change failed
    #[error("Navigation error: {0}")]
    NavigationError(String),

    /// File storage error (configuration file)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, page left), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidMnemonic(_) | Self::Cancelled | Self::ValidationError(_)
        )
    }

    /// Message to show next to the seed phrase inputs.
    ///
    /// Returns `None` when the error carries no usable text, in which case the
    /// caller falls back to the localized "seed phrase is invalid" message.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            Self::InvalidMnemonic(msg) | Self::WalletService(msg) => msg.trim().to_string(),
            other => other.to_string(),
        };
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_is_shown_verbatim() {
        let err = CoreError::InvalidMnemonic("Invalid mnemonic checksum".to_string());
        assert_eq!(err.user_message().as_deref(), Some("Invalid mnemonic checksum"));
    }

    #[test]
    fn blank_service_message_falls_back() {
        assert_eq!(CoreError::WalletService("   ".to_string()).user_message(), None);
        assert_eq!(CoreError::InvalidMnemonic(String::new()).user_message(), None);
    }

    #[test]
    fn expected_errors_are_user_caused() {
        assert!(CoreError::InvalidMnemonic("x".to_string()).is_expected());
        assert!(CoreError::Cancelled.is_expected());
        assert!(!CoreError::WalletService("timeout".to_string()).is_expected());
        assert!(!CoreError::CacheError("io".to_string()).is_expected());
        assert!(!CoreError::StorageError("denied".to_string()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::CacheError("gone".to_string())).unwrap();
        assert_eq!(json["code"], "CacheError");
        assert_eq!(json["details"], "gone");
    }
}
