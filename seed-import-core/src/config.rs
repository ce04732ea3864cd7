//! Import page configuration

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::i18n::Language;

/// Route of the address selection step
pub const DEFAULT_SELECT_ADDRESS_PATH: &str = "/import/select-address";
/// Route used when the page is opened in a popup
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// How secret fields are handled when the form is written to the page state cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretCachePolicy {
    /// Secrets are blanked before every write
    #[default]
    ScrubOnWrite,
    /// Secrets are written as entered and only blanked on restore
    RestoreOnly,
}

impl SecretCachePolicy {
    #[must_use]
    pub fn scrubs_on_write(self) -> bool {
        matches!(self, Self::ScrubOnWrite)
    }
}

/// 导入页配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub select_address_path: String,
    pub dashboard_path: String,
    pub secret_cache_policy: SecretCachePolicy,
    /// Cache entries older than this are ignored on restore
    pub cache_max_age_secs: Option<u64>,
    /// BCP 47 code, see `Language::from_code`
    pub language: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            select_address_path: DEFAULT_SELECT_ADDRESS_PATH.to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
            secret_cache_policy: SecretCachePolicy::default(),
            cache_max_age_secs: None,
            language: Language::default().code().to_string(),
        }
    }
}

impl ImportConfig {
    /// Parse a JSON configuration, missing keys take their default
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Language of the page texts, unknown codes fall back to the default
    #[must_use]
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language code {}, using default", self.language);
            Language::default()
        })
    }
}
