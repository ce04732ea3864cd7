//! Page state cache entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-route UI state kept across an unintended remount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStateCacheEntry {
    /// Route path the entry belongs to
    pub path: String,
    /// Route params (unused by the import page, kept for the host)
    #[serde(default)]
    pub params: Map<String, Value>,
    /// Form states
    #[serde(default)]
    pub states: Map<String, Value>,
    /// Write time, missing for entries written by older hosts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl PageStateCacheEntry {
    /// 创建缓存条目（写入时间为当前时间）
    #[must_use]
    pub fn new(path: impl Into<String>, states: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            params: Map::new(),
            states,
            saved_at: Some(Utc::now()),
        }
    }

    /// Whether the entry is older than `max_age_secs`.
    ///
    /// Entries without a timestamp are never considered stale.
    #[must_use]
    pub fn is_stale(&self, max_age_secs: u64, now: DateTime<Utc>) -> bool {
        let Some(saved_at) = self.saved_at else {
            return false;
        };
        let max_age = i64::try_from(max_age_secs).unwrap_or(i64::MAX);
        (now - saved_at).num_seconds() > max_age
    }
}
