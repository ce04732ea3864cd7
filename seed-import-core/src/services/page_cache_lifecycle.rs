//! Page state cache lifecycle
//!
//! Restore on mount, overwrite on every edit, delete on unmount. Every cache
//! failure is logged and swallowed: the form then simply starts empty.

use std::sync::Arc;

use chrono::Utc;

use crate::config::SecretCachePolicy;
use crate::traits::PageStateCache;
use crate::types::{FormState, PageStateCacheEntry};

/// Page state cache lifecycle
pub struct PageCacheLifecycle {
    cache: Arc<dyn PageStateCache>,
    policy: SecretCachePolicy,
    max_age_secs: Option<u64>,
}

impl PageCacheLifecycle {
    #[must_use]
    pub fn new(
        cache: Arc<dyn PageStateCache>,
        policy: SecretCachePolicy,
        max_age_secs: Option<u64>,
    ) -> Self {
        Self {
            cache,
            policy,
            max_age_secs,
        }
    }

    /// Form to show after a remount, if a usable entry exists for `current_path`.
    ///
    /// The returned form always has empty `mnemonics` and `passphrase`.
    pub async fn restore(&self, current_path: &str) -> Option<FormState> {
        match self.cache.has().await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                log::warn!("Failed to check page state cache: {e}");
                return None;
            }
        }

        let entry = match self.cache.get().await {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read page state cache: {e}");
                return None;
            }
        };

        if entry.path != current_path {
            log::debug!(
                "Ignoring page state cache for {} (current route {current_path})",
                entry.path
            );
            return None;
        }

        if let Some(max_age) = self.max_age_secs {
            if entry.is_stale(max_age, Utc::now()) {
                log::debug!("Ignoring stale page state cache for {}", entry.path);
                return None;
            }
        }

        match FormState::from_cached_states(&entry.states) {
            Ok(form) => {
                log::debug!("Restored page state for {current_path}");
                Some(form)
            }
            Err(e) => {
                log::warn!("Malformed page state cache for {current_path}: {e}");
                None
            }
        }
    }

    /// Overwrite the entry for `path` with the current form.
    pub async fn persist(&self, path: &str, form: &FormState) {
        let states = form.to_cached_states(self.policy.scrubs_on_write());
        if let Err(e) = self
            .cache
            .set(PageStateCacheEntry::new(path, states))
            .await
        {
            log::warn!("Failed to write page state cache for {path}: {e}");
        }
    }

    /// Delete the entry, whatever route it belongs to.
    pub async fn discard(&self) {
        if let Err(e) = self.cache.clear().await {
            log::warn!("Failed to clear page state cache: {e}");
        }
    }
}
