//! 助记词导入控制器
//!
//! Drives the import form from first render to the address selection step:
//! entry guard, cache restore, field edits, passphrase toggle and the guarded
//! submit against the wallet service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use zeroize::Zeroize;

use crate::config::ImportConfig;
use crate::error::{CoreError, CoreResult};
use crate::i18n::{self, ImportTexts};
use crate::types::{
    FormPatch, FormState, ImportResult, KeyringKind, Location, SelectAddressState,
    SwitchKeyringRequest,
};

use super::{
    EntryGuard, ErrorChannel, GuardDecision, ImportContext, PageCacheLifecycle, PassphraseState,
    PassphraseTransition,
};

/// Result of mounting the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The form is shown; `restored` tells whether cached fields were applied
    Rendered { restored: bool },
    /// Popup context, the route was replaced with the dashboard
    Redirected,
}

/// Result of one submit call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Keyring ready, navigation to address selection done
    Imported(ImportResult),
    /// The user stays on the form with these errors
    Rejected { errors: Vec<String> },
    /// Another submission was pending, nothing happened
    Suppressed,
    /// The page was unmounted before the import finished
    Cancelled,
}

/// Mutable page state
#[derive(Default)]
struct PageState {
    form: FormState,
    errors: ErrorChannel,
    passphrase: PassphraseState,
}

/// Loading flag held for the duration of one submission
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Import controller
///
/// One instance per mounted page. After `unmount` the instance is inert:
/// pending and later submissions resolve to `SubmitOutcome::Cancelled`.
pub struct ImportController {
    ctx: Arc<ImportContext>,
    config: ImportConfig,
    texts: &'static ImportTexts,
    guard: EntryGuard,
    cache: PageCacheLifecycle,
    state: RwLock<PageState>,
    loading: AtomicBool,
    cancel: CancellationToken,
}

impl ImportController {
    /// 创建导入控制器实例
    #[must_use]
    pub fn new(ctx: Arc<ImportContext>, config: ImportConfig) -> Self {
        let texts = i18n::texts(config.language());
        let guard = EntryGuard::new(config.dashboard_path.clone());
        let cache = PageCacheLifecycle::new(
            Arc::clone(&ctx.page_state_cache),
            config.secret_cache_policy,
            config.cache_max_age_secs,
        );
        Self {
            ctx,
            config,
            texts,
            guard,
            cache,
            state: RwLock::new(PageState::default()),
            loading: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    // ===== 生命周期 =====

    /// Entry guard decision for the current render pass
    #[must_use]
    pub fn entry_decision(&self) -> GuardDecision {
        self.guard.evaluate(self.ctx.ui_surface.as_ref())
    }

    /// Mount the page: redirect out of popups, otherwise restore cached fields
    pub async fn mount(&self) -> MountOutcome {
        if let GuardDecision::Redirect(location) = self.entry_decision() {
            log::info!("Import page opened in popup, redirecting to {}", location.pathname);
            if let Err(e) = self.ctx.navigator.replace(location).await {
                log::error!("Failed to redirect popup: {e}");
            }
            return MountOutcome::Redirected;
        }

        let path = self.ctx.navigator.current_path().await;
        let Some(form) = self.cache.restore(&path).await else {
            return MountOutcome::Rendered { restored: false };
        };
        self.state.write().await.form = form;
        MountOutcome::Rendered { restored: true }
    }

    /// Tear the page down: cancel a pending import, drop the cache entry, wipe secrets
    pub async fn unmount(&self) {
        self.cancel.cancel();
        self.cache.discard().await;
        self.state.write().await.form.clear_secrets();
        log::debug!("Import page unmounted");
    }

    // ===== 表单 =====

    /// Apply a field edit: clears the error list and refreshes the cache entry
    pub async fn update_fields(&self, mut patch: FormPatch) {
        if self.cancel.is_cancelled() {
            return;
        }

        let snapshot = {
            let mut state = self.state.write().await;
            if !state.passphrase.is_enabled() {
                if let Some(mut ignored) = patch.passphrase.take() {
                    log::debug!("Dropping passphrase edit while passphrase is disabled");
                    ignored.zeroize();
                }
            }
            state.form.apply(patch);
            state.errors.clear();
            state.form.clone()
        };

        let path = self.ctx.navigator.current_path().await;
        self.cache.persist(&path, &snapshot).await;
    }

    /// Input widget report on whether the phrase uses a passphrase
    pub async fn report_passphrase(&self, needs_passphrase: bool) {
        let mut state = self.state.write().await;
        if state.passphrase.report(needs_passphrase) == PassphraseTransition::EnteredNoPassphrase
        {
            state.form.clear_passphrase();
        }
    }

    // ===== 提交 =====

    /// Submit the current form values
    pub async fn submit(&self) -> SubmitOutcome {
        let form = self.state.read().await.form.clone();
        self.submit_with(&form.mnemonics, &form.passphrase).await
    }

    /// Submit the given phrase and passphrase
    ///
    /// At most one request is outstanding; calls made while one is pending
    /// return `SubmitOutcome::Suppressed` without any effect. There is no
    /// automatic retry.
    pub async fn submit_with(&self, mnemonics: &str, passphrase: &str) -> SubmitOutcome {
        let Some(_loading) = LoadingGuard::acquire(&self.loading) else {
            log::debug!("Import already in flight, ignoring submit");
            return SubmitOutcome::Suppressed;
        };

        if let Err(e) = self.ensure_mounted() {
            log::info!("{e}, page was unmounted");
            return SubmitOutcome::Cancelled;
        }

        log::info!(
            "Importing seed phrase ({} words, passphrase: {})",
            mnemonics.split_whitespace().count(),
            !passphrase.is_empty()
        );

        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                log::info!("Import cancelled, page was unmounted");
                return SubmitOutcome::Cancelled;
            }
            result = self
                .ctx
                .wallet_service
                .generate_keyring_with_mnemonic(mnemonics, passphrase) => result,
        };

        match result {
            Ok(imported) => self.on_import_success(mnemonics, passphrase, imported).await,
            Err(e) => self.on_import_error(&e).await,
        }
    }

    async fn on_import_success(
        &self,
        mnemonics: &str,
        passphrase: &str,
        imported: ImportResult,
    ) -> SubmitOutcome {
        match self.hand_off(mnemonics, passphrase, &imported).await {
            Ok(()) => {
                log::info!(
                    "Seed phrase imported into keyring {} (existing: {})",
                    imported.keyring_id,
                    imported.is_existed_keyring
                );
                SubmitOutcome::Imported(imported)
            }
            Err(CoreError::Cancelled) => {
                log::info!("Import finished after unmount, handoff stopped");
                SubmitOutcome::Cancelled
            }
            Err(e) => self.on_import_error(&e).await,
        }
    }

    /// Success side effects; stops with `CoreError::Cancelled` once the page is gone
    async fn hand_off(
        &self,
        mnemonics: &str,
        passphrase: &str,
        imported: &ImportResult,
    ) -> CoreResult<()> {
        self.ensure_mounted()?;

        // 顺序：清错误 → 清剪贴板 → 写入会话 → 跳转
        self.state.write().await.errors.clear();

        if let Err(e) = self.ctx.clipboard.clear().await {
            log::warn!("Failed to clear clipboard after import: {e}");
        }
        self.ensure_mounted()?;

        let request = SwitchKeyringRequest {
            final_mnemonics: mnemonics.to_string(),
            passphrase: passphrase.to_string(),
            is_existed_keyring: imported.is_existed_keyring,
            stash_keyring_id: imported.keyring_id,
        };
        self.ctx.session_store.switch_keyring(request).await?;
        self.ensure_mounted()?;

        let route_state = SelectAddressState {
            keyring: KeyringKind::Mnemonic,
            keyring_id: imported.keyring_id,
        };
        let location = Location::with_state(
            self.config.select_address_path.clone(),
            serde_json::to_value(route_state)?,
        );
        self.ctx.navigator.push(location).await
    }

    fn ensure_mounted(&self) -> CoreResult<()> {
        if self.cancel.is_cancelled() {
            Err(CoreError::Cancelled)
        } else {
            Ok(())
        }
    }

    async fn on_import_error(&self, err: &CoreError) -> SubmitOutcome {
        if err.is_expected() {
            log::warn!("Seed phrase import rejected: {err}");
        } else {
            log::error!("Seed phrase import failed: {err}");
        }

        let message = err
            .user_message()
            .unwrap_or_else(|| self.texts.seed_phrase_invalid.to_string());

        let mut state = self.state.write().await;
        state.errors.fail(message);
        SubmitOutcome::Rejected {
            errors: state.errors.messages().to_vec(),
        }
    }

    // ===== 只读访问 =====

    /// Copy of the current form values
    pub async fn form(&self) -> FormState {
        self.state.read().await.form.clone()
    }

    /// Errors shown next to the inputs, empty when none
    pub async fn errors(&self) -> Vec<String> {
        self.state.read().await.errors.messages().to_vec()
    }

    /// Bumped on every failed submission; the widget re-runs validation display on change
    pub async fn validation_revision(&self) -> u64 {
        self.state.read().await.errors.revision()
    }

    /// Whether the passphrase field is shown
    pub async fn need_passphrase(&self) -> bool {
        self.state.read().await.passphrase.is_enabled()
    }

    /// Whether a submission is pending (confirm button shows a spinner)
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Page texts in the configured language
    pub fn texts(&self) -> &'static ImportTexts {
        self.texts
    }

    /// Active configuration
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }
}
