//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use crate::config::ImportConfig;
use crate::error::{CoreError, CoreResult};
use crate::services::{ImportContext, ImportController};
use crate::traits::{
    Clipboard, HistoryNavigator, ImportSessionStore, InMemoryImportSessionStore,
    InMemoryPageStateCache, Navigator, PageStateCache, StaticUiSurface, UiKind, WalletService,
};
use crate::types::{ImportResult, Location, PageStateCacheEntry, SwitchKeyringRequest};

/// Route the import page is mounted at in tests
pub const TEST_PATH: &str = "/import/mnemonics";

// ===== EventLog =====

/// Ordered record of collaborator side effects
#[derive(Clone, Default)]
pub struct EventLog(Arc<RwLock<Vec<&'static str>>>);

impl EventLog {
    pub async fn record(&self, event: &'static str) {
        self.0.write().await.push(event);
    }

    pub async fn snapshot(&self) -> Vec<&'static str> {
        self.0.read().await.clone()
    }
}

// ===== MockWalletService =====

pub struct MockWalletService {
    result: RwLock<CoreResult<ImportResult>>,
    calls: AtomicUsize,
    last_call: RwLock<Option<(String, String)>>,
    /// 如果 Some，调用会阻塞直到收到通知
    gate: RwLock<Option<Arc<Notify>>>,
}

impl MockWalletService {
    pub fn new() -> Self {
        Self {
            result: RwLock::new(Err(CoreError::WalletService(
                "no result configured".to_string(),
            ))),
            calls: AtomicUsize::new(0),
            last_call: RwLock::new(None),
            gate: RwLock::new(None),
        }
    }

    pub async fn succeed_with(&self, keyring_id: u64, is_existed_keyring: bool) {
        *self.result.write().await = Ok(ImportResult {
            keyring_id,
            is_existed_keyring,
        });
    }

    pub async fn fail_with(&self, err: CoreError) {
        *self.result.write().await = Err(err);
    }

    /// Block every call until the returned `Notify` fires
    pub async fn hold_calls(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_call(&self) -> Option<(String, String)> {
        self.last_call.read().await.clone()
    }
}

#[async_trait]
impl WalletService for MockWalletService {
    async fn generate_keyring_with_mnemonic(
        &self,
        mnemonic: &str,
        passphrase: &str,
    ) -> CoreResult<ImportResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.write().await = Some((mnemonic.to_string(), passphrase.to_string()));

        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.result.read().await.clone()
    }
}

// ===== FailingPageStateCache =====

/// Cache whose every operation fails
pub struct FailingPageStateCache;

#[async_trait]
impl PageStateCache for FailingPageStateCache {
    async fn has(&self) -> CoreResult<bool> {
        Err(CoreError::CacheError("backend unavailable".to_string()))
    }

    async fn get(&self) -> CoreResult<Option<PageStateCacheEntry>> {
        Err(CoreError::CacheError("backend unavailable".to_string()))
    }

    async fn set(&self, _entry: PageStateCacheEntry) -> CoreResult<()> {
        Err(CoreError::CacheError("backend unavailable".to_string()))
    }

    async fn clear(&self) -> CoreResult<()> {
        Err(CoreError::CacheError("backend unavailable".to_string()))
    }
}

// ===== RecordingClipboard =====

pub struct RecordingClipboard {
    content: RwLock<String>,
    fail_next: AtomicBool,
    gate: RwLock<Option<Arc<Notify>>>,
    events: EventLog,
}

impl RecordingClipboard {
    pub fn new(events: EventLog) -> Self {
        Self {
            content: RwLock::new(String::new()),
            fail_next: AtomicBool::new(false),
            gate: RwLock::new(None),
            events,
        }
    }

    /// Block every clear until the returned `Notify` fires
    pub async fn hold_clears(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub async fn set_content(&self, text: &str) {
        *self.content.write().await = text.to_string();
    }

    pub async fn content(&self) -> String {
        self.content.read().await.clone()
    }

    pub fn fail_next_clear(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn clear(&self) -> CoreResult<()> {
        self.events.record("clipboard.clear").await;
        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CoreError::ClipboardError("no clipboard owner".to_string()));
        }
        self.content.write().await.clear();
        Ok(())
    }
}

// ===== RecordingSessionStore =====

pub struct RecordingSessionStore {
    inner: InMemoryImportSessionStore,
    fail_next: AtomicBool,
    /// 如果 Some，写入完成后阻塞直到收到通知
    gate: RwLock<Option<Arc<Notify>>>,
    events: EventLog,
}

impl RecordingSessionStore {
    pub fn new(events: EventLog) -> Self {
        Self {
            inner: InMemoryImportSessionStore::new(),
            fail_next: AtomicBool::new(false),
            gate: RwLock::new(None),
            events,
        }
    }

    /// Block every write, after it lands, until the returned `Notify` fires
    pub async fn hold_writes(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.write().await = Some(Arc::clone(&gate));
        gate
    }

    pub async fn current(&self) -> Option<SwitchKeyringRequest> {
        self.inner.current().await
    }

    pub fn fail_next_write(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ImportSessionStore for RecordingSessionStore {
    async fn switch_keyring(&self, request: SwitchKeyringRequest) -> CoreResult<()> {
        self.events.record("session.switch_keyring").await;
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(CoreError::SessionStoreError("store detached".to_string()));
        }
        self.inner.switch_keyring(request).await?;

        let gate = self.gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(())
    }
}

// ===== RecordingNavigator =====

pub struct RecordingNavigator {
    inner: HistoryNavigator,
    events: EventLog,
}

impl RecordingNavigator {
    pub fn new(events: EventLog) -> Self {
        Self {
            inner: HistoryNavigator::new(TEST_PATH),
            events,
        }
    }

    pub async fn entries(&self) -> Vec<Location> {
        self.inner.entries().await
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn current_path(&self) -> String {
        self.inner.current_path().await
    }

    async fn push(&self, location: Location) -> CoreResult<()> {
        self.events.record("navigator.push").await;
        self.inner.push(location).await
    }

    async fn replace(&self, location: Location) -> CoreResult<()> {
        self.inner.replace(location).await
    }
}

// ===== 工厂方法 =====

/// Controller plus handles on every mock it was built with
pub struct TestHarness {
    pub controller: ImportController,
    pub wallet: Arc<MockWalletService>,
    pub page_cache: Arc<InMemoryPageStateCache>,
    pub session_store: Arc<RecordingSessionStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub clipboard: Arc<RecordingClipboard>,
    pub events: EventLog,
    surface: UiKind,
    config: ImportConfig,
}

impl TestHarness {
    fn context(&self, page_cache: Arc<dyn PageStateCache>) -> Arc<ImportContext> {
        Arc::new(ImportContext::new(
            self.wallet.clone(),
            page_cache,
            self.session_store.clone(),
            self.navigator.clone(),
            self.clipboard.clone(),
            Arc::new(StaticUiSurface(self.surface)),
        ))
    }

    /// New page instance sharing the same collaborators
    pub fn remount(&self) -> ImportController {
        ImportController::new(self.context(self.page_cache.clone()), self.config.clone())
    }

    /// New page instance whose page state cache always fails
    pub fn remount_with_failing_cache(&self) -> ImportController {
        ImportController::new(
            self.context(Arc::new(FailingPageStateCache)),
            self.config.clone(),
        )
    }
}

/// 创建测试用 `ImportController`（标签页、默认配置）
pub fn create_test_harness() -> TestHarness {
    create_test_harness_with(UiKind::Tab, ImportConfig::default())
}

/// 创建测试用 `ImportController`
pub fn create_test_harness_with(surface: UiKind, config: ImportConfig) -> TestHarness {
    let events = EventLog::default();
    let wallet = Arc::new(MockWalletService::new());
    let page_cache = Arc::new(InMemoryPageStateCache::new());
    let session_store = Arc::new(RecordingSessionStore::new(events.clone()));
    let navigator = Arc::new(RecordingNavigator::new(events.clone()));
    let clipboard = Arc::new(RecordingClipboard::new(events.clone()));

    let ctx = Arc::new(ImportContext::new(
        wallet.clone(),
        page_cache.clone(),
        session_store.clone(),
        navigator.clone(),
        clipboard.clone(),
        Arc::new(StaticUiSurface(surface)),
    ));
    let controller = ImportController::new(ctx, config.clone());

    TestHarness {
        controller,
        wallet,
        page_cache,
        session_store,
        navigator,
        clipboard,
        events,
        surface,
        config,
    }
}
