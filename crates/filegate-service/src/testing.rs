//! Shared test doubles for service tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use filegate_core::config::GateConfig;
use filegate_core::result::AppResult;
use filegate_core::traits::{ChatTransport, CleanupScheduler};
use filegate_core::types::{MessageRef, UserId};
use filegate_database::repositories::{FileLinkStore, MemoryFileLinkStore};
use filegate_entity::link::{CreateFileLink, FileLink, LinkToken};
use filegate_telegram::MockTransport;

use crate::gate::MembershipGate;
use crate::link::LinkRegistry;

pub const ADMIN: UserId = UserId(1);
pub const DELAY: Duration = Duration::from_secs(30 * 60);

/// Scheduler that only records what was armed.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    armed: Mutex<Vec<(MessageRef, Duration)>>,
}

impl RecordingScheduler {
    pub fn armed(&self) -> Vec<(MessageRef, Duration)> {
        self.armed.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl CleanupScheduler for RecordingScheduler {
    async fn arm(&self, message: MessageRef, delay: Duration) -> AppResult<()> {
        self.armed
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((message, delay));
        Ok(())
    }
}

/// Store wrapper that counts reads and writes.
#[derive(Debug, Default)]
pub struct CountingStore {
    pub inner: MemoryFileLinkStore,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileLinkStore for CountingStore {
    async fn insert(&self, data: &CreateFileLink) -> AppResult<FileLink> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(data).await
    }

    async fn find_by_token(&self, token: &LinkToken) -> AppResult<Option<FileLink>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_token(token).await
    }

    async fn mark_revoked(&self, token: &LinkToken) -> AppResult<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.mark_revoked(token).await
    }

    async fn list_recent(&self, limit: u32) -> AppResult<Vec<FileLink>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_recent(limit).await
    }
}

/// Wired-up collaborators for one test.
pub struct Fixture {
    pub transport: Arc<MockTransport>,
    pub store: Arc<CountingStore>,
    pub scheduler: Arc<RecordingScheduler>,
    pub registry: LinkRegistry,
    pub gate: MembershipGate,
}

impl Fixture {
    pub fn new(channels: &[&str]) -> Self {
        let transport = Arc::new(MockTransport::new());
        let store = Arc::new(CountingStore::default());
        let scheduler = Arc::new(RecordingScheduler::default());
        let registry = LinkRegistry::new(Arc::clone(&store) as Arc<dyn FileLinkStore>);
        let gate = MembershipGate::new(
            Arc::clone(&transport) as Arc<dyn ChatTransport>,
            &GateConfig {
                channels: channels.iter().map(|c| c.to_string()).collect(),
            },
        );
        Self {
            transport,
            store,
            scheduler,
            registry,
            gate,
        }
    }

    pub fn transport(&self) -> Arc<dyn ChatTransport> {
        Arc::clone(&self.transport) as Arc<dyn ChatTransport>
    }

    pub fn scheduler(&self) -> Arc<dyn CleanupScheduler> {
        Arc::clone(&self.scheduler) as Arc<dyn CleanupScheduler>
    }
}
