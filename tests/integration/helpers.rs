//! Shared test helpers for integration tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use filegate_bot::{UpdateRouter, build_state};
use filegate_core::config::AppConfig;
use filegate_core::result::AppResult;
use filegate_core::traits::CleanupScheduler;
use filegate_core::types::{ChatId, InlineButton, MessageRef, UserId};
use filegate_database::MemoryFileLinkStore;
use filegate_entity::link::FileLink;
use filegate_telegram::{MockTransport, TransportCall, Update, UpdateHandler};

/// Configured administrator.
pub const ADMIN: UserId = UserId(1);

/// Scheduler double that records armed cleanups.
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

/// Test application context
pub struct TestApp {
    /// Router that receives every simulated update
    pub router: UpdateRouter,
    /// Recording transport
    pub transport: Arc<MockTransport>,
    /// Backing link store
    pub store: MemoryFileLinkStore,
    /// Recording cleanup scheduler
    pub scheduler: Arc<RecordingScheduler>,
    next_update_id: AtomicI64,
}

impl TestApp {
    /// Create a bot gated on `channels`.
    pub async fn new(channels: &[&str]) -> Self {
        let channels: Vec<String> = channels.iter().map(|c| format!("{c:?}")).collect();
        let config = AppConfig::from_toml(&format!(
            r#"
            [bot]
            token = "123:test"

            [database]
            provider = "memory"

            [admin]
            user_id = {admin}

            [gate]
            channels = [{channels}]

            [cleanup]
            delay_minutes = 30
            "#,
            admin = ADMIN.get(),
            channels = channels.join(", "),
        ))
        .expect("Failed to parse test config");

        let transport = Arc::new(MockTransport::new());
        let store = MemoryFileLinkStore::new();
        let scheduler = Arc::new(RecordingScheduler::default());

        let state = build_state(
            Arc::new(config),
            transport.clone(),
            Arc::new(store.clone()),
            scheduler.clone(),
        )
        .await
        .expect("Failed to build state");

        Self {
            router: UpdateRouter::new(state),
            transport,
            store,
            scheduler,
            next_update_id: AtomicI64::new(1),
        }
    }

    async fn dispatch(&self, mut body: Value) {
        body["update_id"] = json!(self.next_update_id.fetch_add(1, Ordering::SeqCst));
        let update: Update = serde_json::from_value(body).expect("Invalid test update");
        self.router.handle(update).await;
    }

    fn message(user: UserId, extra: Value) -> Value {
        let mut message = json!({
            "message_id": 1,
            "from": { "id": user.get(), "first_name": format!("User{}", user.get()) },
            "chat": { "id": user.get(), "type": "private" },
        });
        if let (Some(target), Value::Object(fields)) = (message.as_object_mut(), extra) {
            target.extend(fields);
        }
        json!({ "message": message })
    }

    /// User sends a text message.
    pub async fn send_text(&self, user: UserId, text: &str) {
        self.dispatch(Self::message(user, json!({ "text": text })))
            .await;
    }

    /// User sends a document.
    pub async fn send_document(&self, user: UserId, file_id: &str) {
        self.dispatch(Self::message(
            user,
            json!({ "document": { "file_id": file_id, "file_name": "report.pdf" } }),
        ))
        .await;
    }

    /// User sends a photo with the given `(file_id, width, height)` variants.
    pub async fn send_photo(&self, user: UserId, sizes: &[(&str, u32, u32)]) {
        let photo: Vec<Value> = sizes
            .iter()
            .map(|(id, w, h)| json!({ "file_id": id, "width": w, "height": h }))
            .collect();
        self.dispatch(Self::message(user, json!({ "photo": photo })))
            .await;
    }

    /// User presses an inline button on `message`.
    pub async fn press(&self, user: UserId, message: MessageRef, data: &str) {
        self.dispatch(json!({
            "callback_query": {
                "id": format!("cb-{}", self.next_update_id.load(Ordering::SeqCst)),
                "from": { "id": user.get(), "first_name": "Presser" },
                "message": {
                    "message_id": message.message_id.get(),
                    "chat": { "id": message.chat_id.get(), "type": "private" },
                    "text": "File uploaded!"
                },
                "data": data
            }
        }))
        .await;
    }

    /// Texts the bot sent to `user`.
    pub fn texts_to(&self, user: UserId) -> Vec<String> {
        self.transport.texts_to(ChatId::from(user))
    }

    /// The admin's most recent upload confirmation and its revoke payload.
    pub fn last_confirmation(&self) -> Option<(MessageRef, String, String)> {
        self.transport.calls().into_iter().rev().find_map(|call| match call {
            TransportCall::SendText {
                chat,
                text,
                keyboard: Some(keyboard),
                message_id,
            } if text.starts_with("File uploaded!") => {
                let data = keyboard.buttons().find_map(|b| match b {
                    InlineButton::Callback { data, .. } => {
                        Some(data.clone())
                    }
                    _ => None,
                })?;
                Some((MessageRef::new(chat, message_id), text, data))
            }
            _ => None,
        })
    }

    /// Admin uploads a document and returns the shared deep link payload.
    pub async fn upload_document(&self, file_id: &str) -> String {
        self.send_document(ADMIN, file_id).await;
        let (_, text, _) = self
            .last_confirmation()
            .expect("Upload produced no confirmation");
        let (_, payload) = text
            .split_once("?start=")
            .expect("Confirmation has no deep link");
        payload.to_string()
    }

    /// Every stored link.
    pub async fn links(&self) -> Vec<FileLink> {
        use filegate_database::FileLinkStore;
        self.store
            .list_recent(u32::MAX)
            .await
            .expect("Memory store failed")
    }
}
