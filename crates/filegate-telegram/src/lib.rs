//! # filegate-telegram
//!
//! Telegram Bot API transport for FileGate.
//!
//! This crate provides:
//! - [`BotApiClient`], the HTTP implementation of
//!   [`ChatTransport`](filegate_core::traits::ChatTransport)
//! - Wire types for the subset of updates the bot consumes
//! - [`UpdatePoller`], a long-polling loop that dispatches each update to an
//!   [`UpdateHandler`] on its own task
//! - `MockTransport` (feature `mock`) for tests

pub mod client;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod poller;
pub mod types;

pub use client::BotApiClient;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockTransport, TransportCall};
pub use poller::{UpdateHandler, UpdatePoller};
pub use types::{CallbackQuery, Message, Update, User};
