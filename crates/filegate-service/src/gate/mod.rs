//! Channel membership gate.

pub mod membership;
pub mod prompt;

pub use membership::{AccessDecision, MembershipGate};
pub use prompt::{channel_url, subscribe_keyboard, subscribe_text};
