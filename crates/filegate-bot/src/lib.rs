//! # filegate-bot
//!
//! Update routing layer for FileGate: classifies incoming Bot API updates
//! and dispatches them to the redemption and admin services.

pub mod app;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::build_state;
pub use router::{Route, UpdateRouter};
pub use state::AppState;
