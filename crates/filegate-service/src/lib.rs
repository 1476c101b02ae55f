//! # filegate-service
//!
//! Access-control and link-lifecycle services for FileGate. Each service
//! orchestrates the link store, the messaging transport, and the cleanup
//! scheduler to implement one use case.
//!
//! Services follow constructor injection: all dependencies are provided at
//! construction time via `Arc` references, and configuration is passed in
//! by value.

pub mod admin;
pub mod context;
pub mod gate;
pub mod link;
pub mod messages;
pub mod redemption;

#[cfg(test)]
pub(crate) mod testing;

pub use admin::{AdminService, RevokeOutcome, UploadOutcome};
pub use context::RequestContext;
pub use gate::{AccessDecision, MembershipGate};
pub use link::{LinkRegistry, RevokeResult};
pub use redemption::{RedemptionOutcome, RedemptionService};
