//! File link lifecycle: minting, lookup, revocation, and payload formats.

pub mod deep_link;
pub mod registry;

pub use deep_link::{
    REVOKE_PREFIX, START_PREFIX, parse_revoke_payload, parse_start_payload, revoke_callback_data,
    share_url,
};
pub use registry::{LinkRegistry, RevokeResult};
