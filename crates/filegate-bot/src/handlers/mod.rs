//! Update handlers, one module per inbound action.

pub mod revoke;
pub mod start;
pub mod upload;
