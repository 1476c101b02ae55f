//! End-to-end scenarios driven through the update router with a recording
//! transport and the in-memory link store.

mod helpers;

mod admin_test;
mod lifecycle_test;
mod redemption_test;
