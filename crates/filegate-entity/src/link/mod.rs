//! File link entities.

pub mod model;
pub mod token;

pub use model::{CreateFileLink, FileLink};
pub use token::LinkToken;
