//! Shared response types and logging setup used by the server crates.

pub mod types;
pub mod utils;
