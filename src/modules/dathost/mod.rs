pub mod actions;
pub mod client;
pub mod commands;
pub mod format;
pub mod models;
pub mod resolver;

pub use commands::{restart, servers, start, status, stop};
