pub mod checks;
pub mod commands;
pub mod events;

pub use commands::ping;
