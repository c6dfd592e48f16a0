pub mod dathost;
pub mod system;
