pub mod config;
pub mod entry;
#[cfg(feature = "repl")]
pub mod session;
