//! Configuration for the entry form runtime
//!
//! Where the record list is stored and how it is written.

pub mod types;

pub use types::*;
