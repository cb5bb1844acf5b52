// Entry form library
// Form reconciliation engine with a local JSON-backed record list

pub mod config;
pub mod error;
pub mod form;
pub mod storage;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{EntryFormError, EntryFormResult};
pub use form::{FormSession, FormState, Intent, Outcome};
pub use storage::{EntryStoreBridge, RecordStore, StorageHealth};
