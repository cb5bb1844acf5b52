//! Form Reconciliation Engine
//!
//! Owns the draft being typed, the validation errors of the last submit attempt, the
//! edit target and the record list. The engine is a pure reducer over `FormState`;
//! `FormSession` couples it to an `EntryStoreBridge`.

pub mod intent;
pub mod reducer;
pub mod session;
pub mod state;
pub mod types;
pub mod validation;
pub mod view;

pub use intent::Intent;
pub use reducer::{reduce, IgnoreReason, Outcome, Reduction};
pub use session::FormSession;
pub use state::{EditTarget, FormState};
pub use types::*;
pub use validation::validate;
pub use view::{rating_glyph, FormView, RatingSlot, RATING_GLYPHS};
