//! Render snapshot handed to the presentation layer

use super::state::FormState;
use super::types::{Draft, FieldErrors, Record, RATING_SCALE};
use crate::storage::StorageHealth;
use serde::Serialize;

/// One glyph per rating position, lowest first
pub const RATING_GLYPHS: [&str; RATING_SCALE as usize] = ["🤔", "😴", "😭", "😤", "😍"];

/// Glyph for a stored rating, `None` outside the scale
pub fn rating_glyph(rating: u8) -> Option<&'static str> {
    if rating == 0 {
        return None;
    }
    RATING_GLYPHS.get(rating as usize - 1).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSlot {
    pub position: u8,
    pub glyph: &'static str,
    /// Positions up to and including the current rating are lit
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub draft: Draft,
    pub errors: FieldErrors,
    pub editing: bool,
    pub edit_row: Option<usize>,
    pub submit_label: &'static str,
    pub rating_scale: Vec<RatingSlot>,
    pub records: Vec<Record>,
    pub storage: StorageHealth,
}

impl FormView {
    pub fn from_state(state: &FormState, storage: &StorageHealth) -> Self {
        let editing = state.edit_target.is_editing();
        let rating_scale = (1..=RATING_SCALE)
            .zip(RATING_GLYPHS)
            .map(|(position, glyph)| RatingSlot {
                position,
                glyph,
                highlighted: state.draft.rating >= position,
            })
            .collect();

        Self {
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            editing,
            edit_row: state.edit_target.index(),
            submit_label: if editing { "Update" } else { "Submit" },
            rating_scale,
            records: state.records.clone(),
            storage: storage.clone(),
        }
    }
}
