//! Form reconciliation
//!
//! `reduce` is a pure function from the current state and one intent to the next state.
//! It never touches storage; callers persist `records` when `records_changed` is set.
//!
//! States are `Idle` (no edit target) and `Editing(i)`:
//! - `Idle --EditRequested(i)--> Editing(i)`
//! - `Editing(i) --Submit(valid)--> Idle` (replace), `Idle --Submit(valid)--> Idle` (append)
//! - `Submit(invalid)` is a self-loop that only replaces `errors`
//! - `Editing(i) --DeleteRequested(i)--> Idle` with the draft discarded
//! - `Editing(i) --CancelEdit--> Idle`

use super::intent::Intent;
use super::state::{EditTarget, FormState};
use super::types::{Draft, FieldErrors, FormField, RATING_SCALE};
use serde::Serialize;
use tracing::debug;

/// Why an intent left the state untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason")]
pub enum IgnoreReason {
    RatingOutOfScale { position: u8 },
    IndexOutOfRange { index: usize, len: usize },
    NotATextField { field: FormField },
}

/// What a reduction did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome")]
pub enum Outcome {
    /// Draft field or rating updated
    DraftUpdated,
    /// Submit refused; `errors` holds the reasons
    Rejected { errors: FieldErrors },
    Appended { index: usize },
    Replaced { index: usize },
    EditStarted { index: usize },
    EditCancelled,
    Deleted {
        index: usize,
        /// The deleted row was the one being edited
        discarded_edit: bool,
    },
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone)]
pub struct Reduction {
    pub state: FormState,
    pub outcome: Outcome,
    /// `records` differs from the input state and must be persisted
    pub records_changed: bool,
}

impl Reduction {
    fn unchanged(state: &FormState, reason: IgnoreReason) -> Self {
        Self {
            state: state.clone(),
            outcome: Outcome::Ignored(reason),
            records_changed: false,
        }
    }
}

/// Apply one intent to a state snapshot
pub fn reduce(state: &FormState, intent: Intent) -> Reduction {
    debug!(intent = %intent, "reducing intent");
    match intent {
        Intent::FieldChanged { field, value } => apply_field_change(state, field, value),
        Intent::RatingClicked { position } => apply_rating(state, position),
        Intent::Submit => apply_submit(state),
        Intent::EditRequested { index } => apply_edit(state, index),
        Intent::DeleteRequested { index } => apply_delete(state, index),
        Intent::CancelEdit => apply_cancel(state),
    }
}

fn apply_field_change(state: &FormState, field: FormField, value: String) -> Reduction {
    let mut next = state.clone();
    if next.draft.set(field, value).is_err() {
        return Reduction::unchanged(state, IgnoreReason::NotATextField { field });
    }
    Reduction {
        state: next,
        outcome: Outcome::DraftUpdated,
        records_changed: false,
    }
}

/// Selecting position k always sets the rating to k; re-clicking does not clear it
fn apply_rating(state: &FormState, position: u8) -> Reduction {
    if position == 0 || position > RATING_SCALE {
        return Reduction::unchanged(state, IgnoreReason::RatingOutOfScale { position });
    }
    let mut next = state.clone();
    next.draft.rating = position;
    Reduction {
        state: next,
        outcome: Outcome::DraftUpdated,
        records_changed: false,
    }
}

pub fn apply_submit(state: &FormState) -> Reduction {
    let record = match state.draft.to_record() {
        Ok(record) => record,
        Err(errors) => {
            let mut next = state.clone();
            next.errors = errors.clone();
            return Reduction {
                state: next,
                outcome: Outcome::Rejected { errors },
                records_changed: false,
            };
        }
    };

    let mut next = state.clone();
    let outcome = match state.edit_target {
        EditTarget::Editing(index) if index < next.records.len() => {
            next.records[index] = record;
            Outcome::Replaced { index }
        }
        _ => {
            next.records.push(record);
            Outcome::Appended {
                index: next.records.len() - 1,
            }
        }
    };
    next.reset_form();

    Reduction {
        state: next,
        outcome,
        records_changed: true,
    }
}

fn apply_edit(state: &FormState, index: usize) -> Reduction {
    let Some(record) = state.records.get(index) else {
        return Reduction::unchanged(
            state,
            IgnoreReason::IndexOutOfRange {
                index,
                len: state.records.len(),
            },
        );
    };
    let mut next = state.clone();
    next.draft = Draft::from(record);
    next.edit_target = EditTarget::Editing(index);
    Reduction {
        state: next,
        outcome: Outcome::EditStarted { index },
        records_changed: false,
    }
}

pub fn apply_delete(state: &FormState, index: usize) -> Reduction {
    if index >= state.records.len() {
        return Reduction::unchanged(
            state,
            IgnoreReason::IndexOutOfRange {
                index,
                len: state.records.len(),
            },
        );
    }

    let mut next = state.clone();
    next.records.remove(index);

    let mut discarded_edit = false;
    match state.edit_target {
        EditTarget::Editing(target) if target == index => {
            next.reset_form();
            discarded_edit = true;
        }
        // Keep following the same record after the shift
        EditTarget::Editing(target) if target > index => {
            next.edit_target = EditTarget::Editing(target - 1);
        }
        _ => {}
    }

    Reduction {
        state: next,
        outcome: Outcome::Deleted {
            index,
            discarded_edit,
        },
        records_changed: true,
    }
}

fn apply_cancel(state: &FormState) -> Reduction {
    let mut next = state.clone();
    next.reset_form();
    Reduction {
        state: next,
        outcome: Outcome::EditCancelled,
        records_changed: false,
    }
}
