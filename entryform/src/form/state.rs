use super::types::{Draft, FieldErrors, RecordList};
use serde::{Deserialize, Serialize};

/// Which record a successful submit overwrites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "index")]
pub enum EditTarget {
    /// Submit appends
    #[default]
    None,
    /// Submit replaces `records[i]`
    Editing(usize),
}

impl EditTarget {
    pub fn index(&self) -> Option<usize> {
        match self {
            EditTarget::None => None,
            EditTarget::Editing(i) => Some(*i),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditTarget::Editing(_))
    }
}

/// Everything the reconciliation engine owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub draft: Draft,
    pub errors: FieldErrors,
    pub edit_target: EditTarget,
    pub records: RecordList,
}

impl FormState {
    pub fn with_records(records: RecordList) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Back to an empty form in append mode; records are untouched
    pub(crate) fn reset_form(&mut self) {
        self.draft = Draft::default();
        self.errors = FieldErrors::new();
        self.edit_target = EditTarget::None;
    }
}
