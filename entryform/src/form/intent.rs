//! User intents forwarded by the presentation layer

use super::types::FormField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of events the reconciliation engine consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Intent {
    /// A text input changed
    FieldChanged { field: FormField, value: String },
    /// A position (1-based) on the rating scale was clicked
    RatingClicked { position: u8 },
    Submit,
    EditRequested { index: usize },
    DeleteRequested { index: usize },
    /// Leave edit mode without committing
    CancelEdit,
}

impl Intent {
    pub fn field_changed(field: FormField, value: impl Into<String>) -> Self {
        Intent::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Values are not printed: the password goes through here.
            Intent::FieldChanged { field, .. } => write!(f, "FieldChanged({})", field),
            Intent::RatingClicked { position } => write!(f, "RatingClicked({})", position),
            Intent::Submit => write!(f, "Submit"),
            Intent::EditRequested { index } => write!(f, "EditRequested({})", index),
            Intent::DeleteRequested { index } => write!(f, "DeleteRequested({})", index),
            Intent::CancelEdit => write!(f, "CancelEdit"),
        }
    }
}
