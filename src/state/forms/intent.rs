use serde_json::{Map, Value};

use crate::state::mvi::Intent;

use super::state::FormId;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Load a record's fields into the form.
    Initialize(FormId, Map<String, Value>),
    Change {
        form: FormId,
        field: String,
        value: Value,
    },
    /// Clear every field.
    Reset(FormId),
}

impl Intent for FormIntent {
    fn kind(&self) -> &'static str {
        match self {
            FormIntent::Initialize(..) => "FORM_INITIALIZE",
            FormIntent::Change { .. } => "FORM_CHANGE",
            FormIntent::Reset(_) => "FORM_RESET",
        }
    }
}
