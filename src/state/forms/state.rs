use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::state::mvi::SliceState;

/// Forms whose values live in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormId {
    Semester,
    Student,
    Lesson,
    RoomType,
    Schedule,
}

impl FormId {
    pub fn as_str(self) -> &'static str {
        match self {
            FormId::Semester => "semester",
            FormId::Student => "student",
            FormId::Lesson => "lesson",
            FormId::RoomType => "room_type",
            FormId::Schedule => "schedule",
        }
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values of one form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormValues {
    pub values: Map<String, Value>,
    /// Set by the first `Change` after initialize or reset.
    pub dirty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormsState {
    pub forms: BTreeMap<FormId, FormValues>,
}

impl SliceState for FormsState {}

impl FormsState {
    pub fn get(&self, form: FormId) -> Option<&FormValues> {
        self.forms.get(&form)
    }

    /// No `Change` since the last initialize or reset. A form with no
    /// entry counts as pristine.
    pub fn is_pristine(&self, form: FormId) -> bool {
        self.forms.get(&form).map_or(true, |f| !f.dirty)
    }
}
