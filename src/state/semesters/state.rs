use serde::Serialize;

use crate::model::{EntityId, Semester};
use crate::state::collection::find_by_id;
use crate::state::mvi::SliceState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemestersState {
    pub semesters: Vec<Semester>,
    pub archived: Vec<Semester>,
    /// Semester loaded into the edit form.
    pub selected: Option<Semester>,
}

impl SliceState for SemestersState {}

impl SemestersState {
    pub fn find(&self, id: EntityId) -> Option<&Semester> {
        find_by_id(&self.semesters, id)
    }

    /// The semester flagged as current, other than `except`.
    pub fn current_other_than(&self, except: Option<EntityId>) -> Option<&Semester> {
        self.semesters
            .iter()
            .find(|s| s.current_semester && s.id != except)
    }
}
