use crate::model::{EntityId, Semester};
use crate::state::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SemesterIntent {
    SetAll(Vec<Semester>),
    SetArchived(Vec<Semester>),
    Added(Semester),
    Updated(Semester),
    Deleted(EntityId),
    /// Load a semester from the list into the edit form, or clear it.
    Selected(Option<EntityId>),
    MovedToArchive(EntityId),
}

impl Intent for SemesterIntent {
    fn kind(&self) -> &'static str {
        match self {
            SemesterIntent::SetAll(_) => "SHOW_ALL_SEMESTERS",
            SemesterIntent::SetArchived(_) => "SET_ARCHIVED_SEMESTERS",
            SemesterIntent::Added(_) => "ADD_SEMESTER",
            SemesterIntent::Updated(_) => "UPDATE_SEMESTER",
            SemesterIntent::Deleted(_) => "DELETE_SEMESTER",
            SemesterIntent::Selected(_) => "SELECT_SEMESTER",
            SemesterIntent::MovedToArchive(_) => "MOVE_TO_ARCHIVED_SEMESTER",
        }
    }
}
