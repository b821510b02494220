use serde::Serialize;

use crate::model::Student;
use crate::state::mvi::SliceState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentsState {
    /// Students of the group being viewed.
    pub students: Vec<Student>,
    pub selected: Option<Student>,
}

impl SliceState for StudentsState {}
