use serde::Serialize;

use crate::model::{EntityId, Lesson};
use crate::state::mvi::SliceState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LessonsState {
    pub lessons: Vec<Lesson>,
    pub lesson_types: Vec<String>,
    pub selected: Option<Lesson>,
    /// Group whose lessons are listed.
    pub group_id: Option<EntityId>,
}

impl SliceState for LessonsState {}
