use crate::model::{EntityId, Lesson};
use crate::state::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum LessonIntent {
    SetLessons(Vec<Lesson>),
    SetLessonTypes(Vec<String>),
    Added(Lesson),
    Updated(Lesson),
    Deleted(EntityId),
    Selected(Option<EntityId>),
    SetGroupId(Option<EntityId>),
}

impl Intent for LessonIntent {
    fn kind(&self) -> &'static str {
        match self {
            LessonIntent::SetLessons(_) => "SET_LESSONS_CARDS",
            LessonIntent::SetLessonTypes(_) => "SET_LESSON_TYPES",
            LessonIntent::Added(_) => "ADD_LESSON",
            LessonIntent::Updated(_) => "UPDATE_LESSON_CARD",
            LessonIntent::Deleted(_) => "DELETE_LESSON_CARD",
            LessonIntent::Selected(_) => "SELECT_LESSON_CARD",
            LessonIntent::SetGroupId(_) => "SELECT_GROUP_ID",
        }
    }
}
