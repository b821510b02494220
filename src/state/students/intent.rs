use crate::model::{EntityId, Student};
use crate::state::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum StudentIntent {
    ShowAll(Vec<Student>),
    Created(Student),
    Updated(Student),
    Deleted(EntityId),
    Selected(Option<EntityId>),
}

impl Intent for StudentIntent {
    fn kind(&self) -> &'static str {
        match self {
            StudentIntent::ShowAll(_) => "SHOW_ALL_STUDENTS",
            StudentIntent::Created(_) => "CREATE_STUDENT",
            StudentIntent::Updated(_) => "UPDATE_STUDENT",
            StudentIntent::Deleted(_) => "DELETE_STUDENT",
            StudentIntent::Selected(_) => "SET_STUDENT",
        }
    }
}
