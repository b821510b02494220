use crate::state::collection::{find_by_id, remove_by_id, upsert_by_id};
use crate::state::mvi::Reducer;

use super::intent::StudentIntent;
use super::state::StudentsState;

pub struct StudentsReducer;

impl Reducer for StudentsReducer {
    type State = StudentsState;
    type Intent = StudentIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudentIntent::ShowAll(students) => state.students = students,
            StudentIntent::Created(student) => state.students.push(student),
            StudentIntent::Updated(student) => upsert_by_id(&mut state.students, student),
            StudentIntent::Deleted(id) => {
                remove_by_id(&mut state.students, id);
            }
            StudentIntent::Selected(id) => {
                state.selected = id.and_then(|id| find_by_id(&state.students, id).cloned());
            }
        }
        state
    }
}
