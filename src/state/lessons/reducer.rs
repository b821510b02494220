use crate::state::collection::{find_by_id, remove_by_id, upsert_by_id};
use crate::state::mvi::Reducer;

use super::intent::LessonIntent;
use super::state::LessonsState;

pub struct LessonsReducer;

impl Reducer for LessonsReducer {
    type State = LessonsState;
    type Intent = LessonIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LessonIntent::SetLessons(lessons) => state.lessons = lessons,
            LessonIntent::SetLessonTypes(types) => state.lesson_types = types,
            LessonIntent::Added(lesson) => upsert_by_id(&mut state.lessons, lesson),
            LessonIntent::Updated(lesson) => upsert_by_id(&mut state.lessons, lesson),
            LessonIntent::Deleted(id) => {
                remove_by_id(&mut state.lessons, id);
            }
            LessonIntent::Selected(id) => {
                state.selected = id.and_then(|id| find_by_id(&state.lessons, id).cloned());
            }
            LessonIntent::SetGroupId(group_id) => {
                if state.group_id != group_id {
                    state.lessons.clear();
                    state.selected = None;
                }
                state.group_id = group_id;
            }
        }
        state
    }
}
