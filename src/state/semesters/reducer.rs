use crate::state::collection::{find_by_id, remove_by_id, upsert_by_id};
use crate::state::mvi::Reducer;

use super::intent::SemesterIntent;
use super::state::SemestersState;

pub struct SemestersReducer;

impl Reducer for SemestersReducer {
    type State = SemestersState;
    type Intent = SemesterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SemesterIntent::SetAll(semesters) => state.semesters = semesters,
            SemesterIntent::SetArchived(archived) => state.archived = archived,
            SemesterIntent::Added(semester) => state.semesters.push(semester),
            SemesterIntent::Updated(semester) => upsert_by_id(&mut state.semesters, semester),
            SemesterIntent::Deleted(id) => {
                remove_by_id(&mut state.semesters, id);
            }
            SemesterIntent::Selected(id) => {
                state.selected = id.and_then(|id| find_by_id(&state.semesters, id).cloned());
            }
            SemesterIntent::MovedToArchive(id) => {
                if let Some(semester) = remove_by_id(&mut state.semesters, id) {
                    state.archived.push(semester);
                }
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Semester;

    fn semester(id: i64, current: bool) -> Semester {
        Semester {
            id: Some(id),
            description: format!("S{}", id),
            year: 2024,
            current_semester: current,
            ..Semester::default()
        }
    }

    fn loaded() -> SemestersState {
        SemestersReducer::reduce(
            SemestersState::default(),
            SemesterIntent::SetAll(vec![semester(1, true), semester(2, false)]),
        )
    }

    #[test]
    fn updated_replaces_in_place() {
        let mut changed = semester(1, false);
        changed.description = "renamed".into();
        let state = SemestersReducer::reduce(loaded(), SemesterIntent::Updated(changed));
        assert_eq!(state.semesters[0].description, "renamed");
        assert_eq!(state.semesters.len(), 2);
    }

    #[test]
    fn deleted_absent_is_noop() {
        let before = loaded();
        let after = SemestersReducer::reduce(before.clone(), SemesterIntent::Deleted(99));
        assert_eq!(after, before);
    }

    #[test]
    fn selected_copies_from_list() {
        let state = SemestersReducer::reduce(loaded(), SemesterIntent::Selected(Some(2)));
        assert_eq!(state.selected.unwrap().id, Some(2));
        let cleared = SemestersReducer::reduce(loaded(), SemesterIntent::Selected(None));
        assert!(cleared.selected.is_none());
    }

    #[test]
    fn moved_to_archive_transfers_entry() {
        let state = SemestersReducer::reduce(loaded(), SemesterIntent::MovedToArchive(2));
        assert_eq!(state.semesters.len(), 1);
        assert_eq!(state.archived[0].id, Some(2));
    }

    #[test]
    fn current_other_than_skips_excluded() {
        let state = loaded();
        assert_eq!(state.current_other_than(Some(2)).unwrap().id, Some(1));
        assert!(state.current_other_than(Some(1)).is_none());
    }
}
