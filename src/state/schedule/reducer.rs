//! Reducer for the schedule slice.

use crate::state::collection::{remove_by_id, upsert_by_id};
use crate::state::mvi::Reducer;

use super::intent::ScheduleIntent;
use super::mapper::{full_schedule, week_schedule};
use super::state::{ScheduleState, ScheduleView};

pub struct ScheduleReducer;

impl Reducer for ScheduleReducer {
    type State = ScheduleState;
    type Intent = ScheduleIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScheduleIntent::SetItems(items) => state.items = items,
            ScheduleIntent::SetCurrentSemester(semester) => {
                state.current_semester = Some(semester)
            }
            ScheduleIntent::SetDefaultSemester(semester) => {
                state.default_semester = Some(semester)
            }
            ScheduleIntent::CheckAvailability(availability) => state.availability = availability,
            ScheduleIntent::AddItem(item) => upsert_by_id(&mut state.items, item),
            ScheduleIntent::SetScheduleType(schedule_type) => {
                state.view = ScheduleView::Empty;
                state.schedule_type = schedule_type;
            }
            ScheduleIntent::SetFullSchedule(records) => {
                state.view = ScheduleView::Full(full_schedule(records))
            }
            ScheduleIntent::SetGroupSchedule(records) => {
                state.view = ScheduleView::Group(week_schedule(records))
            }
            ScheduleIntent::SetTeacherSchedule(records) => {
                state.view = ScheduleView::Teacher(week_schedule(records))
            }
            ScheduleIntent::SetTeacherRangeSchedule(days) => {
                state.view = ScheduleView::TeacherRange(days);
                state.schedule_group_id = None;
            }
            ScheduleIntent::SetItemGroupId(id) => state.item_group_id = id,
            ScheduleIntent::SetScheduleGroupId(id) => state.schedule_group_id = id,
            ScheduleIntent::SetScheduleTeacherId(id) => state.schedule_teacher_id = id,
            ScheduleIntent::SetScheduleSemesterId(id) => {
                state.schedule_group_id = None;
                state.schedule_teacher_id = None;
                state.schedule_semester_id = id;
            }
            ScheduleIntent::DeleteItem(id) => {
                if remove_by_id(&mut state.items, id).is_none() {
                    tracing::debug!(id, "Schedule item to delete not found");
                }
            }
            ScheduleIntent::SetSemesterList(semesters) => state.semesters = semesters,
            ScheduleIntent::SetTeacherViewType(view) => state.teacher_view = view,
        }
        state
    }
}
