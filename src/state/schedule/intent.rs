//! Intents for the schedule slice.

use serde_json::{Map, Value};

use crate::model::{EntityId, ScheduleItem, ScheduleRecord, Semester, TeacherRangeDay};
use crate::state::mvi::Intent;

use super::state::{ScheduleType, TeacherViewType};

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleIntent {
    SetItems(Vec<ScheduleItem>),
    SetCurrentSemester(Semester),
    SetDefaultSemester(Semester),
    CheckAvailability(Map<String, Value>),
    /// Upsert by id; items without id are always appended.
    AddItem(ScheduleItem),
    /// Switch the active view mode; clears every loaded view.
    SetScheduleType(ScheduleType),
    SetFullSchedule(Vec<ScheduleRecord>),
    SetGroupSchedule(Vec<ScheduleRecord>),
    SetTeacherSchedule(Vec<ScheduleRecord>),
    SetTeacherRangeSchedule(Vec<TeacherRangeDay>),
    SetItemGroupId(Option<EntityId>),
    SetScheduleGroupId(Option<EntityId>),
    SetScheduleTeacherId(Option<EntityId>),
    /// Also forgets the selected group and teacher.
    SetScheduleSemesterId(Option<EntityId>),
    DeleteItem(EntityId),
    SetSemesterList(Vec<Semester>),
    SetTeacherViewType(TeacherViewType),
}

impl Intent for ScheduleIntent {
    fn kind(&self) -> &'static str {
        match self {
            ScheduleIntent::SetItems(_) => "SET_SCHEDULE_ITEMS",
            ScheduleIntent::SetCurrentSemester(_) => "SET_CURRENT_SEMESTER",
            ScheduleIntent::SetDefaultSemester(_) => "SET_DEFAULT_SEMESTER",
            ScheduleIntent::CheckAvailability(_) => "CHECK_AVAILABILITY_SCHEDULE",
            ScheduleIntent::AddItem(_) => "ADD_ITEM_TO_SCHEDULE",
            ScheduleIntent::SetScheduleType(_) => "SET_SCHEDULE_TYPE",
            ScheduleIntent::SetFullSchedule(_) => "SET_FULL_SCHEDULE",
            ScheduleIntent::SetGroupSchedule(_) => "SET_GROUP_SCHEDULE",
            ScheduleIntent::SetTeacherSchedule(_) => "SET_TEACHER_SCHEDULE",
            ScheduleIntent::SetTeacherRangeSchedule(_) => "SET_TEACHER_RANGE_SCHEDULE",
            ScheduleIntent::SetItemGroupId(_) => "SET_ITEM_GROUP_ID",
            ScheduleIntent::SetScheduleGroupId(_) => "SET_SCHEDULE_GROUP_ID",
            ScheduleIntent::SetScheduleTeacherId(_) => "SET_SCHEDULE_TEACHER_ID",
            ScheduleIntent::SetScheduleSemesterId(_) => "SET_SCHEDULE_SEMESTER_ID",
            ScheduleIntent::DeleteItem(_) => "DELETE_ITEM_FROM_SCHEDULE",
            ScheduleIntent::SetSemesterList(_) => "SET_SEMESTER_LIST",
            ScheduleIntent::SetTeacherViewType(_) => "SET_TEACHER_VIEW_TYPE",
        }
    }
}
