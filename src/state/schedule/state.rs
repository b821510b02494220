//! State for the schedule slice.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{EntityId, ScheduleItem, Semester, TeacherRangeDay};
use crate::state::mvi::SliceState;

use super::mapper::{FullSchedule, WeekSchedule};

/// Which schedule the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    #[default]
    Full,
    Group,
    Teacher,
    Archived,
}

/// Layout of the teacher date-range results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeacherViewType {
    #[default]
    #[serde(rename = "block-view")]
    Block,
    #[serde(rename = "table-view")]
    Table,
}

/// The loaded view-specific schedule.
///
/// A single tagged value: loading one view drops whatever other view was
/// loaded, so at most one is ever populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum ScheduleView {
    #[default]
    Empty,
    Full(FullSchedule),
    Group(WeekSchedule),
    Teacher(WeekSchedule),
    TeacherRange(Vec<TeacherRangeDay>),
}

impl ScheduleView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ScheduleView::Empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleState {
    /// Items placed in the editing grid, in insertion order.
    pub items: Vec<ScheduleItem>,
    /// Room/teacher availability for the item being placed.
    pub availability: Map<String, Value>,
    pub view: ScheduleView,
    pub schedule_type: ScheduleType,
    pub schedule_group_id: Option<EntityId>,
    pub schedule_teacher_id: Option<EntityId>,
    pub schedule_semester_id: Option<EntityId>,
    pub item_group_id: Option<EntityId>,
    pub current_semester: Option<Semester>,
    pub default_semester: Option<Semester>,
    pub semesters: Vec<Semester>,
    pub teacher_view: TeacherViewType,
}

impl SliceState for ScheduleState {}

impl ScheduleState {
    pub fn full_schedule(&self) -> Option<&FullSchedule> {
        match &self.view {
            ScheduleView::Full(full) => Some(full),
            _ => None,
        }
    }

    pub fn group_schedule(&self) -> Option<&WeekSchedule> {
        match &self.view {
            ScheduleView::Group(week) => Some(week),
            _ => None,
        }
    }

    pub fn teacher_schedule(&self) -> Option<&WeekSchedule> {
        match &self.view {
            ScheduleView::Teacher(week) => Some(week),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_shape() {
        let state = ScheduleState::default();
        assert!(state.items.is_empty());
        assert!(state.view.is_empty());
        assert_eq!(state.schedule_type, ScheduleType::Full);
        assert_eq!(state.teacher_view, TeacherViewType::Block);
        assert!(state.schedule_group_id.is_none());
    }

    #[test]
    fn teacher_view_wire_names() {
        assert_eq!(
            serde_json::to_string(&TeacherViewType::Table).unwrap(),
            "\"table-view\""
        );
        let parsed: ScheduleType = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(parsed, ScheduleType::Archived);
    }
}
