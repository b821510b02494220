use serde::{Deserialize, Serialize};

use super::{
    DayOfWeek, EntityId, EvenOdd, GroupRef, Identified, Period, RoomRef, TeacherRef,
};

/// A lesson placed in the timetable grid.
///
/// `id` is absent for items placed locally that were never saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub lesson_id: EntityId,
    pub period_id: EntityId,
    pub day_of_week: DayOfWeek,
    #[serde(default)]
    pub even_odd: EvenOdd,
    pub room_id: EntityId,
    #[serde(default)]
    pub semester_id: Option<EntityId>,
}

impl Identified for ScheduleItem {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Lesson details embedded in a schedule record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonInfo {
    pub id: EntityId,
    #[serde(default)]
    pub subject_for_site: String,
    #[serde(default)]
    pub lesson_type: String,
    pub teacher: TeacherRef,
    pub group: GroupRef,
    #[serde(default)]
    pub grouped: bool,
}

/// A saved timetable entry as returned by the schedule endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: EntityId,
    pub day_of_week: DayOfWeek,
    #[serde(default)]
    pub even_odd: EvenOdd,
    pub lesson: LessonInfo,
    pub period: Period,
    pub room: RoomRef,
}

/// One day of a teacher's date-range schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherRangeDay {
    /// `dd-MM-yyyy`
    pub date: String,
    #[serde(default)]
    pub schedule: Vec<TeacherRangeSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherRangeSlot {
    #[serde(rename = "class")]
    pub period: Period,
    #[serde(default)]
    pub lessons: Vec<TeacherRangeLesson>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRangeLesson {
    #[serde(default)]
    pub subject_for_site: String,
    #[serde(default)]
    pub group_name: String,
    pub room: RoomRef,
}
