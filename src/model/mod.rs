//! Typed records exchanged with the schedule service.

mod lesson;
mod refs;
mod schedule;
mod semester;
mod student;

pub use lesson::{Lesson, RoomType};
pub use refs::{DayOfWeek, EvenOdd, GroupRef, Period, RoomRef, SubjectRef, TeacherRef};
pub use schedule::{
    LessonInfo, ScheduleItem, ScheduleRecord, TeacherRangeDay, TeacherRangeLesson,
    TeacherRangeSlot,
};
pub use semester::{CopyRange, Semester};
pub use student::Student;

/// Server-assigned identifier.
pub type EntityId = i64;

/// Records that may carry a server-assigned id.
///
/// Records built client-side before the first save have none.
pub trait Identified {
    fn id(&self) -> Option<EntityId>;
}
