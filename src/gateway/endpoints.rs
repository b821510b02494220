//! Resource paths of the schedule service.

pub const SEMESTERS: &str = "semesters";
pub const DISABLED_SEMESTERS: &str = "semesters/disabled";
pub const ARCHIVED_SEMESTERS: &str = "semesters/archived";
pub const CURRENT_SEMESTER: &str = "semesters/current";
pub const DEFAULT_SEMESTER: &str = "semesters/default";
pub const SEMESTER_COPY: &str = "semesters/copy-semester";
pub const LESSONS_FROM_SEMESTER_COPY: &str = "lessons/copy-lessons";
pub const ARCHIVE_SEMESTER: &str = "archive";

pub const STUDENTS: &str = "students";
pub const GROUPS: &str = "groups";

pub const LESSONS: &str = "lessons";
pub const LESSON_TYPES: &str = "lessons/types";
pub const LESSON_COPY: &str = "lessons/copy-lesson";

pub const ROOM_TYPES: &str = "room-types";

pub const SCHEDULES: &str = "schedules";
pub const SCHEDULE_AVAILABILITY: &str = "schedules/data-before";
pub const FULL_SCHEDULE: &str = "schedules/full/semester";
pub const GROUP_SCHEDULE: &str = "schedules/full/groups";
pub const TEACHER_SCHEDULE: &str = "schedules/full/teachers";
pub const TEACHER_RANGE_SCHEDULE: &str = "schedules/full/teachers/date-range";

pub const SIGN_OUT: &str = "auth/sign-out";
pub const ACTIVATE_ACCOUNT: &str = "auth/activation-account";

/// `<collection>/<id>`
pub fn item(collection: &str, id: i64) -> String {
    format!("{}/{}", collection, id)
}
