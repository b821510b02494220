//! Start intents: actions that launch an effect sequence.

use crate::model::{CopyRange, EntityId, GroupRef, Lesson, RoomType, ScheduleItem, Semester, Student};

/// A request to run one effect sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Semesters
    GetAllSemesters,
    GetDisabledSemesters,
    GetArchivedSemesters,
    SetGroupsToSemester {
        semester_id: EntityId,
        groups: Vec<GroupRef>,
    },
    DeleteSemester(EntityId),
    UpdateSemester(Semester),
    AddSemester(Semester),
    /// Save from the semester form: update when the record has an id,
    /// otherwise create. Demotes a different current semester first.
    HandleSemester(Semester),
    SetDefaultSemester {
        semester_id: EntityId,
        /// Reload the disabled list instead of the active one.
        disabled: bool,
    },
    ToggleSemesterVisibility(Semester),
    CopySemester(CopyRange),
    CreateArchiveSemester(EntityId),
    GetArchivedSemesterById(EntityId),
    CopyLessonsFromSemester(CopyRange),

    // Students
    FetchAllStudents {
        group_id: EntityId,
    },
    SubmitStudent(Student),
    DeleteStudent(EntityId),
    MoveStudentsToGroup {
        students: Vec<Student>,
        group: GroupRef,
    },

    // Lessons
    GetLessonsByGroup(EntityId),
    GetLessonTypes,
    SubmitLesson(Lesson),
    DeleteLesson(EntityId),
    CopyLesson {
        lesson: Lesson,
        group_ids: Vec<EntityId>,
    },

    // Room types
    GetRoomTypes,
    SubmitRoomType(RoomType),
    DeleteRoomType(EntityId),

    // Schedule
    GetScheduleItems,
    GetCurrentSemester,
    GetDefaultSemester,
    GetFullSchedule {
        semester_id: Option<EntityId>,
    },
    GetGroupSchedule {
        group_id: EntityId,
        semester_id: Option<EntityId>,
    },
    GetTeacherSchedule {
        teacher_id: EntityId,
        semester_id: Option<EntityId>,
    },
    /// `from` and `to` are `dd/MM/yyyy` dates.
    GetTeacherRangeSchedule {
        teacher_id: EntityId,
        from: String,
        to: String,
    },
    CheckAvailability(ScheduleItem),
    AddItemToSchedule(ScheduleItem),
    DeleteScheduleItem(EntityId),

    // Auth
    Logout,
    ActivateUser {
        token: String,
    },
}

/// Cancellation key of a [`Command`].
///
/// Two commands with the same kind never run concurrently: starting one
/// preempts the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    GetAllSemesters,
    GetDisabledSemesters,
    GetArchivedSemesters,
    SetGroupsToSemester,
    DeleteSemester,
    UpdateSemester,
    AddSemester,
    HandleSemester,
    SetDefaultSemester,
    ToggleSemesterVisibility,
    CopySemester,
    CreateArchiveSemester,
    GetArchivedSemesterById,
    CopyLessonsFromSemester,
    FetchAllStudents,
    SubmitStudent,
    DeleteStudent,
    MoveStudentsToGroup,
    GetLessonsByGroup,
    GetLessonTypes,
    SubmitLesson,
    DeleteLesson,
    CopyLesson,
    GetRoomTypes,
    SubmitRoomType,
    DeleteRoomType,
    GetScheduleItems,
    GetCurrentSemester,
    GetDefaultSemester,
    GetFullSchedule,
    GetGroupSchedule,
    GetTeacherSchedule,
    GetTeacherRangeSchedule,
    CheckAvailability,
    AddItemToSchedule,
    DeleteScheduleItem,
    Logout,
    ActivateUser,
}

impl CommandKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::GetAllSemesters => "GET_ALL_SEMESTERS_START",
            CommandKind::GetDisabledSemesters => "GET_DISABLED_SEMESTERS_START",
            CommandKind::GetArchivedSemesters => "SET_ARCHIVED_SEMESTERS_START",
            CommandKind::SetGroupsToSemester => "SET_GROUPS_TO_SEMESTER_START",
            CommandKind::DeleteSemester => "DELETE_SEMESTER_START",
            CommandKind::UpdateSemester => "UPDATE_SEMESTER_START",
            CommandKind::AddSemester => "ADD_SEMESTER_START",
            CommandKind::HandleSemester => "HANDLE_SEMESTER_START",
            CommandKind::SetDefaultSemester => "SET_DEFAULT_SEMESTER_START",
            CommandKind::ToggleSemesterVisibility => "TOGGLE_SEMESTER_VISIBILITY_START",
            CommandKind::CopySemester => "SET_SEMESTER_COPY_START",
            CommandKind::CreateArchiveSemester => "CREATE_ARCHIVE_SEMESTER_START",
            CommandKind::GetArchivedSemesterById => "GET_ARCHIVE_SEMESTER_BY_ID_START",
            CommandKind::CopyLessonsFromSemester => "COPY_LESSONS_FROM_SEMESTER_START",
            CommandKind::FetchAllStudents => "FETCH_ALL_STUDENTS",
            CommandKind::SubmitStudent => "SUBMIT_STUDENT_FORM",
            CommandKind::DeleteStudent => "DELETE_STUDENT_START",
            CommandKind::MoveStudentsToGroup => "MOVE_STUDENTS_TO_GROUP_START",
            CommandKind::GetLessonsByGroup => "GET_LESSONS_BY_GROUP_START",
            CommandKind::GetLessonTypes => "GET_LESSON_TYPES_START",
            CommandKind::SubmitLesson => "SUBMIT_LESSON_START",
            CommandKind::DeleteLesson => "DELETE_LESSON_START",
            CommandKind::CopyLesson => "COPY_LESSON_START",
            CommandKind::GetRoomTypes => "GET_ROOM_TYPES_START",
            CommandKind::SubmitRoomType => "SUBMIT_ROOM_TYPE_START",
            CommandKind::DeleteRoomType => "DELETE_ROOM_TYPE_START",
            CommandKind::GetScheduleItems => "GET_SCHEDULE_ITEMS_START",
            CommandKind::GetCurrentSemester => "GET_CURRENT_SEMESTER_START",
            CommandKind::GetDefaultSemester => "GET_DEFAULT_SEMESTER_START",
            CommandKind::GetFullSchedule => "GET_FULL_SCHEDULE_START",
            CommandKind::GetGroupSchedule => "GET_GROUP_SCHEDULE_START",
            CommandKind::GetTeacherSchedule => "GET_TEACHER_SCHEDULE_START",
            CommandKind::GetTeacherRangeSchedule => "GET_TEACHER_RANGE_SCHEDULE_START",
            CommandKind::CheckAvailability => "CHECK_AVAILABILITY_SCHEDULE_START",
            CommandKind::AddItemToSchedule => "ADD_ITEM_TO_SCHEDULE_START",
            CommandKind::DeleteScheduleItem => "DELETE_SCHEDULE_ITEM_START",
            CommandKind::Logout => "AUTH_USER_LOGOUT_START",
            CommandKind::ActivateUser => "ACTIVATE_USER_START",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::GetAllSemesters => CommandKind::GetAllSemesters,
            Command::GetDisabledSemesters => CommandKind::GetDisabledSemesters,
            Command::GetArchivedSemesters => CommandKind::GetArchivedSemesters,
            Command::SetGroupsToSemester { .. } => CommandKind::SetGroupsToSemester,
            Command::DeleteSemester(_) => CommandKind::DeleteSemester,
            Command::UpdateSemester(_) => CommandKind::UpdateSemester,
            Command::AddSemester(_) => CommandKind::AddSemester,
            Command::HandleSemester(_) => CommandKind::HandleSemester,
            Command::SetDefaultSemester { .. } => CommandKind::SetDefaultSemester,
            Command::ToggleSemesterVisibility(_) => CommandKind::ToggleSemesterVisibility,
            Command::CopySemester(_) => CommandKind::CopySemester,
            Command::CreateArchiveSemester(_) => CommandKind::CreateArchiveSemester,
            Command::GetArchivedSemesterById(_) => CommandKind::GetArchivedSemesterById,
            Command::CopyLessonsFromSemester(_) => CommandKind::CopyLessonsFromSemester,
            Command::FetchAllStudents { .. } => CommandKind::FetchAllStudents,
            Command::SubmitStudent(_) => CommandKind::SubmitStudent,
            Command::DeleteStudent(_) => CommandKind::DeleteStudent,
            Command::MoveStudentsToGroup { .. } => CommandKind::MoveStudentsToGroup,
            Command::GetLessonsByGroup(_) => CommandKind::GetLessonsByGroup,
            Command::GetLessonTypes => CommandKind::GetLessonTypes,
            Command::SubmitLesson(_) => CommandKind::SubmitLesson,
            Command::DeleteLesson(_) => CommandKind::DeleteLesson,
            Command::CopyLesson { .. } => CommandKind::CopyLesson,
            Command::GetRoomTypes => CommandKind::GetRoomTypes,
            Command::SubmitRoomType(_) => CommandKind::SubmitRoomType,
            Command::DeleteRoomType(_) => CommandKind::DeleteRoomType,
            Command::GetScheduleItems => CommandKind::GetScheduleItems,
            Command::GetCurrentSemester => CommandKind::GetCurrentSemester,
            Command::GetDefaultSemester => CommandKind::GetDefaultSemester,
            Command::GetFullSchedule { .. } => CommandKind::GetFullSchedule,
            Command::GetGroupSchedule { .. } => CommandKind::GetGroupSchedule,
            Command::GetTeacherSchedule { .. } => CommandKind::GetTeacherSchedule,
            Command::GetTeacherRangeSchedule { .. } => CommandKind::GetTeacherRangeSchedule,
            Command::CheckAvailability(_) => CommandKind::CheckAvailability,
            Command::AddItemToSchedule(_) => CommandKind::AddItemToSchedule,
            Command::DeleteScheduleItem(_) => CommandKind::DeleteScheduleItem,
            Command::Logout => CommandKind::Logout,
            Command::ActivateUser { .. } => CommandKind::ActivateUser,
        }
    }
}
