//! Action encoders.
//!
//! Thin constructors that label caller data as an [`Action`]. They never
//! fail and have no side effects; `*_start` encoders produce
//! [`Action::Start`] and launch an effect sequence when dispatched.

use crate::effects::Command;
use crate::state::Action;

pub mod semesters {
    use super::*;
    use crate::model::{CopyRange, EntityId, GroupRef, Semester};
    use crate::state::semesters::SemesterIntent;

    pub fn get_all_semesters_start() -> Action {
        Command::GetAllSemesters.into()
    }

    pub fn get_disabled_semesters_start() -> Action {
        Command::GetDisabledSemesters.into()
    }

    pub fn get_archived_semesters_start() -> Action {
        Command::GetArchivedSemesters.into()
    }

    pub fn set_groups_to_semester_start(semester_id: EntityId, groups: Vec<GroupRef>) -> Action {
        Command::SetGroupsToSemester {
            semester_id,
            groups,
        }
        .into()
    }

    pub fn delete_semester_start(semester_id: EntityId) -> Action {
        Command::DeleteSemester(semester_id).into()
    }

    pub fn update_semester_start(semester: Semester) -> Action {
        Command::UpdateSemester(semester).into()
    }

    pub fn add_semester_start(semester: Semester) -> Action {
        Command::AddSemester(semester).into()
    }

    pub fn handle_semester_start(values: Semester) -> Action {
        Command::HandleSemester(values).into()
    }

    pub fn set_default_semester_start(semester_id: EntityId, disabled: bool) -> Action {
        Command::SetDefaultSemester {
            semester_id,
            disabled,
        }
        .into()
    }

    pub fn toggle_semester_visibility_start(semester: Semester) -> Action {
        Command::ToggleSemesterVisibility(semester).into()
    }

    pub fn semester_copy_start(range: CopyRange) -> Action {
        Command::CopySemester(range).into()
    }

    pub fn create_archive_semester_start(semester_id: EntityId) -> Action {
        Command::CreateArchiveSemester(semester_id).into()
    }

    pub fn get_archived_semester_by_id_start(semester_id: EntityId) -> Action {
        Command::GetArchivedSemesterById(semester_id).into()
    }

    pub fn copy_lessons_from_semester_start(range: CopyRange) -> Action {
        Command::CopyLessonsFromSemester(range).into()
    }

    pub fn select_semester(semester_id: Option<EntityId>) -> Action {
        SemesterIntent::Selected(semester_id).into()
    }
}

pub mod students {
    use super::*;
    use crate::model::{EntityId, GroupRef, Student};
    use crate::state::students::StudentIntent;

    pub fn fetch_all_students_start(group_id: EntityId) -> Action {
        Command::FetchAllStudents { group_id }.into()
    }

    /// The student is saved as a member of `group`.
    pub fn submit_student_start(data: Student, group: GroupRef) -> Action {
        Command::SubmitStudent(Student {
            group: Some(group),
            ..data
        })
        .into()
    }

    pub fn delete_student_start(student_id: EntityId) -> Action {
        Command::DeleteStudent(student_id).into()
    }

    pub fn move_students_to_group_start(students: Vec<Student>, group: GroupRef) -> Action {
        Command::MoveStudentsToGroup { students, group }.into()
    }

    pub fn select_student(student_id: Option<EntityId>) -> Action {
        StudentIntent::Selected(student_id).into()
    }
}

pub mod lessons {
    use super::*;
    use crate::model::{EntityId, Lesson};
    use crate::state::lessons::LessonIntent;

    pub fn get_lessons_by_group_start(group_id: EntityId) -> Action {
        Command::GetLessonsByGroup(group_id).into()
    }

    pub fn get_lesson_types_start() -> Action {
        Command::GetLessonTypes.into()
    }

    pub fn submit_lesson_start(lesson: Lesson) -> Action {
        Command::SubmitLesson(lesson).into()
    }

    pub fn delete_lesson_start(lesson_id: EntityId) -> Action {
        Command::DeleteLesson(lesson_id).into()
    }

    pub fn copy_lesson_start(lesson: Lesson, group_ids: Vec<EntityId>) -> Action {
        Command::CopyLesson { lesson, group_ids }.into()
    }

    pub fn select_lesson(lesson_id: Option<EntityId>) -> Action {
        LessonIntent::Selected(lesson_id).into()
    }

    pub fn select_group_id(group_id: Option<EntityId>) -> Action {
        LessonIntent::SetGroupId(group_id).into()
    }
}

pub mod room_types {
    use super::*;
    use crate::model::{EntityId, RoomType};
    use crate::state::room_types::RoomTypeIntent;

    pub fn get_room_types_start() -> Action {
        Command::GetRoomTypes.into()
    }

    pub fn submit_room_type_start(room_type: RoomType) -> Action {
        Command::SubmitRoomType(room_type).into()
    }

    pub fn delete_room_type_start(type_id: EntityId) -> Action {
        Command::DeleteRoomType(type_id).into()
    }

    pub fn get_one_room_type(type_id: Option<EntityId>) -> Action {
        RoomTypeIntent::SelectOne(type_id).into()
    }
}

pub mod schedule {
    use super::*;
    use crate::model::{EntityId, ScheduleItem};
    use crate::state::schedule::{ScheduleIntent, ScheduleType, TeacherViewType};

    pub fn get_schedule_items_start() -> Action {
        Command::GetScheduleItems.into()
    }

    pub fn get_current_semester_start() -> Action {
        Command::GetCurrentSemester.into()
    }

    pub fn get_default_semester_start() -> Action {
        Command::GetDefaultSemester.into()
    }

    pub fn get_full_schedule_start(semester_id: Option<EntityId>) -> Action {
        Command::GetFullSchedule { semester_id }.into()
    }

    pub fn get_group_schedule_start(group_id: EntityId, semester_id: Option<EntityId>) -> Action {
        Command::GetGroupSchedule {
            group_id,
            semester_id,
        }
        .into()
    }

    pub fn get_teacher_schedule_start(
        teacher_id: EntityId,
        semester_id: Option<EntityId>,
    ) -> Action {
        Command::GetTeacherSchedule {
            teacher_id,
            semester_id,
        }
        .into()
    }

    pub fn get_teacher_range_schedule_start(
        teacher_id: EntityId,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Action {
        Command::GetTeacherRangeSchedule {
            teacher_id,
            from: from.into(),
            to: to.into(),
        }
        .into()
    }

    pub fn check_availability_start(item: ScheduleItem) -> Action {
        Command::CheckAvailability(item).into()
    }

    pub fn add_item_to_schedule_start(item: ScheduleItem) -> Action {
        Command::AddItemToSchedule(item).into()
    }

    pub fn delete_schedule_item_start(item_id: EntityId) -> Action {
        Command::DeleteScheduleItem(item_id).into()
    }

    pub fn set_schedule_type(schedule_type: ScheduleType) -> Action {
        ScheduleIntent::SetScheduleType(schedule_type).into()
    }

    pub fn set_schedule_semester_id(semester_id: Option<EntityId>) -> Action {
        ScheduleIntent::SetScheduleSemesterId(semester_id).into()
    }

    pub fn set_item_group_id(group_id: Option<EntityId>) -> Action {
        ScheduleIntent::SetItemGroupId(group_id).into()
    }

    pub fn set_teacher_view_type(view: TeacherViewType) -> Action {
        ScheduleIntent::SetTeacherViewType(view).into()
    }
}

pub mod forms {
    use super::*;
    use serde_json::{Map, Value};

    use crate::state::forms::{FormId, FormIntent};

    pub fn initialize(form: FormId, values: Map<String, Value>) -> Action {
        FormIntent::Initialize(form, values).into()
    }

    pub fn change(form: FormId, field: impl Into<String>, value: Value) -> Action {
        FormIntent::Change {
            form,
            field: field.into(),
            value,
        }
        .into()
    }

    pub fn reset(form: FormId) -> Action {
        FormIntent::Reset(form).into()
    }
}

pub mod notification {
    use super::*;
    use crate::state::notification::NotificationIntent;

    pub fn open_success(message: impl Into<String>) -> Action {
        NotificationIntent::success(message).into()
    }

    pub fn open_error(message: impl Into<String>) -> Action {
        NotificationIntent::error(message).into()
    }

    pub fn close() -> Action {
        NotificationIntent::Close.into()
    }
}

pub mod auth {
    use super::*;

    pub fn logout_start() -> Action {
        Command::Logout.into()
    }

    pub fn activate_user_start(token: impl Into<String>) -> Action {
        Command::ActivateUser {
            token: token.into(),
        }
        .into()
    }
}
