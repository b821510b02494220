//! Command-line surface: one subcommand per start intent.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;

use schedule_client::model::{CopyRange, EntityId, GroupRef, Student};
use schedule_client::{AppState, Command};

/// Drive the schedule service through the client state layer.
#[derive(Parser, Debug)]
#[command(name = "schedule-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the message locale
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Log to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub domain: Domain,
}

#[derive(Subcommand, Debug)]
pub enum Domain {
    /// Semester management
    #[command(subcommand)]
    Semesters(SemesterOp),
    /// Students of a group
    #[command(subcommand)]
    Students(StudentOp),
    /// Lessons of a group
    #[command(subcommand)]
    Lessons(LessonOp),
    /// Room types
    #[command(subcommand)]
    RoomTypes(RoomTypeOp),
    /// Schedule views and items
    #[command(subcommand)]
    Schedule(ScheduleOp),
    /// Session
    #[command(subcommand)]
    Auth(AuthOp),
}

/// Record payload given inline as JSON.
#[derive(Args, Debug)]
pub struct JsonArg {
    #[arg(long)]
    pub json: String,
}

#[derive(Args, Debug)]
pub struct RangeArgs {
    #[arg(long)]
    pub from: EntityId,
    #[arg(long)]
    pub to: EntityId,
}

impl RangeArgs {
    fn range(&self) -> CopyRange {
        CopyRange {
            from_semester_id: self.from,
            to_semester_id: self.to,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SemesterOp {
    List,
    Disabled,
    Archived,
    /// Replace the groups of a semester
    SetGroups {
        id: EntityId,
        #[arg(long = "group", required = true)]
        groups: Vec<EntityId>,
    },
    Delete {
        id: EntityId,
    },
    Update(JsonArg),
    Add(JsonArg),
    /// Save from the semester form (update or create)
    Save(JsonArg),
    SetDefault {
        id: EntityId,
        #[arg(long)]
        disabled: bool,
    },
    ToggleVisibility(JsonArg),
    Copy(RangeArgs),
    Archive {
        id: EntityId,
    },
    ShowArchived {
        id: EntityId,
    },
    CopyLessons(RangeArgs),
}

#[derive(Subcommand, Debug)]
pub enum StudentOp {
    List {
        #[arg(long)]
        group: EntityId,
    },
    Save {
        #[arg(long)]
        group: EntityId,
        #[command(flatten)]
        data: JsonArg,
    },
    Delete {
        id: EntityId,
    },
    /// Move students (JSON array) to another group
    Move {
        #[arg(long)]
        group: EntityId,
        #[command(flatten)]
        data: JsonArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum LessonOp {
    List {
        #[arg(long)]
        group: EntityId,
    },
    Types,
    Save(JsonArg),
    Delete {
        id: EntityId,
    },
    Copy {
        #[arg(long = "group", required = true)]
        groups: Vec<EntityId>,
        #[command(flatten)]
        data: JsonArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoomTypeOp {
    List,
    Save(JsonArg),
    Delete { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleOp {
    Items,
    CurrentSemester,
    DefaultSemester,
    Full {
        #[arg(long)]
        semester: Option<EntityId>,
    },
    Group {
        id: EntityId,
        #[arg(long)]
        semester: Option<EntityId>,
    },
    Teacher {
        id: EntityId,
        #[arg(long)]
        semester: Option<EntityId>,
    },
    /// Teacher lessons between two dd/MM/yyyy dates
    TeacherRange {
        id: EntityId,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    Availability(JsonArg),
    AddItem(JsonArg),
    DeleteItem { id: EntityId },
}

#[derive(Subcommand, Debug)]
pub enum AuthOp {
    Logout,
    Activate { token: String },
}

fn parse<T: DeserializeOwned>(arg: &JsonArg) -> Result<T> {
    serde_json::from_str(&arg.json).context("Invalid --json payload")
}

fn group(id: EntityId) -> GroupRef {
    GroupRef {
        id,
        title: String::new(),
    }
}

impl Domain {
    pub fn command(&self) -> Result<Command> {
        let command = match self {
            Domain::Semesters(op) => match op {
                SemesterOp::List => Command::GetAllSemesters,
                SemesterOp::Disabled => Command::GetDisabledSemesters,
                SemesterOp::Archived => Command::GetArchivedSemesters,
                SemesterOp::SetGroups { id, groups } => Command::SetGroupsToSemester {
                    semester_id: *id,
                    groups: groups.iter().copied().map(group).collect(),
                },
                SemesterOp::Delete { id } => Command::DeleteSemester(*id),
                SemesterOp::Update(json) => Command::UpdateSemester(parse(json)?),
                SemesterOp::Add(json) => Command::AddSemester(parse(json)?),
                SemesterOp::Save(json) => Command::HandleSemester(parse(json)?),
                SemesterOp::SetDefault { id, disabled } => Command::SetDefaultSemester {
                    semester_id: *id,
                    disabled: *disabled,
                },
                SemesterOp::ToggleVisibility(json) => {
                    Command::ToggleSemesterVisibility(parse(json)?)
                }
                SemesterOp::Copy(range) => Command::CopySemester(range.range()),
                SemesterOp::Archive { id } => Command::CreateArchiveSemester(*id),
                SemesterOp::ShowArchived { id } => Command::GetArchivedSemesterById(*id),
                SemesterOp::CopyLessons(range) => Command::CopyLessonsFromSemester(range.range()),
            },
            Domain::Students(op) => match op {
                StudentOp::List { group } => Command::FetchAllStudents { group_id: *group },
                StudentOp::Save { group: id, data } => {
                    let student: Student = parse(data)?;
                    Command::SubmitStudent(Student {
                        group: Some(group(*id)),
                        ..student
                    })
                }
                StudentOp::Delete { id } => Command::DeleteStudent(*id),
                StudentOp::Move { group: id, data } => Command::MoveStudentsToGroup {
                    students: parse(data)?,
                    group: group(*id),
                },
            },
            Domain::Lessons(op) => match op {
                LessonOp::List { group } => Command::GetLessonsByGroup(*group),
                LessonOp::Types => Command::GetLessonTypes,
                LessonOp::Save(json) => Command::SubmitLesson(parse(json)?),
                LessonOp::Delete { id } => Command::DeleteLesson(*id),
                LessonOp::Copy { groups, data } => Command::CopyLesson {
                    lesson: parse(data)?,
                    group_ids: groups.clone(),
                },
            },
            Domain::RoomTypes(op) => match op {
                RoomTypeOp::List => Command::GetRoomTypes,
                RoomTypeOp::Save(json) => Command::SubmitRoomType(parse(json)?),
                RoomTypeOp::Delete { id } => Command::DeleteRoomType(*id),
            },
            Domain::Schedule(op) => match op {
                ScheduleOp::Items => Command::GetScheduleItems,
                ScheduleOp::CurrentSemester => Command::GetCurrentSemester,
                ScheduleOp::DefaultSemester => Command::GetDefaultSemester,
                ScheduleOp::Full { semester } => Command::GetFullSchedule {
                    semester_id: *semester,
                },
                ScheduleOp::Group { id, semester } => Command::GetGroupSchedule {
                    group_id: *id,
                    semester_id: *semester,
                },
                ScheduleOp::Teacher { id, semester } => Command::GetTeacherSchedule {
                    teacher_id: *id,
                    semester_id: *semester,
                },
                ScheduleOp::TeacherRange { id, from, to } => Command::GetTeacherRangeSchedule {
                    teacher_id: *id,
                    from: from.clone(),
                    to: to.clone(),
                },
                ScheduleOp::Availability(json) => Command::CheckAvailability(parse(json)?),
                ScheduleOp::AddItem(json) => Command::AddItemToSchedule(parse(json)?),
                ScheduleOp::DeleteItem { id } => Command::DeleteScheduleItem(*id),
            },
            Domain::Auth(op) => match op {
                AuthOp::Logout => Command::Logout,
                AuthOp::Activate { token } => Command::ActivateUser {
                    token: token.clone(),
                },
            },
        };
        Ok(command)
    }

    /// Load whatever state the command's pre-checks read.
    ///
    /// Every invocation starts from an empty tree, so deleting or saving a
    /// semester needs the semester list first and an availability check
    /// without a semester needs the current one.
    pub fn preload(&self, command: &Command) -> Option<Command> {
        match command {
            Command::DeleteSemester(_) | Command::HandleSemester(_) => {
                Some(Command::GetAllSemesters)
            }
            Command::CheckAvailability(item) if item.semester_id.is_none() => {
                Some(Command::GetCurrentSemester)
            }
            _ => None,
        }
    }

    /// The slice this domain's commands write to.
    pub fn slice(&self, state: &AppState) -> Result<Value> {
        let value = match self {
            Domain::Semesters(SemesterOp::ShowArchived { .. }) => {
                serde_json::to_value(&state.schedule)?
            }
            Domain::Semesters(_) => serde_json::to_value(&state.semesters)?,
            Domain::Students(_) => serde_json::to_value(&state.students)?,
            Domain::Lessons(_) => serde_json::to_value(&state.lessons)?,
            Domain::RoomTypes(_) => serde_json::to_value(&state.room_types)?,
            Domain::Schedule(_) => serde_json::to_value(&state.schedule)?,
            Domain::Auth(_) => serde_json::to_value(&state.auth)?,
        };
        Ok(value)
    }
}
