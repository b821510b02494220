//! Effect sequences.
//!
//! A [`Command`] dispatched to the store starts one sequence: an optional
//! pre-check against the current state, one or more gateway calls, then a
//! success bundle or an error notification. At most one sequence per
//! [`CommandKind`] runs at a time; starting another preempts it.

mod auth;
mod command;
mod context;
mod lessons;
mod registry;
mod room_types;
mod schedule;
mod semesters;
mod students;

pub use command::{Command, CommandKind};
pub use context::EffectContext;
pub use registry::{TaskRegistry, Ticket};

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::gateway::{Gateway, GatewayError};
use crate::i18n::Translator;
use crate::state::{Action, AppState};
use crate::store::StoreMessage;

/// Result of a sequence: the success bundle, or the failure to report.
pub(crate) type Outcome = Result<Vec<Action>, GatewayError>;

/// Collaborators shared by every sequence.
#[derive(Clone)]
pub struct EffectRuntime {
    gateway: Arc<dyn Gateway>,
    translator: Arc<Translator>,
}

impl EffectRuntime {
    pub fn new(gateway: Arc<dyn Gateway>, translator: Arc<Translator>) -> Self {
        Self {
            gateway,
            translator,
        }
    }

    pub fn translator(&self) -> &Arc<Translator> {
        &self.translator
    }

    pub(crate) fn context(
        &self,
        store: mpsc::WeakSender<StoreMessage>,
        state: watch::Receiver<Arc<AppState>>,
        ticket: Ticket,
    ) -> EffectContext {
        EffectContext::new(
            self.gateway.clone(),
            self.translator.clone(),
            store,
            state,
            ticket,
        )
    }

    /// Run `command` to completion and report the end to the store.
    pub(crate) async fn run(ctx: EffectContext, command: Command) {
        tracing::info!(kind = %ctx.ticket().kind, generation = ctx.ticket().generation, "Sequence started");
        match execute(&ctx, &command).await {
            Ok(actions) => ctx.emit(actions).await,
            Err(err) => ctx.notify_error(&err).await,
        }
        ctx.finish().await;
    }
}

async fn execute(ctx: &EffectContext, command: &Command) -> Outcome {
    match command {
        Command::GetAllSemesters => semesters::get_all(ctx).await,
        Command::GetDisabledSemesters => semesters::get_disabled(ctx).await,
        Command::GetArchivedSemesters => semesters::get_archived(ctx).await,
        Command::SetGroupsToSemester {
            semester_id,
            groups,
        } => semesters::set_groups(ctx, *semester_id, groups).await,
        Command::DeleteSemester(id) => semesters::delete(ctx, *id).await,
        Command::UpdateSemester(semester) => semesters::update(ctx, semester).await,
        Command::AddSemester(semester) => semesters::add(ctx, semester).await,
        Command::HandleSemester(semester) => semesters::handle(ctx, semester).await,
        Command::SetDefaultSemester {
            semester_id,
            disabled,
        } => semesters::set_default(ctx, *semester_id, *disabled).await,
        Command::ToggleSemesterVisibility(semester) => {
            semesters::toggle_visibility(ctx, semester).await
        }
        Command::CopySemester(range) => semesters::copy(ctx, range).await,
        Command::CreateArchiveSemester(id) => semesters::create_archive(ctx, *id).await,
        Command::GetArchivedSemesterById(id) => semesters::get_archived_by_id(ctx, *id).await,
        Command::CopyLessonsFromSemester(range) => semesters::copy_lessons(ctx, range).await,

        Command::FetchAllStudents { group_id } => students::fetch_all(ctx, *group_id).await,
        Command::SubmitStudent(student) => students::submit(ctx, student).await,
        Command::DeleteStudent(id) => students::delete(ctx, *id).await,
        Command::MoveStudentsToGroup { students, group } => {
            students::move_to_group(ctx, students, group).await
        }

        Command::GetLessonsByGroup(group_id) => lessons::get_by_group(ctx, *group_id).await,
        Command::GetLessonTypes => lessons::get_types(ctx).await,
        Command::SubmitLesson(lesson) => lessons::submit(ctx, lesson).await,
        Command::DeleteLesson(id) => lessons::delete(ctx, *id).await,
        Command::CopyLesson { lesson, group_ids } => lessons::copy(ctx, lesson, group_ids).await,

        Command::GetRoomTypes => room_types::get_all(ctx).await,
        Command::SubmitRoomType(room_type) => room_types::submit(ctx, room_type).await,
        Command::DeleteRoomType(id) => room_types::delete(ctx, *id).await,

        Command::GetScheduleItems => schedule::get_items(ctx).await,
        Command::GetCurrentSemester => schedule::get_current_semester(ctx).await,
        Command::GetDefaultSemester => schedule::get_default_semester(ctx).await,
        Command::GetFullSchedule { semester_id } => schedule::get_full(ctx, *semester_id).await,
        Command::GetGroupSchedule {
            group_id,
            semester_id,
        } => schedule::get_group(ctx, *group_id, *semester_id).await,
        Command::GetTeacherSchedule {
            teacher_id,
            semester_id,
        } => schedule::get_teacher(ctx, *teacher_id, *semester_id).await,
        Command::GetTeacherRangeSchedule {
            teacher_id,
            from,
            to,
        } => schedule::get_teacher_range(ctx, *teacher_id, from, to).await,
        Command::CheckAvailability(item) => schedule::check_availability(ctx, item).await,
        Command::AddItemToSchedule(item) => schedule::add_item(ctx, item).await,
        Command::DeleteScheduleItem(id) => schedule::delete_item(ctx, *id).await,

        Command::Logout => auth::logout(ctx).await,
        Command::ActivateUser { token } => auth::activate(ctx, token).await,
    }
}
