//! Semester sequences.

use crate::gateway::{endpoints, ApiRequest};
use crate::i18n::keys;
use crate::model::{CopyRange, EntityId, GroupRef, ScheduleRecord, Semester};
use crate::state::forms::{FormId, FormIntent};
use crate::state::notification::NotificationIntent;
use crate::state::schedule::{ScheduleIntent, ScheduleType};
use crate::state::semesters::SemesterIntent;
use crate::state::Action;

use super::context::EffectContext;
use super::Outcome;

pub(super) async fn get_all(ctx: &EffectContext) -> Outcome {
    let semesters: Vec<Semester> = ctx.fetch(ApiRequest::get(endpoints::SEMESTERS)).await?;
    Ok(vec![SemesterIntent::SetAll(semesters).into()])
}

pub(super) async fn get_disabled(ctx: &EffectContext) -> Outcome {
    let semesters: Vec<Semester> = ctx
        .fetch(ApiRequest::get(endpoints::DISABLED_SEMESTERS))
        .await?;
    Ok(vec![SemesterIntent::SetAll(semesters).into()])
}

pub(super) async fn get_archived(ctx: &EffectContext) -> Outcome {
    let semesters: Vec<Semester> = ctx
        .fetch(ApiRequest::get(endpoints::ARCHIVED_SEMESTERS))
        .await?;
    Ok(vec![SemesterIntent::SetArchived(semesters).into()])
}

pub(super) async fn set_groups(
    ctx: &EffectContext,
    semester_id: EntityId,
    groups: &[GroupRef],
) -> Outcome {
    let path = format!("{}/groups", endpoints::item(endpoints::SEMESTERS, semester_id));
    let request = groups
        .iter()
        .fold(ApiRequest::put(path), |request, group| {
            request.query("groupId", group.id)
        });
    let semester: Semester = ctx.fetch(request).await?;
    Ok(vec![
        SemesterIntent::Updated(semester).into(),
        SemesterIntent::Selected(None).into(),
        FormIntent::Reset(FormId::Semester).into(),
        ctx.success(keys::FORM_SEMESTER_LABEL, keys::UPDATED_LABEL),
    ])
}

/// Refuses to delete the current semester, without calling the service.
pub(super) async fn delete(ctx: &EffectContext, semester_id: EntityId) -> Outcome {
    let state = ctx.state();
    let Some(semester) = state.semesters.find(semester_id) else {
        tracing::debug!(semester_id, "Semester to delete is not loaded");
        let message = ctx.translator().t(keys::COMMON_ERROR_MESSAGE);
        return Ok(vec![NotificationIntent::error(message).into()]);
    };
    if semester.current_semester {
        let message = ctx.translator().t(keys::SEMESTER_SERVICE_IS_ACTIVE);
        return Ok(vec![NotificationIntent::error(message).into()]);
    }

    ctx.call(ApiRequest::delete(endpoints::item(
        endpoints::SEMESTERS,
        semester_id,
    )))
    .await?;
    Ok(vec![
        SemesterIntent::Deleted(semester_id).into(),
        ctx.success(keys::FORM_SEMESTER_LABEL, keys::DELETED_LABEL),
    ])
}

pub(super) async fn update(ctx: &EffectContext, semester: &Semester) -> Outcome {
    let updated: Semester = ctx
        .fetch(ApiRequest::put(endpoints::SEMESTERS).json(semester)?)
        .await?;
    Ok(vec![
        SemesterIntent::Updated(updated).into(),
        SemesterIntent::Selected(None).into(),
        FormIntent::Reset(FormId::Semester).into(),
        ctx.success(keys::FORM_SEMESTER_LABEL, keys::UPDATED_LABEL),
    ])
}

pub(super) async fn add(ctx: &EffectContext, semester: &Semester) -> Outcome {
    let created: Semester = ctx
        .fetch(ApiRequest::post(endpoints::SEMESTERS).json(semester)?)
        .await?;
    Ok(vec![
        SemesterIntent::Added(created).into(),
        FormIntent::Reset(FormId::Semester).into(),
        ctx.success(keys::FORM_SEMESTER_LABEL, keys::CREATED_LABEL),
    ])
}

/// Only one semester may be current: saving one flagged as current first
/// clears the flag on the previous holder.
pub(super) async fn handle(ctx: &EffectContext, values: &Semester) -> Outcome {
    if values.current_semester {
        let state = ctx.state();
        if let Some(previous) = state.semesters.current_other_than(values.id) {
            let demoted = Semester {
                current_semester: false,
                ..previous.clone()
            };
            let updated: Semester = ctx
                .fetch(ApiRequest::put(endpoints::SEMESTERS).json(&demoted)?)
                .await?;
            ctx.emit_one(SemesterIntent::Updated(updated)).await;
        }
    }

    if values.id.is_some() {
        update(ctx, values).await
    } else {
        add(ctx, values).await
    }
}

/// A failed reload is reported on its own; the sequence still completes.
pub(super) async fn set_default(
    ctx: &EffectContext,
    semester_id: EntityId,
    disabled: bool,
) -> Outcome {
    let semester: Semester = ctx
        .fetch(ApiRequest::put(endpoints::DEFAULT_SEMESTER).query("semesterId", semester_id))
        .await?;
    ctx.emit_one(SemesterIntent::Updated(semester)).await;

    let reload = if disabled {
        get_disabled(ctx).await
    } else {
        get_all(ctx).await
    };
    match reload {
        Ok(actions) => ctx.emit(actions).await,
        Err(err) => ctx.notify_error(&err).await,
    }

    Ok(vec![
        FormIntent::Reset(FormId::Semester).into(),
        ctx.success(keys::FORM_SEMESTER_LABEL, keys::UPDATED_LABEL),
    ])
}

/// Hidden and shown semesters are listed separately, so the toggled
/// semester leaves the list being displayed.
pub(super) async fn toggle_visibility(ctx: &EffectContext, semester: &Semester) -> Outcome {
    ctx.call(ApiRequest::put(endpoints::SEMESTERS).json(semester)?)
        .await?;
    let mut actions: Vec<Action> = Vec::with_capacity(2);
    if let Some(id) = semester.id {
        actions.push(SemesterIntent::Deleted(id).into());
    }
    actions.push(ctx.success(keys::FORM_SEMESTER_LABEL, keys::UPDATED_LABEL));
    Ok(actions)
}

fn copy_request(path: &str, range: &CopyRange) -> ApiRequest {
    ApiRequest::post(path)
        .query("fromSemesterId", range.from_semester_id)
        .query("toSemesterId", range.to_semester_id)
}

pub(super) async fn copy(ctx: &EffectContext, range: &CopyRange) -> Outcome {
    ctx.call(copy_request(endpoints::SEMESTER_COPY, range)).await?;
    Ok(vec![ctx.success(keys::FORM_SEMESTER_LABEL, keys::COPIED_LABEL)])
}

pub(super) async fn create_archive(ctx: &EffectContext, semester_id: EntityId) -> Outcome {
    ctx.call(ApiRequest::post(endpoints::item(
        endpoints::ARCHIVE_SEMESTER,
        semester_id,
    )))
    .await?;
    Ok(vec![
        SemesterIntent::MovedToArchive(semester_id).into(),
        ctx.success(keys::FORM_SEMESTER_LABEL, keys::ARCHIVED_LABEL),
    ])
}

pub(super) async fn get_archived_by_id(ctx: &EffectContext, semester_id: EntityId) -> Outcome {
    ctx.emit_one(ScheduleIntent::SetScheduleType(ScheduleType::Archived))
        .await;
    let records: Vec<ScheduleRecord> = ctx
        .fetch(ApiRequest::get(endpoints::item(
            endpoints::ARCHIVE_SEMESTER,
            semester_id,
        )))
        .await?;
    Ok(vec![ScheduleIntent::SetFullSchedule(records).into()])
}

pub(super) async fn copy_lessons(ctx: &EffectContext, range: &CopyRange) -> Outcome {
    ctx.call(copy_request(endpoints::LESSONS_FROM_SEMESTER_COPY, range))
        .await?;
    Ok(vec![ctx.success(keys::FORM_LESSON_LABEL, keys::COPIED_LABEL)])
}
