//! Schedule sequences.

use serde_json::{Map, Value};

use crate::gateway::{endpoints, ApiRequest};
use crate::i18n::keys;
use crate::model::{EntityId, ScheduleItem, ScheduleRecord, Semester, TeacherRangeDay};
use crate::state::forms::{FormId, FormIntent};
use crate::state::schedule::ScheduleIntent;

use super::context::EffectContext;
use super::Outcome;

fn with_semester(request: ApiRequest, semester_id: Option<EntityId>) -> ApiRequest {
    match semester_id {
        Some(id) => request.query("semesterId", id),
        None => request,
    }
}

pub(super) async fn get_items(ctx: &EffectContext) -> Outcome {
    let items: Vec<ScheduleItem> = ctx.fetch(ApiRequest::get(endpoints::SCHEDULES)).await?;
    Ok(vec![ScheduleIntent::SetItems(items).into()])
}

pub(super) async fn get_current_semester(ctx: &EffectContext) -> Outcome {
    let semester: Semester = ctx
        .fetch(ApiRequest::get(endpoints::CURRENT_SEMESTER))
        .await?;
    Ok(vec![ScheduleIntent::SetCurrentSemester(semester).into()])
}

pub(super) async fn get_default_semester(ctx: &EffectContext) -> Outcome {
    let semester: Semester = ctx
        .fetch(ApiRequest::get(endpoints::DEFAULT_SEMESTER))
        .await?;
    Ok(vec![ScheduleIntent::SetDefaultSemester(semester).into()])
}

pub(super) async fn get_full(ctx: &EffectContext, semester_id: Option<EntityId>) -> Outcome {
    let request = with_semester(ApiRequest::get(endpoints::FULL_SCHEDULE), semester_id);
    let records: Vec<ScheduleRecord> = ctx.fetch(request).await?;
    Ok(vec![ScheduleIntent::SetFullSchedule(records).into()])
}

pub(super) async fn get_group(
    ctx: &EffectContext,
    group_id: EntityId,
    semester_id: Option<EntityId>,
) -> Outcome {
    let request = with_semester(
        ApiRequest::get(endpoints::GROUP_SCHEDULE).query("groupId", group_id),
        semester_id,
    );
    let records: Vec<ScheduleRecord> = ctx.fetch(request).await?;
    Ok(vec![
        ScheduleIntent::SetScheduleGroupId(Some(group_id)).into(),
        ScheduleIntent::SetGroupSchedule(records).into(),
    ])
}

pub(super) async fn get_teacher(
    ctx: &EffectContext,
    teacher_id: EntityId,
    semester_id: Option<EntityId>,
) -> Outcome {
    let request = with_semester(
        ApiRequest::get(endpoints::TEACHER_SCHEDULE).query("teacherId", teacher_id),
        semester_id,
    );
    let records: Vec<ScheduleRecord> = ctx.fetch(request).await?;
    Ok(vec![
        ScheduleIntent::SetScheduleTeacherId(Some(teacher_id)).into(),
        ScheduleIntent::SetTeacherSchedule(records).into(),
    ])
}

pub(super) async fn get_teacher_range(
    ctx: &EffectContext,
    teacher_id: EntityId,
    from: &str,
    to: &str,
) -> Outcome {
    let request = ApiRequest::get(endpoints::TEACHER_RANGE_SCHEDULE)
        .query("from", from)
        .query("to", to)
        .query("teacherId", teacher_id);
    let days: Vec<TeacherRangeDay> = ctx.fetch(request).await?;
    Ok(vec![
        ScheduleIntent::SetTeacherRangeSchedule(days).into(),
        ScheduleIntent::SetScheduleTeacherId(Some(teacher_id)).into(),
    ])
}

pub(super) async fn check_availability(ctx: &EffectContext, item: &ScheduleItem) -> Outcome {
    let semester_id = item
        .semester_id
        .or_else(|| ctx.state().schedule.current_semester.as_ref().and_then(|s| s.id));
    let request = with_semester(
        ApiRequest::get(endpoints::SCHEDULE_AVAILABILITY)
            .query("lessonId", item.lesson_id)
            .query("periodId", item.period_id)
            .query("dayOfWeek", item.day_of_week.as_str())
            .query("evenOdd", item.even_odd.as_str()),
        semester_id,
    );
    let availability: Map<String, Value> = ctx.fetch(request).await?;
    Ok(vec![ScheduleIntent::CheckAvailability(availability).into()])
}

pub(super) async fn add_item(ctx: &EffectContext, item: &ScheduleItem) -> Outcome {
    let saved: ScheduleItem = ctx
        .fetch(ApiRequest::post(endpoints::SCHEDULES).json(item)?)
        .await?;
    Ok(vec![
        ScheduleIntent::AddItem(saved).into(),
        FormIntent::Reset(FormId::Schedule).into(),
        ctx.success(keys::FORM_SCHEDULE_LABEL, keys::CREATED_LABEL),
    ])
}

pub(super) async fn delete_item(ctx: &EffectContext, item_id: EntityId) -> Outcome {
    ctx.call(ApiRequest::delete(endpoints::item(
        endpoints::SCHEDULES,
        item_id,
    )))
    .await?;
    Ok(vec![
        ScheduleIntent::DeleteItem(item_id).into(),
        ctx.success(keys::FORM_SCHEDULE_LABEL, keys::DELETED_LABEL),
    ])
}
