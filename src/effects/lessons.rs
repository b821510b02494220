//! Lesson sequences.

use crate::gateway::{endpoints, ApiRequest};
use crate::i18n::keys;
use crate::model::{EntityId, Lesson};
use crate::state::forms::{FormId, FormIntent};
use crate::state::lessons::LessonIntent;

use super::context::EffectContext;
use super::Outcome;

pub(super) async fn get_by_group(ctx: &EffectContext, group_id: EntityId) -> Outcome {
    let lessons: Vec<Lesson> = ctx
        .fetch(ApiRequest::get(endpoints::LESSONS).query("groupId", group_id))
        .await?;
    Ok(vec![
        LessonIntent::SetGroupId(Some(group_id)).into(),
        LessonIntent::SetLessons(lessons).into(),
    ])
}

pub(super) async fn get_types(ctx: &EffectContext) -> Outcome {
    let types: Vec<String> = ctx.fetch(ApiRequest::get(endpoints::LESSON_TYPES)).await?;
    Ok(vec![LessonIntent::SetLessonTypes(types).into()])
}

pub(super) async fn submit(ctx: &EffectContext, lesson: &Lesson) -> Outcome {
    let (request, action_label) = match lesson.id {
        Some(_) => (ApiRequest::put(endpoints::LESSONS), keys::UPDATED_LABEL),
        None => (ApiRequest::post(endpoints::LESSONS), keys::CREATED_LABEL),
    };
    let saved: Lesson = ctx.fetch(request.json(lesson)?).await?;
    let stored = if lesson.id.is_some() {
        LessonIntent::Updated(saved)
    } else {
        LessonIntent::Added(saved)
    };
    Ok(vec![
        stored.into(),
        LessonIntent::Selected(None).into(),
        FormIntent::Reset(FormId::Lesson).into(),
        ctx.success(keys::FORM_LESSON_LABEL, action_label),
    ])
}

pub(super) async fn delete(ctx: &EffectContext, lesson_id: EntityId) -> Outcome {
    ctx.call(ApiRequest::delete(endpoints::item(
        endpoints::LESSONS,
        lesson_id,
    )))
    .await?;
    Ok(vec![
        LessonIntent::Deleted(lesson_id).into(),
        ctx.success(keys::FORM_LESSON_LABEL, keys::DELETED_LABEL),
    ])
}

/// Copies go to other groups, so the listed lessons do not change.
pub(super) async fn copy(ctx: &EffectContext, lesson: &Lesson, group_ids: &[EntityId]) -> Outcome {
    let request = group_ids
        .iter()
        .fold(ApiRequest::post(endpoints::LESSON_COPY), |request, id| {
            request.query("groupId", id)
        })
        .json(lesson)?;
    ctx.call(request).await?;
    Ok(vec![ctx.success(keys::FORM_LESSON_LABEL, keys::COPIED_LABEL)])
}
