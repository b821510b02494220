//! Student sequences.

use crate::gateway::{endpoints, ApiRequest};
use crate::i18n::keys;
use crate::model::{EntityId, GroupRef, Student};
use crate::state::forms::{FormId, FormIntent};
use crate::state::students::StudentIntent;
use crate::state::Action;

use super::context::EffectContext;
use super::Outcome;

pub(super) async fn fetch_all(ctx: &EffectContext, group_id: EntityId) -> Outcome {
    let path = format!("{}/students", endpoints::item(endpoints::GROUPS, group_id));
    let students: Vec<Student> = ctx.fetch(ApiRequest::get(path)).await?;
    Ok(vec![StudentIntent::ShowAll(students).into()])
}

/// Update when the record has an id, otherwise create.
pub(super) async fn submit(ctx: &EffectContext, student: &Student) -> Outcome {
    let (request, action_label) = match student.id {
        Some(_) => (ApiRequest::put(endpoints::STUDENTS), keys::UPDATED_LABEL),
        None => (ApiRequest::post(endpoints::STUDENTS), keys::CREATED_LABEL),
    };
    let saved: Student = ctx.fetch(request.json(student)?).await?;
    let stored = if student.id.is_some() {
        StudentIntent::Updated(saved)
    } else {
        StudentIntent::Created(saved)
    };
    Ok(vec![
        stored.into(),
        StudentIntent::Selected(None).into(),
        FormIntent::Reset(FormId::Student).into(),
        ctx.success(keys::FORM_STUDENT_LABEL, action_label),
    ])
}

pub(super) async fn delete(ctx: &EffectContext, student_id: EntityId) -> Outcome {
    ctx.call(ApiRequest::delete(endpoints::item(
        endpoints::STUDENTS,
        student_id,
    )))
    .await?;
    Ok(vec![
        StudentIntent::Deleted(student_id).into(),
        ctx.success(keys::FORM_STUDENT_LABEL, keys::DELETED_LABEL),
    ])
}

/// One update per student. The moved students leave the listed group.
///
/// Stops at the first failure; students already moved stay moved and are
/// removed from the list before the error is reported.
pub(super) async fn move_to_group(
    ctx: &EffectContext,
    students: &[Student],
    group: &GroupRef,
) -> Outcome {
    let mut moved: Vec<Action> = Vec::with_capacity(students.len() + 1);
    for student in students {
        let Some(id) = student.id else {
            continue;
        };
        let relocated = Student {
            group: Some(group.clone()),
            ..student.clone()
        };
        let request = ApiRequest::put(endpoints::STUDENTS).json(&relocated)?;
        if let Err(err) = ctx.call(request).await {
            ctx.emit(moved).await;
            return Err(err);
        }
        moved.push(StudentIntent::Deleted(id).into());
    }
    moved.push(ctx.success(keys::FORM_STUDENT_LABEL, keys::UPDATED_LABEL));
    Ok(moved)
}
