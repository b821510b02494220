//! Room type sequences.

use crate::gateway::{endpoints, ApiRequest};
use crate::i18n::keys;
use crate::model::{EntityId, RoomType};
use crate::state::forms::{FormId, FormIntent};
use crate::state::room_types::RoomTypeIntent;

use super::context::EffectContext;
use super::Outcome;

pub(super) async fn get_all(ctx: &EffectContext) -> Outcome {
    let types: Vec<RoomType> = ctx.fetch(ApiRequest::get(endpoints::ROOM_TYPES)).await?;
    Ok(vec![RoomTypeIntent::SetAll(types).into()])
}

pub(super) async fn submit(ctx: &EffectContext, room_type: &RoomType) -> Outcome {
    let (request, action_label) = match room_type.id {
        Some(_) => (ApiRequest::put(endpoints::ROOM_TYPES), keys::UPDATED_LABEL),
        None => (ApiRequest::post(endpoints::ROOM_TYPES), keys::CREATED_LABEL),
    };
    let saved: RoomType = ctx.fetch(request.json(room_type)?).await?;
    let stored = if room_type.id.is_some() {
        RoomTypeIntent::Updated(saved)
    } else {
        RoomTypeIntent::Added(saved)
    };
    Ok(vec![
        stored.into(),
        FormIntent::Reset(FormId::RoomType).into(),
        ctx.success(keys::FORM_ROOM_TYPE_LABEL, action_label),
    ])
}

pub(super) async fn delete(ctx: &EffectContext, type_id: EntityId) -> Outcome {
    ctx.call(ApiRequest::delete(endpoints::item(
        endpoints::ROOM_TYPES,
        type_id,
    )))
    .await?;
    Ok(vec![
        RoomTypeIntent::Deleted(type_id).into(),
        ctx.success(keys::FORM_ROOM_TYPE_LABEL, keys::DELETED_LABEL),
    ])
}
