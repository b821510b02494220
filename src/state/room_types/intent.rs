use crate::model::{EntityId, RoomType};
use crate::state::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RoomTypeIntent {
    SetAll(Vec<RoomType>),
    Added(RoomType),
    Updated(RoomType),
    Deleted(EntityId),
    SelectOne(Option<EntityId>),
}

impl Intent for RoomTypeIntent {
    fn kind(&self) -> &'static str {
        match self {
            RoomTypeIntent::SetAll(_) => "GET_LIST_OF_ROOM_TYPES",
            RoomTypeIntent::Added(_) => "POST_NEW_ROOM_TYPE",
            RoomTypeIntent::Updated(_) => "UPDATE_ROOM_TYPE",
            RoomTypeIntent::Deleted(_) => "DELETE_ROOM_TYPE",
            RoomTypeIntent::SelectOne(_) => "GET_ONE_NEW_TYPE",
        }
    }
}
