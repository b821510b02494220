use serde::Serialize;

use crate::model::RoomType;
use crate::state::mvi::SliceState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoomTypesState {
    pub room_types: Vec<RoomType>,
    /// Type loaded into the edit form.
    pub one_type: Option<RoomType>,
}

impl SliceState for RoomTypesState {}
