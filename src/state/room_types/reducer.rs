use crate::state::collection::{find_by_id, remove_by_id, upsert_by_id};
use crate::state::mvi::Reducer;

use super::intent::RoomTypeIntent;
use super::state::RoomTypesState;

pub struct RoomTypesReducer;

impl Reducer for RoomTypesReducer {
    type State = RoomTypesState;
    type Intent = RoomTypeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RoomTypeIntent::SetAll(types) => state.room_types = types,
            RoomTypeIntent::Added(room_type) => state.room_types.push(room_type),
            RoomTypeIntent::Updated(room_type) => {
                upsert_by_id(&mut state.room_types, room_type);
                state.one_type = None;
            }
            RoomTypeIntent::Deleted(id) => {
                remove_by_id(&mut state.room_types, id);
                if state.one_type.as_ref().and_then(|t| t.id) == Some(id) {
                    state.one_type = None;
                }
            }
            RoomTypeIntent::SelectOne(id) => {
                state.one_type = id.and_then(|id| find_by_id(&state.room_types, id).cloned());
            }
        }
        state
    }
}
