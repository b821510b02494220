//! Room types slice.

mod intent;
mod reducer;
mod state;

pub use intent::RoomTypeIntent;
pub use reducer::RoomTypesReducer;
pub use state::RoomTypesState;
