//! Students slice.

mod intent;
mod reducer;
mod state;

pub use intent::StudentIntent;
pub use reducer::StudentsReducer;
pub use state::StudentsState;
