//! Semesters slice.

mod intent;
mod reducer;
mod state;

pub use intent::SemesterIntent;
pub use reducer::SemestersReducer;
pub use state::SemestersState;
