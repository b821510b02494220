//! Lessons slice.

mod intent;
mod reducer;
mod state;

pub use intent::LessonIntent;
pub use reducer::LessonsReducer;
pub use state::LessonsState;
