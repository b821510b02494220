//! Schedule slice: the editing grid, the loaded view and the selection
//! of semester, group and teacher it is scoped to.

mod intent;
mod mapper;
mod reducer;
mod state;

pub use intent::ScheduleIntent;
pub use mapper::{FullSchedule, ParityDay, WeekSchedule};
pub use reducer::ScheduleReducer;
pub use state::{ScheduleState, ScheduleType, ScheduleView, TeacherViewType};
