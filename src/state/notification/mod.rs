//! Notification surface.

mod intent;
mod reducer;
mod state;

pub use intent::NotificationIntent;
pub use reducer::NotificationReducer;
pub use state::{NotificationKind, NotificationState};
