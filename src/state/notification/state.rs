use serde::Serialize;

use crate::state::mvi::SliceState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

/// Transient snackbar shown after a sequence finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationState {
    pub open: bool,
    pub message: String,
    pub kind: NotificationKind,
    /// Bumped on every open, so two identical messages are distinguishable.
    pub seq: u64,
}

impl SliceState for NotificationState {}

impl NotificationState {
    pub fn is_error(&self) -> bool {
        self.open && self.kind == NotificationKind::Error
    }
}
