use crate::state::mvi::Intent;

use super::state::NotificationKind;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationIntent {
    Open {
        message: String,
        kind: NotificationKind,
    },
    Close,
}

impl NotificationIntent {
    pub fn success(message: impl Into<String>) -> Self {
        NotificationIntent::Open {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        NotificationIntent::Open {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

impl Intent for NotificationIntent {
    fn kind(&self) -> &'static str {
        match self {
            NotificationIntent::Open {
                kind: NotificationKind::Success,
                ..
            } => "SET_OPEN_SUCCESS_SNACKBAR",
            NotificationIntent::Open {
                kind: NotificationKind::Error,
                ..
            } => "SET_OPEN_ERROR_SNACKBAR",
            NotificationIntent::Close => "SET_CLOSE_SNACKBAR",
        }
    }
}
