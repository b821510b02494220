use crate::state::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthIntent {
    LoggedOut,
    Error(String),
    /// Account activation succeeded with the given message.
    Activated(String),
}

impl Intent for AuthIntent {
    fn kind(&self) -> &'static str {
        match self {
            AuthIntent::LoggedOut => "AUTH_USER_LOGOUT",
            AuthIntent::Error(_) => "AUTH_USER_ERROR",
            AuthIntent::Activated(_) => "ACTIVATE_USER_SUCCESS",
        }
    }
}
