use serde::Serialize;

use crate::state::mvi::SliceState;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub logged_out: bool,
    pub error: Option<String>,
    pub activation_message: Option<String>,
}

impl SliceState for AuthState {}
