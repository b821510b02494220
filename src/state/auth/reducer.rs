use crate::state::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::LoggedOut => {
                state.logged_out = true;
                state.error = None;
            }
            AuthIntent::Error(message) => state.error = Some(message),
            AuthIntent::Activated(message) => {
                state.activation_message = Some(message);
                state.error = None;
            }
        }
        state
    }
}
