use crate::state::mvi::Reducer;

use super::intent::NotificationIntent;
use super::state::NotificationState;

pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Open { message, kind } => {
                state.open = true;
                state.message = message;
                state.kind = kind;
                state.seq += 1;
            }
            // Message and kind stay so a closing snackbar keeps its text.
            NotificationIntent::Close => state.open = false,
        }
        state
    }
}
