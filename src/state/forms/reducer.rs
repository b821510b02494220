use crate::state::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormValues, FormsState};

pub struct FormsReducer;

impl Reducer for FormsReducer {
    type State = FormsState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Initialize(form, values) => {
                state.forms.insert(
                    form,
                    FormValues {
                        values,
                        dirty: false,
                    },
                );
            }
            FormIntent::Change { form, field, value } => {
                let entry = state.forms.entry(form).or_default();
                entry.values.insert(field, value);
                entry.dirty = true;
            }
            FormIntent::Reset(form) => {
                state.forms.remove(&form);
            }
        }
        state
    }
}
