//! Application state tree.
//!
//! Every slice follows the MVI layout in [`mvi`]. [`AppState`] groups the
//! slices and [`reduce`] routes each [`Action`] to the reducer of its slice.

pub mod auth;
pub mod collection;
pub mod forms;
pub mod lessons;
pub mod mvi;
pub mod notification;
pub mod room_types;
pub mod schedule;
pub mod semesters;
pub mod students;

use serde::Serialize;

use crate::effects::Command;

use auth::{AuthIntent, AuthReducer, AuthState};
use forms::{FormIntent, FormsReducer, FormsState};
use lessons::{LessonIntent, LessonsReducer, LessonsState};
use mvi::{Intent, Reducer};
use notification::{NotificationIntent, NotificationReducer, NotificationState};
use room_types::{RoomTypeIntent, RoomTypesReducer, RoomTypesState};
use schedule::{ScheduleIntent, ScheduleReducer, ScheduleState};
use semesters::{SemesterIntent, SemestersReducer, SemestersState};
use students::{StudentIntent, StudentsReducer, StudentsState};

/// Helper macro for reducing one slice in place.
macro_rules! dispatch_mvi {
    ($state:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $state.$field = <$reducer>::reduce(std::mem::take(&mut $state.$field), $intent)
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub schedule: ScheduleState,
    pub semesters: SemestersState,
    pub students: StudentsState,
    pub lessons: LessonsState,
    pub room_types: RoomTypesState,
    pub forms: FormsState,
    pub notification: NotificationState,
    pub auth: AuthState,
}

/// Everything that can be dispatched to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Schedule(ScheduleIntent),
    Semesters(SemesterIntent),
    Students(StudentIntent),
    Lessons(LessonIntent),
    RoomTypes(RoomTypeIntent),
    Forms(FormIntent),
    Notification(NotificationIntent),
    Auth(AuthIntent),
    /// Starts an effect sequence; never reaches a reducer.
    Start(Command),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Schedule(intent) => intent.kind(),
            Action::Semesters(intent) => intent.kind(),
            Action::Students(intent) => intent.kind(),
            Action::Lessons(intent) => intent.kind(),
            Action::RoomTypes(intent) => intent.kind(),
            Action::Forms(intent) => intent.kind(),
            Action::Notification(intent) => intent.kind(),
            Action::Auth(intent) => intent.kind(),
            Action::Start(command) => command.kind().as_str(),
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Action::Start(_))
    }
}

macro_rules! impl_from_intent {
    ($($intent:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$intent> for Action {
                fn from(intent: $intent) -> Self {
                    Action::$variant(intent)
                }
            }
        )*
    };
}

impl_from_intent! {
    ScheduleIntent => Schedule,
    SemesterIntent => Semesters,
    StudentIntent => Students,
    LessonIntent => Lessons,
    RoomTypeIntent => RoomTypes,
    FormIntent => Forms,
    NotificationIntent => Notification,
    AuthIntent => Auth,
    Command => Start,
}

/// Apply one action to the tree.
///
/// `Start` actions are handled by the effect runtime and leave the tree
/// unchanged here.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::Schedule(intent) => dispatch_mvi!(state, schedule, ScheduleReducer, intent),
        Action::Semesters(intent) => dispatch_mvi!(state, semesters, SemestersReducer, intent),
        Action::Students(intent) => dispatch_mvi!(state, students, StudentsReducer, intent),
        Action::Lessons(intent) => dispatch_mvi!(state, lessons, LessonsReducer, intent),
        Action::RoomTypes(intent) => dispatch_mvi!(state, room_types, RoomTypesReducer, intent),
        Action::Forms(intent) => dispatch_mvi!(state, forms, FormsReducer, intent),
        Action::Notification(intent) => {
            dispatch_mvi!(state, notification, NotificationReducer, intent)
        }
        Action::Auth(intent) => dispatch_mvi!(state, auth, AuthReducer, intent),
        Action::Start(_) => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Command;
    use crate::model::ScheduleItem;

    #[test]
    fn start_action_is_identity() {
        let before = AppState::default();
        let after = reduce(before.clone(), Action::Start(Command::GetAllSemesters));
        assert_eq!(after, before);
    }

    #[test]
    fn actions_touch_only_their_slice() {
        let item = ScheduleItem {
            id: Some(1),
            ..ScheduleItem::default()
        };
        let state = reduce(
            AppState::default(),
            ScheduleIntent::AddItem(item).into(),
        );
        assert_eq!(state.schedule.items.len(), 1);
        assert_eq!(state.semesters, SemestersState::default());
        assert_eq!(state.notification, NotificationState::default());
    }

    #[test]
    fn kind_comes_from_intent() {
        let action: Action = NotificationIntent::error("x").into();
        assert_eq!(action.kind(), "SET_OPEN_ERROR_SNACKBAR");
        assert_eq!(
            Action::Start(Command::GetAllSemesters).kind(),
            "GET_ALL_SEMESTERS_START"
        );
    }
}
