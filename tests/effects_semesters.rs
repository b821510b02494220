//! Semester sequences against a scripted gateway.

mod common;

use serde_json::json;

use common::{semester, store_with, structured, MockGateway};
use schedule_client::actions;
use schedule_client::model::{CopyRange, GroupRef};
use schedule_client::state::forms::FormId;
use schedule_client::state::notification::NotificationKind;
use schedule_client::state::schedule::ScheduleType;
use schedule_client::state::semesters::SemestersState;
use schedule_client::{AppState, GatewayError, Method};

const FALLBACK: &str = "Something went wrong. Please try again later";

fn with_semesters(semesters: Vec<schedule_client::model::Semester>) -> AppState {
    AppState {
        semesters: SemestersState {
            semesters,
            ..SemestersState::default()
        },
        ..AppState::default()
    }
}

#[tokio::test]
async fn deleting_active_semester_makes_no_call() {
    let gateway = MockGateway::new();
    let store = store_with(
        gateway.clone(),
        with_semesters(vec![semester(1, "Autumn", true), semester(2, "Spring", false)]),
    );

    store
        .dispatch(actions::semesters::delete_semester_start(1))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert!(gateway.calls().is_empty());
    assert_eq!(state.notification.kind, NotificationKind::Error);
    assert_eq!(state.notification.message, "The active semester cannot be deleted");
    assert_eq!(state.semesters.semesters.len(), 2);
}

#[tokio::test]
async fn deleting_unknown_semester_reports_fallback() {
    let gateway = MockGateway::new();
    let store = store_with(gateway.clone(), with_semesters(vec![semester(2, "Spring", false)]));

    store
        .dispatch(actions::semesters::delete_semester_start(42))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert!(gateway.calls().is_empty());
    assert!(state.notification.is_error());
    assert_eq!(state.notification.message, FALLBACK);
}

#[tokio::test]
async fn deleting_inactive_semester_removes_it() {
    let gateway = MockGateway::new();
    gateway.respond(Method::Delete, "semesters/2", json!(null));
    let store = store_with(
        gateway.clone(),
        with_semesters(vec![semester(1, "Autumn", true), semester(2, "Spring", false)]),
    );

    store
        .dispatch(actions::semesters::delete_semester_start(2))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(gateway.call_targets(), vec!["DELETE semesters/2"]);
    let ids: Vec<_> = state.semesters.semesters.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![Some(1)]);
    assert_eq!(state.notification.kind, NotificationKind::Success);
    assert_eq!(state.notification.message, "Semester has been deleted");
}

#[tokio::test]
async fn structured_failure_is_surfaced_verbatim() {
    let gateway = MockGateway::new();
    gateway.fail(
        Method::Post,
        "semesters",
        structured(409, "Semester with this description already exists"),
    );
    let store = store_with(gateway.clone(), AppState::default());

    let mut draft = semester(0, "Autumn", false);
    draft.id = None;
    store
        .dispatch(actions::semesters::add_semester_start(draft))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert!(state.notification.is_error());
    assert_eq!(
        state.notification.message,
        "Semester with this description already exists"
    );
    assert!(state.semesters.semesters.is_empty());
}

#[tokio::test]
async fn unstructured_failure_uses_fallback() {
    let gateway = MockGateway::new();
    gateway.fail(
        Method::Get,
        "semesters",
        GatewayError::Transport("connection refused".into()),
    );
    let store = store_with(gateway.clone(), AppState::default());

    store
        .dispatch(actions::semesters::get_all_semesters_start())
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert!(state.notification.is_error());
    assert_eq!(state.notification.message, FALLBACK);
}

#[tokio::test]
async fn status_without_message_uses_fallback() {
    let gateway = MockGateway::new();
    gateway.fail(
        Method::Get,
        "semesters/archived",
        GatewayError::Status {
            status: 500,
            message: None,
        },
    );
    let store = store_with(gateway.clone(), AppState::default());

    store
        .dispatch(actions::semesters::get_archived_semesters_start())
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.notification.message, FALLBACK);
}

#[tokio::test]
async fn update_resets_form_and_selection() {
    let gateway = MockGateway::new();
    let mut renamed = semester(2, "Spring (renamed)", false);
    renamed.year = 2025;
    gateway.respond(Method::Put, "semesters", serde_json::to_value(&renamed).unwrap());

    let mut initial = with_semesters(vec![semester(1, "Autumn", true), semester(2, "Spring", false)]);
    initial.semesters.selected = Some(semester(2, "Spring", false));
    let store = store_with(gateway.clone(), initial);
    store
        .dispatch(actions::forms::change(FormId::Semester, "year", json!(2025)))
        .await
        .unwrap();

    store
        .dispatch(actions::semesters::update_semester_start(renamed.clone()))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.semesters.semesters[1], renamed);
    assert!(state.semesters.selected.is_none());
    assert!(state.forms.is_pristine(FormId::Semester));
    assert_eq!(state.notification.message, "Semester has been updated");
}

#[tokio::test]
async fn saving_new_current_semester_demotes_previous() {
    let gateway = MockGateway::new();
    let demoted = semester(1, "Autumn", false);
    let created = semester(3, "Winter", true);
    gateway.respond(Method::Put, "semesters", serde_json::to_value(&demoted).unwrap());
    gateway.respond(Method::Post, "semesters", serde_json::to_value(&created).unwrap());
    let store = store_with(gateway.clone(), with_semesters(vec![semester(1, "Autumn", true)]));

    let mut values = semester(0, "Winter", true);
    values.id = None;
    store
        .dispatch(actions::semesters::handle_semester_start(values))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(gateway.call_targets(), vec!["PUT semesters", "POST semesters"]);
    let demoted_body = gateway.calls()[0].body.clone().unwrap();
    assert_eq!(demoted_body["currentSemester"], json!(false));
    assert_eq!(demoted_body["id"], json!(1));

    let current: Vec<_> = state
        .semesters
        .semesters
        .iter()
        .filter(|s| s.current_semester)
        .map(|s| s.id)
        .collect();
    assert_eq!(current, vec![Some(3)]);
    assert_eq!(state.notification.message, "Semester has been created");
}

#[tokio::test]
async fn saving_without_current_flag_skips_demotion() {
    let gateway = MockGateway::new();
    let updated = semester(2, "Spring", false);
    gateway.respond(Method::Put, "semesters", serde_json::to_value(&updated).unwrap());
    let store = store_with(
        gateway.clone(),
        with_semesters(vec![semester(1, "Autumn", true), semester(2, "Spring", false)]),
    );

    store
        .dispatch(actions::semesters::handle_semester_start(updated))
        .await
        .unwrap();
    store.until_idle().await.unwrap();

    assert_eq!(gateway.call_targets(), vec!["PUT semesters"]);
}

#[tokio::test]
async fn set_default_completes_even_when_reload_fails() {
    let gateway = MockGateway::new();
    let mut promoted = semester(2, "Spring", false);
    promoted.default_semester = true;
    gateway.respond(
        Method::Put,
        "semesters/default?semesterId=2",
        serde_json::to_value(&promoted).unwrap(),
    );
    gateway.fail(Method::Get, "semesters", structured(503, "Maintenance"));
    let store = store_with(gateway.clone(), with_semesters(vec![semester(2, "Spring", false)]));

    store
        .dispatch(actions::semesters::set_default_semester_start(2, false))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(
        gateway.call_targets(),
        vec!["PUT semesters/default?semesterId=2", "GET semesters"]
    );
    // The reload error was shown, then replaced by the success message.
    assert_eq!(state.notification.seq, 2);
    assert_eq!(state.notification.kind, NotificationKind::Success);
    assert_eq!(state.notification.message, "Semester has been updated");
    assert!(state.semesters.semesters[0].default_semester);
}

#[tokio::test]
async fn set_default_reloads_disabled_list() {
    let gateway = MockGateway::new();
    gateway.respond(
        Method::Put,
        "semesters/default?semesterId=5",
        serde_json::to_value(semester(5, "Old", false)).unwrap(),
    );
    gateway.respond(
        Method::Get,
        "semesters/disabled",
        json!([serde_json::to_value(semester(5, "Old", false)).unwrap()]),
    );
    let store = store_with(gateway.clone(), AppState::default());

    store
        .dispatch(actions::semesters::set_default_semester_start(5, true))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(
        gateway.call_targets(),
        vec!["PUT semesters/default?semesterId=5", "GET semesters/disabled"]
    );
    assert_eq!(state.semesters.semesters.len(), 1);
    assert_eq!(state.notification.kind, NotificationKind::Success);
}

#[tokio::test]
async fn set_groups_sends_repeated_query() {
    let gateway = MockGateway::new();
    gateway.respond(
        Method::Put,
        "semesters/4/groups?groupId=1&groupId=2",
        serde_json::to_value(semester(4, "Autumn", false)).unwrap(),
    );
    let store = store_with(gateway.clone(), with_semesters(vec![semester(4, "Autumn", false)]));

    let groups = vec![
        GroupRef {
            id: 1,
            title: "KN-21".into(),
        },
        GroupRef {
            id: 2,
            title: "KN-22".into(),
        },
    ];
    store
        .dispatch(actions::semesters::set_groups_to_semester_start(4, groups))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.notification.message, "Semester has been updated");
}

#[tokio::test]
async fn archiving_moves_semester() {
    let gateway = MockGateway::new();
    gateway.respond(Method::Post, "archive/2", json!(null));
    let store = store_with(
        gateway.clone(),
        with_semesters(vec![semester(1, "Autumn", true), semester(2, "Spring", false)]),
    );

    store
        .dispatch(actions::semesters::create_archive_semester_start(2))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.semesters.semesters.len(), 1);
    assert_eq!(state.semesters.archived[0].id, Some(2));
    assert_eq!(state.notification.message, "Semester has been archived");
}

#[tokio::test]
async fn archived_schedule_switches_mode_first() {
    let gateway = MockGateway::new();
    gateway.fail(Method::Get, "archive/9", structured(404, "Archive not found"));
    let store = store_with(gateway.clone(), AppState::default());

    store
        .dispatch(actions::semesters::get_archived_semester_by_id_start(9))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.schedule.schedule_type, ScheduleType::Archived);
    assert!(state.schedule.view.is_empty());
    assert_eq!(state.notification.message, "Archive not found");
}

#[tokio::test]
async fn copying_lessons_reports_lesson_label() {
    let gateway = MockGateway::new();
    gateway.respond(
        Method::Post,
        "lessons/copy-lessons?fromSemesterId=1&toSemesterId=2",
        json!(null),
    );
    let store = store_with(gateway.clone(), AppState::default());

    store
        .dispatch(actions::semesters::copy_lessons_from_semester_start(CopyRange {
            from_semester_id: 1,
            to_semester_id: 2,
        }))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.notification.message, "Lesson has been copied");
}

#[tokio::test]
async fn toggling_visibility_drops_semester_from_list() {
    let gateway = MockGateway::new();
    gateway.respond(Method::Put, "semesters", json!(null));
    let store = store_with(
        gateway.clone(),
        with_semesters(vec![semester(1, "Autumn", true), semester(2, "Spring", false)]),
    );

    let mut hidden = semester(2, "Spring", false);
    hidden.disable = true;
    store
        .dispatch(actions::semesters::toggle_semester_visibility_start(hidden))
        .await
        .unwrap();
    let state = store.until_idle().await.unwrap();

    assert_eq!(state.semesters.semesters.len(), 1);
    assert_eq!(state.notification.kind, NotificationKind::Success);
}
