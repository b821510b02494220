//! Store queue ordering, barriers and subscriptions.

mod common;

use std::time::Duration;

use serde_json::json;

use common::{semester, store_with, MockGateway};
use schedule_client::actions;
use schedule_client::state::forms::FormId;
use schedule_client::{AppState, Method};

#[tokio::test]
async fn plain_actions_apply_in_dispatch_order() {
    let store = store_with(MockGateway::new(), AppState::default());

    store.dispatch(actions::notification::open_success("first")).await.unwrap();
    store.dispatch(actions::notification::open_error("second")).await.unwrap();
    store.dispatch(actions::notification::close()).await.unwrap();
    store.flush().await.unwrap();

    let state = store.snapshot();
    assert!(!state.notification.open);
    assert_eq!(state.notification.message, "second");
    assert_eq!(state.notification.seq, 2);
}

#[tokio::test]
async fn form_edits_track_dirtiness() {
    let store = store_with(MockGateway::new(), AppState::default());

    let mut values = serde_json::Map::new();
    values.insert("description".into(), json!("Fall"));
    store.dispatch(actions::forms::initialize(FormId::Semester, values)).await.unwrap();
    store.flush().await.unwrap();
    assert!(store.snapshot().forms.is_pristine(FormId::Semester));

    store
        .dispatch(actions::forms::change(FormId::Semester, "year", json!(2025)))
        .await
        .unwrap();
    store.flush().await.unwrap();
    let state = store.snapshot();
    let form = state.forms.get(FormId::Semester).unwrap();
    assert!(form.dirty);
    assert_eq!(form.values["year"], json!(2025));
    assert_eq!(form.values["description"], json!("Fall"));

    store.dispatch(actions::forms::reset(FormId::Semester)).await.unwrap();
    store.flush().await.unwrap();
    assert!(store.snapshot().forms.get(FormId::Semester).is_none());
}

#[tokio::test]
async fn start_actions_leave_state_untouched_until_results_arrive() {
    let gateway = MockGateway::new();
    gateway.respond_after(
        Method::Get,
        "semesters",
        Duration::from_millis(50),
        json!([semester(1, "Fall", true)]),
    );
    let store = store_with(gateway.clone(), AppState::default());
    let before = store.snapshot();

    store.dispatch(actions::semesters::get_all_semesters_start()).await.unwrap();
    store.flush().await.unwrap();
    assert_eq!(*store.snapshot(), *before);
    assert_eq!(store.in_flight(), 1);

    let state = store.until_idle().await.unwrap();
    assert_eq!(state.semesters.semesters.len(), 1);
    assert_eq!(store.in_flight(), 0);
}

#[tokio::test]
async fn wait_for_resolves_on_matching_snapshot() {
    let gateway = MockGateway::new();
    gateway.respond(Method::Get, "semesters", json!([semester(4, "Spring", false)]));
    let store = store_with(gateway, AppState::default());

    store.dispatch(actions::semesters::get_all_semesters_start()).await.unwrap();
    let state = store
        .wait_for(|state| !state.semesters.semesters.is_empty())
        .await
        .unwrap();

    assert_eq!(state.semesters.semesters[0].id, Some(4));
}

#[tokio::test]
async fn subscribers_see_new_snapshots() {
    let mut initial = AppState::default();
    initial.semesters.semesters = vec![semester(3, "Fall", false)];
    let store = store_with(MockGateway::new(), initial);
    let mut updates = store.subscribe();
    updates.borrow_and_update();

    store.dispatch(actions::semesters::select_semester(Some(3))).await.unwrap();
    updates.changed().await.unwrap();

    let selected = updates.borrow().semesters.selected.clone();
    assert_eq!(selected.and_then(|s| s.id), Some(3));
}

#[tokio::test]
async fn cloned_handles_share_one_store() {
    let store = store_with(MockGateway::new(), AppState::default());
    let other = store.clone();

    other.dispatch(actions::notification::open_success("hello")).await.unwrap();
    other.flush().await.unwrap();

    assert_eq!(store.snapshot().notification.message, "hello");
}

#[tokio::test]
async fn dropping_last_handle_stops_loop_and_running_sequences() {
    let gateway = MockGateway::new();
    gateway.respond_after(
        Method::Get,
        "semesters",
        Duration::from_secs(3600),
        json!([]),
    );
    let store = store_with(gateway.clone(), AppState::default());
    let mut updates = store.subscribe();
    updates.borrow_and_update();

    store.dispatch(actions::semesters::get_all_semesters_start()).await.unwrap();
    store.flush().await.unwrap();
    assert_eq!(store.in_flight(), 1);

    drop(store);

    assert!(updates.changed().await.is_err());
    tokio::time::timeout(Duration::from_secs(5), async {
        while std::sync::Arc::strong_count(&gateway) > 1 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("aborted sequence should release the gateway");
}
