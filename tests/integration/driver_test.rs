//! End-to-end controller tests
//!
//! The controller is driven by a real [`Driver`] against a mock backend, with
//! no window involved.

use std::time::Duration;

use pretty_assertions::assert_eq;
use shopagent::egui_app::render::{Panel, ProfilePlan, ViewBody, LOAD_FAILED};
use shopagent::egui_app::state::{SlotStatus, REGISTERED_NOTICE};
use shopagent::egui_app::storage::{KeyValueStore, MemoryStore, TOKEN_KEY};
use shopagent::egui_app::{Action, ApiClient, AppState, AppView, AuthTab, Config, Driver};
use shopagent::shared::{AppConfig, Credentials, NewUser};

use crate::common::{self, MockBackend};

const SLOW: Duration = Duration::from_millis(500);

/// Pump results until `done` holds, failing after a few seconds
async fn pump_until<F>(driver: &mut Driver, state: &mut AppState, done: F)
where
    F: Fn(&AppState) -> bool,
{
    let wait = async {
        while !done(state) {
            tokio::time::sleep(Duration::from_millis(10)).await;
            driver.pump(state);
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("condition not reached in time");
}

#[tokio::test]
async fn test_startup_with_restored_token() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    backend.mount_me("tok").await;
    backend
        .mount_json("GET", "/api/me/recommendations", 200, &common::recommendations(&[4, 5]))
        .await;

    let memory = MemoryStore::with_entries([(TOKEN_KEY, "tok")]);
    let mut state = AppState::new(memory.shared());
    let mut driver = Driver::on_current(backend.api());
    driver.settle(&mut state, Action::Start).await;

    assert!(state.is_authenticated());
    assert_eq!(state.catalog.len(), 6);
    assert_eq!(state.demo_users, common::demo_users());

    let plan = state.render_plan();
    assert_eq!(plan.header.auth_button, "Logout");
    assert_eq!(plan.header.welcome_title, "Welcome, Grace Hopper!");
    assert!(plan.header.demo_selector.is_none());
    crate::assert_cards!(plan.body, [4, 5]);
    assert_eq!(driver.pending(), 0);
}

#[tokio::test]
async fn test_startup_with_rejected_token() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    backend
        .mount_detail("GET", "/api/me", 401, "Could not validate credentials")
        .await;
    let personal = backend.never("GET", "/api/me/recommendations").await;

    let memory = MemoryStore::with_entries([(TOKEN_KEY, "expired")]);
    let mut state = AppState::new(memory.shared());
    let mut driver = Driver::on_current(backend.api());
    driver.settle(&mut state, Action::Start).await;

    assert!(!state.is_authenticated());
    assert!(memory.get(TOKEN_KEY).is_none());
    let plan = state.render_plan();
    assert_eq!(plan.header.auth_button, "Login");
    assert_eq!(plan.body, ViewBody::Recommendations(Panel::Blank));
    personal.assert_async().await;
}

#[tokio::test]
async fn test_navigation_discards_in_flight_recommendations() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    backend.mount_me("tok").await;
    backend
        .mount_json("GET", "/api/me/recommendations", 200, &common::recommendations(&[2]))
        .await;

    let memory = MemoryStore::with_entries([(TOKEN_KEY, "tok")]);
    let mut state = AppState::new(memory.shared());
    let mut driver = Driver::on_current(backend.api());
    let commands = state.dispatch(Action::Start);
    driver.execute(commands);

    pump_until(&mut driver, &mut state, |s| {
        matches!(
            &s.recommendations,
            Some(slot) if matches!(slot.status, SlotStatus::Loading { .. })
        )
    })
    .await;

    let commands = state.dispatch(Action::Navigate(AppView::UserDetails));
    assert!(commands.is_empty());
    driver.run_until_idle(&mut state).await;

    assert_eq!(state.view(), AppView::UserDetails);
    assert!(state.recommendations.is_none());
    match state.render_plan().body {
        ViewBody::UserDetails(ProfilePlan::Profile { initials, name, email }) => {
            assert_eq!(initials, "GH");
            assert_eq!(name, "Grace Hopper");
            assert_eq!(email, "grace@example.com");
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[tokio::test]
async fn test_latest_demo_selection_wins() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    backend
        .mount_slow("/api/recommendations/1", &common::recommendations(&[1]), SLOW)
        .await;
    backend
        .mount_json("GET", "/api/recommendations/2", 200, &common::recommendations(&[6]))
        .await;

    let mut state = AppState::new(MemoryStore::new().shared());
    let mut driver = Driver::on_current(backend.api());
    driver.settle(&mut state, Action::Start).await;

    let commands = state.dispatch(Action::SelectDemoUser(Some(1)));
    driver.execute(commands);
    // the first request is in flight when the selection changes
    tokio::time::sleep(Duration::from_millis(100)).await;
    let commands = state.dispatch(Action::SelectDemoUser(Some(2)));
    driver.execute(commands);
    assert_eq!(driver.pending(), 1);

    let started = std::time::Instant::now();
    driver.run_until_idle(&mut state).await;
    assert!(started.elapsed() < SLOW, "waited for the superseded request");

    assert_eq!(state.selected_demo, Some(2));
    crate::assert_cards!(state.render_plan().body, [6]);

    // a late answer for the superseded selection must not repaint
    tokio::time::sleep(SLOW).await;
    assert_eq!(driver.pump(&mut state), 0);
    crate::assert_cards!(state.render_plan().body, [6]);
}

#[tokio::test]
async fn test_unknown_demo_user_shows_backend_error() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    backend
        .mount_json(
            "GET",
            "/api/recommendations/99",
            200,
            &serde_json::json!({ "error": "User not found" }),
        )
        .await;

    let mut state = AppState::new(MemoryStore::new().shared());
    let mut driver = Driver::on_current(backend.api());
    driver.settle(&mut state, Action::Start).await;
    driver.settle(&mut state, Action::SelectDemoUser(Some(99))).await;

    assert_eq!(
        state.render_plan().body,
        ViewBody::Recommendations(Panel::Notice("User not found".to_string()))
    );
}

#[tokio::test]
async fn test_backend_down_degrades_gracefully() {
    let builder = AppConfig::builder()
        .server_url("http://127.0.0.1:9")
        .request_timeout_secs(2);
    let api = ApiClient::new(Config::with_builder(builder).unwrap()).unwrap();

    let mut state = AppState::new(MemoryStore::new().shared());
    let mut driver = Driver::on_current(api);
    driver.settle(&mut state, Action::Start).await;

    assert!(state.catalog.is_empty());
    assert!(state.demo_users.is_empty());

    driver.settle(&mut state, Action::SelectDemoUser(Some(1))).await;
    assert_eq!(
        state.render_plan().body,
        ViewBody::Recommendations(Panel::Notice(LOAD_FAILED.to_string()))
    );
}

#[tokio::test]
async fn test_login_then_logout() {
    let mut backend = MockBackend::start().await;
    backend.mount_static_data().await;
    backend
        .mount_json(
            "POST",
            "/api/auth/login",
            200,
            &serde_json::json!({ "access_token": "fresh", "token_type": "bearer" }),
        )
        .await;
    backend.mount_me("fresh").await;
    backend
        .mount_json("GET", "/api/me/recommendations", 200, &common::recommendations(&[3]))
        .await;

    let memory = MemoryStore::new();
    let mut state = AppState::new(memory.shared());
    let mut driver = Driver::on_current(backend.api());
    driver.settle(&mut state, Action::Start).await;

    state.dispatch(Action::OpenAuth);
    driver
        .settle(
            &mut state,
            Action::SubmitLogin(Credentials::new("grace@example.com", "hunter2")),
        )
        .await;

    assert!(state.is_authenticated());
    assert!(!state.auth_modal.open);
    assert_eq!(memory.get(TOKEN_KEY).as_deref(), Some("fresh"));
    crate::assert_cards!(state.render_plan().body, [3]);

    driver.settle(&mut state, Action::Navigate(AppView::PurchaseHistory)).await;
    match state.render_plan().body {
        ViewBody::PurchaseHistory { title, panel: Panel::Cards(cards) } => {
            assert_eq!(title, "Grace Hopper's Purchase History");
            let ids: Vec<u64> = cards.iter().map(|c| c.product_id).collect();
            assert_eq!(ids, vec![3, 1]);
            assert_eq!(cards[0].purchased_on.as_deref(), Some("Purchased on: 2024-04-15"));
        }
        other => panic!("unexpected body {:?}", other),
    }

    driver.settle(&mut state, Action::AuthButton).await;
    assert!(!state.is_authenticated());
    assert_eq!(state.view(), AppView::Recommendations);
    assert!(memory.get(TOKEN_KEY).is_none());
    assert_eq!(state.render_plan().body, ViewBody::Recommendations(Panel::Blank));
}

#[tokio::test]
async fn test_failed_login_keeps_modal_open() {
    let mut backend = MockBackend::start().await;
    backend
        .mount_detail("POST", "/api/auth/login", 401, "Incorrect email or password")
        .await;

    let mut state = AppState::new(MemoryStore::new().shared());
    let mut driver = Driver::on_current(backend.api());
    state.dispatch(Action::OpenAuth);
    driver
        .settle(
            &mut state,
            Action::SubmitLogin(Credentials::new("grace@example.com", "wrong")),
        )
        .await;

    assert!(!state.is_authenticated());
    let modal = state.render_plan().auth_modal.expect("modal stays open");
    assert_eq!(modal.error.as_deref(), Some("Incorrect email or password"));
    assert!(!modal.busy);
}

#[tokio::test]
async fn test_registration_returns_to_login_tab() {
    let mut backend = MockBackend::start().await;
    backend
        .mount_json("POST", "/api/auth/register", 200, &serde_json::json!({ "id": 9 }))
        .await;
    let login = backend.never("POST", "/api/auth/login").await;

    let memory = MemoryStore::new();
    let mut state = AppState::new(memory.shared());
    let mut driver = Driver::on_current(backend.api());
    state.dispatch(Action::OpenAuth);
    state.dispatch(Action::SwitchAuthTab(AuthTab::Register));

    let user = NewUser {
        name: "Grace".to_string(),
        email: "grace@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    driver.settle(&mut state, Action::SubmitRegister(user)).await;

    assert!(!state.is_authenticated());
    assert!(memory.get(TOKEN_KEY).is_none());
    assert!(state.auth_modal.open);
    assert_eq!(state.auth_modal.tab, AuthTab::Login);
    assert_eq!(state.auth_modal.notice.as_deref(), Some(REGISTERED_NOTICE));
    login.assert_async().await;
}
