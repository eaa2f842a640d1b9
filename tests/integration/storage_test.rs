//! Persisted storage tests

use pretty_assertions::assert_eq;
use shopagent::egui_app::storage::{FileStore, KeyValueStore, STATE_FILE_NAME, THEME_KEY, TOKEN_KEY};
use shopagent::egui_app::{AppState, Theme};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = FileStore::open(dir.path()).unwrap();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(THEME_KEY, "dark").unwrap();
        store.remove(TOKEN_KEY).unwrap();
    }

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get(TOKEN_KEY), None);
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_corrupt_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(STATE_FILE_NAME), "{ not json").unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get(TOKEN_KEY), None);
    store.set(TOKEN_KEY, "tok").unwrap();
    assert_eq!(FileStore::open(dir.path()).unwrap().get(TOKEN_KEY).as_deref(), Some("tok"));
}

#[test]
fn test_theme_restored_across_restart() {
    let dir = TempDir::new().unwrap();
    {
        let store = Arc::new(FileStore::open(dir.path()).unwrap());
        let mut state = AppState::new(store);
        state.dispatch(shopagent::egui_app::Action::ToggleTheme);
    }

    let store = Arc::new(FileStore::open(dir.path()).unwrap());
    let state = AppState::new(store);
    assert_eq!(state.theme, Theme::Dark);
}
