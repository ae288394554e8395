// tests/gui_app.rs
//
// The window's query flow, driven without a display. The source is a copy of
// the fixture in the temp dir so a test can make it disappear mid-session.

mod common;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use cutoff_lookup::config::state::AppState;
use cutoff_lookup::gui::app::App;
use common::FIXTURE;

fn sheet_copy(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cutoff_lookup_{}_{}.csv", std::process::id(), name));
    fs::write(&path, FIXTURE).expect("write fixture copy");
    path
}

/// App reading `path`, refetching on every sync.
fn app_on(path: &PathBuf) -> App {
    let mut state = AppState::default();
    state.options.source.set_file(path.clone());
    state.options.source.ttl = Duration::ZERO;
    App::new(state)
}

#[test]
fn startup_loads_the_sheet() {
    let path = sheet_copy("startup");
    let app = app_on(&path);
    fs::remove_file(&path).ok();

    assert_eq!(app.dataset.as_ref().map(|ds| ds.len()), Some(18));
    assert!(app.matches.is_none());
    assert!(app.load_error.is_none());
}

#[test]
fn submit_matches_the_committed_query() {
    let path = sheet_copy("submit");
    let mut app = app_on(&path);

    app.state.gui.query = "高師大".into();
    app.submit();
    fs::remove_file(&path).ok();

    assert_eq!(app.state.gui.last_query, "高師大");
    let m = app.matches.as_ref().expect("matches");
    assert_eq!(m.groups.len(), 1);
    let ds = app.dataset.as_ref().expect("dataset");
    assert_eq!(m.resolve(ds).groups()[0].code, "003052");
}

#[test]
fn blank_submit_clears_matches_without_fetching() {
    let path = sheet_copy("blank");
    let mut app = app_on(&path);
    app.state.gui.query = "心理".into();
    app.submit();
    assert!(app.matches.is_some());

    // With a zero TTL any sync would refetch and fail on the missing file.
    fs::remove_file(&path).expect("remove");
    app.state.gui.query = "   ".into();
    app.submit();

    assert!(app.matches.is_none());
    assert!(app.dataset.is_some());
    assert!(app.load_error.is_none());
}

#[test]
fn failed_sync_drops_dataset_and_matches() {
    let path = sheet_copy("failure");
    let mut app = app_on(&path);
    app.state.gui.query = "心理".into();
    app.submit();
    assert!(app.matches.is_some());

    fs::remove_file(&path).expect("remove");
    app.refresh();

    assert!(app.dataset.is_none());
    assert!(app.matches.is_none());
    assert!(app.load_error.is_some());

    // A failed fetch while searching behaves the same way.
    fs::write(&path, FIXTURE).expect("restore");
    app.submit();
    assert!(app.dataset.is_some());
    fs::remove_file(&path).expect("remove");
    app.submit();
    fs::remove_file(&path).ok();

    assert!(app.dataset.is_none());
    assert!(app.matches.is_none());
    assert!(app.load_error.is_some());
}

#[test]
fn missing_source_at_startup_is_a_load_error() {
    let mut state = AppState::default();
    state.options.source.set_file(std::env::temp_dir().join("cutoff_lookup_no_such_sheet.csv"));
    let app = App::new(state);

    assert!(app.dataset.is_none());
    assert!(app.load_error.is_some());
}
