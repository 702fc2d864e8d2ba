// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fs::File;

use super::*;

fn sorted(mut file_names: Vec<String>) -> Vec<String> {
    file_names.sort_unstable();
    file_names
}

fn new_config_dir_fixture() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    for file_name in ["a.rviz", "b.rviz", "notes.txt"] {
        File::create(temp_dir.path().join(file_name)).expect("create file");
    }
    temp_dir
}

#[test]
fn list_config_files_filters_by_suffix() {
    let temp_dir = new_config_dir_fixture();
    let file_names = list_config_files(temp_dir.path());
    // Enumeration order is unspecified.
    assert_eq!(vec!["a.rviz".to_owned(), "b.rviz".to_owned()], sorted(file_names));
}

#[cfg(unix)]
#[test]
fn list_config_files_skips_invalid_utf8_names() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt as _};

    let temp_dir = new_config_dir_fixture();
    // Ends in the suffix bytes but is not a valid UTF-8 file name.
    let invalid_name = OsStr::from_bytes(b"bad\xff.rviz");
    File::create(temp_dir.path().join(invalid_name)).expect("create file");

    let file_names = list_config_files(temp_dir.path());
    assert_eq!(vec!["a.rviz".to_owned(), "b.rviz".to_owned()], sorted(file_names));
}

#[test]
fn list_config_files_without_matches() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    File::create(temp_dir.path().join("notes.txt")).expect("create file");
    assert!(list_config_files(temp_dir.path()).is_empty());
}

#[test]
fn list_config_files_in_missing_dir() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let missing = temp_dir.path().join("does-not-exist");
    assert!(list_config_files(&missing).is_empty());
}

#[test]
fn list_config_files_in_non_dir() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let file_path = temp_dir.path().join("notes.txt");
    File::create(&file_path).expect("create file");
    assert!(list_config_files(&file_path).is_empty());
}

#[test]
fn load_file_path_repopulates_choices_from_containing_dir() {
    let temp_dir = new_config_dir_fixture();
    let dir = temp_dir.path().to_string_lossy().into_owned();
    let file_path = format!("{dir}/a.rviz");

    let mut state = State::default();
    assert!(state.load_file_path(&file_path));

    assert_eq!(
        Some(dir.as_str()),
        state.config_dir.as_deref().and_then(|dir| dir.to_str())
    );
    assert_eq!(
        vec!["a.rviz".to_owned(), "b.rviz".to_owned()],
        sorted(state.file_names.clone())
    );
    // Loading only restores the directory, not the selection.
    assert_eq!(None, state.selected_file_name);
    assert_eq!(None, state.selected_file_path());
}

#[test]
fn select_file_name_composes_path() {
    let temp_dir = new_config_dir_fixture();
    let mut state = State::default();
    state.update_config_dir(Some(&DirPath::from_borrowed(temp_dir.path())));
    assert_eq!(None, state.selected_file_path());

    assert!(state.select_file_name("a.rviz"));
    let expected = format!("{dir}/a.rviz", dir = temp_dir.path().to_string_lossy());
    assert_eq!(Some(expected), state.selected_file_path());

    // Re-selecting the same file name has no effect.
    assert!(!state.select_file_name("a.rviz"));
}

#[test]
fn select_file_name_is_not_validated_against_choices() {
    let mut state = State::default();
    state.config_dir = Some(DirPath::from_owned("/configs".into()));
    assert!(state.select_file_name("missing.rviz"));
    assert_eq!(
        Some("/configs/missing.rviz".to_owned()),
        state.selected_file_path()
    );
}

#[test]
fn update_config_dir_clears_selection() {
    let temp_dir = new_config_dir_fixture();
    let mut state = State::default();
    state.update_config_dir(Some(&DirPath::from_borrowed(temp_dir.path())));
    state.select_file_name("a.rviz");

    let other_dir = tempfile::tempdir().expect("temp dir");
    assert!(state.update_config_dir(Some(&DirPath::from_borrowed(other_dir.path()))));
    assert_eq!(None, state.selected_file_name);
    assert!(state.file_names.is_empty());

    // Unchanged directory is a no-op.
    assert!(!state.update_config_dir(Some(&DirPath::from_borrowed(other_dir.path()))));
}

#[tokio::test]
async fn tasklet_notifies_on_config_dir_change() {
    use discro::tasklet::OnChanged;

    let observable = ObservableState::default();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let task = tokio::spawn(tasklet::on_config_dir_changed(
        observable.subscribe_changed(),
        move |config_dir| {
            if tx
                .send(config_dir.map(|config_dir| config_dir.to_path_buf()))
                .is_err()
            {
                return OnChanged::Abort;
            }
            OnChanged::Continue
        },
    ));

    // The initial value is delivered immediately.
    assert_eq!(None, rx.recv().await.expect("initial notification"));

    let temp_dir = tempfile::tempdir().expect("temp dir");
    observable.update_config_dir(&DirPath::from_borrowed(temp_dir.path()));
    assert_eq!(
        Some(temp_dir.path().to_path_buf()),
        rx.recv().await.expect("change notification")
    );

    // Selecting a file does not touch the directory.
    observable.select_file_name("a.rviz");
    observable.set_hide_menu(true);

    drop(observable);
    task.await.expect("tasklet terminates");
    assert_eq!(None, rx.recv().await);
}

#[tokio::test]
async fn tasklet_pumps_state_changes() {
    use discro::tasklet::OnChanged;

    let observable = ObservableState::default();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let task = tokio::spawn(tasklet::on_state_changed(
        observable.subscribe_changed(),
        move || {
            if tx.send(()).is_err() {
                return OnChanged::Abort;
            }
            OnChanged::Continue
        },
    ));

    rx.recv().await.expect("initial notification");
    observable.set_hide_menu(true);
    rx.recv().await.expect("change notification");

    drop(observable);
    task.await.expect("tasklet terminates");
}

#[test]
fn hide_menu_roundtrip() {
    let mut state = State::default();
    assert!(!state.hide_menu());
    assert!(state.set_hide_menu(true));
    assert!(state.hide_menu());
    assert!(!state.set_hide_menu(true));
    assert!(state.set_hide_menu(false));
    assert!(!state.hide_menu());
}
