// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn suffix_matches_literal_trailing_characters() {
    assert!(has_config_file_suffix("layout.rviz"));
    assert!(has_config_file_suffix(".rviz"));
    // Raw suffix test: no separator before the suffix is required.
    assert!(has_config_file_suffix("x.rviz"));
    assert!(has_config_file_suffix("archive.tar.rviz"));
}

#[test]
fn suffix_does_not_match_other_names() {
    assert!(!has_config_file_suffix("layout.rviz.bak"));
    assert!(!has_config_file_suffix("notes.txt"));
    assert!(!has_config_file_suffix("rviz"));
    assert!(!has_config_file_suffix(""));
}

#[test]
fn suffix_is_case_sensitive() {
    assert!(!has_config_file_suffix("LAYOUT.RVIZ"));
    assert!(!has_config_file_suffix("layout.Rviz"));
}

#[test]
fn compose_joins_with_separator() {
    assert_eq!(
        "/configs/a.rviz",
        compose_file_path("/configs", "a.rviz").as_str()
    );
}

#[test]
fn containing_dir_strips_last_component() {
    assert_eq!("/configs", containing_dir("/configs/a.rviz"));
    assert_eq!("/configs/nested", containing_dir("/configs/nested/b.rviz"));
    assert_eq!("", containing_dir("/a.rviz"));
}

#[test]
fn containing_dir_without_separator_is_identity() {
    assert_eq!("a.rviz", containing_dir("a.rviz"));
}

#[test]
fn compose_then_decompose_roundtrips_dir() {
    let dir = "/configs";
    let composed = compose_file_path(dir, "a.rviz");
    assert_eq!(dir, containing_dir(&composed));
}
