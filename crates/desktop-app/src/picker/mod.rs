// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, path::Path};

use discro::{Publisher, Ref, Subscriber};

use vizcfg_core::config_file::{compose_file_path, containing_dir, has_config_file_suffix};

use crate::fs::DirPath;

pub mod tasklet;

/// Lists the configuration files in a directory.
///
/// Returns the file names (not full paths) whose name passes the literal
/// suffix test, in the order the file system enumerates them.
///
/// A directory that cannot be read (missing, not a directory, permission
/// denied) is logged and yields an empty list. Callers are supposed to
/// treat this the same as a directory without any matches.
#[must_use]
pub fn list_config_files(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!(
                "Failed to read directory '{dir}': {err}",
                dir = dir.display()
            );
            return vec![];
        }
    };
    entries
        .filter_map(|entry| {
            let entry = entry
                .inspect_err(|err| {
                    log::warn!(
                        "Failed to read entry in directory '{dir}': {err}",
                        dir = dir.display()
                    );
                })
                .ok()?;
            let Ok(file_name) = entry.file_name().into_string() else {
                log::debug!("Skipping file name with invalid UTF-8: {:?}", entry.path());
                return None;
            };
            has_config_file_suffix(&file_name).then_some(file_name)
        })
        .collect()
}

/// In-memory state of the configuration picker dialog.
///
/// Nothing is persisted. The state lives only as long as the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// The directory the configuration files are listed from.
    pub config_dir: Option<DirPath<'static>>,

    /// File names produced by the last directory scan.
    pub file_names: Vec<String>,

    /// The currently selected file name.
    ///
    /// Not validated against `file_names`. Composing the full path is a
    /// pure string operation.
    pub selected_file_name: Option<String>,

    /// Whether the host should hide its menu bar when applying.
    pub hide_menu: bool,
}

impl State {
    /// The composed path of the current selection.
    ///
    /// `None` as long as no directory or no file name has been selected.
    /// Maps to an empty string at the host boundary.
    #[must_use]
    pub fn selected_file_path(&self) -> Option<String> {
        let config_dir = self.config_dir.as_ref()?;
        let file_name = self.selected_file_name.as_deref()?;
        Some(compose_file_path(&config_dir.to_string_lossy(), file_name))
    }

    /// Initializes the picker from a previously known file path.
    ///
    /// Derives the containing directory and repopulates the file choices
    /// by rescanning it. The selection itself is left empty until the
    /// user picks a file.
    #[allow(clippy::must_use_candidate)]
    pub fn load_file_path(&mut self, file_path: &str) -> bool {
        let dir = containing_dir(file_path);
        log::info!("Loading configuration picker from directory: {dir}");
        let dir = DirPath::from_owned(dir.into());
        self.replace_config_dir(Some(dir))
    }

    /// Switches the configuration directory.
    ///
    /// Rescans the new directory and clears the selection. No effect when
    /// the directory does not change.
    #[allow(clippy::must_use_candidate)]
    pub fn update_config_dir(&mut self, new_config_dir: Option<&DirPath<'_>>) -> bool {
        if self.config_dir.as_ref() == new_config_dir {
            // No effect
            return false;
        }
        if let Some(new_config_dir) = new_config_dir {
            log::info!(
                "Updating configuration directory: {dir}",
                dir = new_config_dir.display()
            );
        } else {
            log::info!("Resetting configuration directory");
        }
        let new_config_dir = new_config_dir.map(|dir| dir.clone().into_owned());
        self.replace_config_dir(new_config_dir)
    }

    fn replace_config_dir(&mut self, new_config_dir: Option<DirPath<'static>>) -> bool {
        self.file_names = new_config_dir
            .as_deref()
            .map(list_config_files)
            .unwrap_or_default();
        self.config_dir = new_config_dir;
        self.selected_file_name = None;
        true
    }

    #[must_use]
    pub const fn hide_menu(&self) -> bool {
        self.hide_menu
    }

    /// Selects a file name from the listed choices.
    ///
    /// Membership in `file_names` is not verified.
    #[allow(clippy::must_use_candidate)]
    pub fn select_file_name(&mut self, file_name: impl Into<String>) -> bool {
        let file_name = file_name.into();
        if self.selected_file_name.as_deref() == Some(file_name.as_str()) {
            // No effect
            return false;
        }
        self.selected_file_name = Some(file_name);
        true
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_hide_menu(&mut self, hide_menu: bool) -> bool {
        if self.hide_menu == hide_menu {
            // No effect
            return false;
        }
        self.hide_menu = hide_menu;
        true
    }
}

/// Manages the mutable, observable state
#[derive(Debug)]
pub struct ObservableState {
    state_pub: Publisher<State>,
}

impl ObservableState {
    #[must_use]
    pub fn new(initial_state: State) -> Self {
        let state_pub = Publisher::new(initial_state);
        Self { state_pub }
    }

    #[must_use]
    pub fn read(&self) -> Ref<'_, State> {
        self.state_pub.read()
    }

    #[must_use]
    pub fn subscribe_changed(&self) -> Subscriber<State> {
        self.state_pub.subscribe_changed()
    }

    #[allow(clippy::must_use_candidate)]
    pub fn modify(&self, modify_state: impl FnOnce(&mut State) -> bool) -> bool {
        self.state_pub.modify(modify_state)
    }

    #[allow(clippy::must_use_candidate)]
    pub fn load_file_path(&self, file_path: &str) -> bool {
        self.modify(|state| state.load_file_path(file_path))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn update_config_dir(&self, new_config_dir: &DirPath<'_>) -> bool {
        self.modify(|state| state.update_config_dir(Some(new_config_dir)))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn reset_config_dir(&self) -> bool {
        self.modify(|state| state.update_config_dir(None))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn select_file_name(&self, file_name: impl Into<String>) -> bool {
        self.modify(|state| state.select_file_name(file_name))
    }

    #[allow(clippy::must_use_candidate)]
    pub fn set_hide_menu(&self, hide_menu: bool) -> bool {
        self.modify(|state| state.set_hide_menu(hide_menu))
    }
}

impl Default for ObservableState {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
