// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use egui::Context;

use crate::fs::choose_directory_path;

use super::{
    Action, ConfigDirSelection, Event, Message, MessageSender, Model, PickerAction, PickerEvent,
};

pub(super) struct UpdateContext<'a> {
    pub(super) rt: &'a tokio::runtime::Handle,
    pub(super) msg_tx: &'a MessageSender,
    pub(super) mdl: &'a mut Model,
}

impl UpdateContext<'_> {
    pub(super) fn on_message(&mut self, ctx: &Context, msg: Message) {
        match msg {
            Message::Action(action) => self.on_action(ctx, action),
            Message::Event(event) => self.on_event(ctx, event),
        }
    }

    fn on_action(&mut self, ctx: &Context, action: Action) {
        let changed = match action {
            Action::Picker(action) => self.on_picker_action(ctx, action),
        };
        if changed {
            ctx.request_repaint();
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    fn on_picker_action(&mut self, ctx: &Context, action: PickerAction) -> bool {
        let Self { rt, msg_tx, mdl } = self;
        match action {
            PickerAction::BrowseConfigDir => {
                if matches!(
                    mdl.config_dir_selection,
                    Some(ConfigDirSelection::Selecting)
                ) {
                    log::debug!("Already selecting configuration directory");
                    return false;
                }
                let start_dir = {
                    let state = mdl.picker.read();
                    state
                        .config_dir
                        .as_deref()
                        .map(Path::to_path_buf)
                        .or_else(default_start_dir)
                };
                let on_dir_path_chosen = {
                    let msg_tx = msg_tx.clone();
                    move |dir_path| {
                        msg_tx.send_action(PickerAction::UpdateConfigDir(dir_path));
                    }
                };
                choose_directory_path(rt, start_dir.as_ref(), on_dir_path_chosen);
                mdl.config_dir_selection = Some(ConfigDirSelection::Selecting);
                true
            }
            PickerAction::UpdateConfigDir(config_dir) => {
                mdl.config_dir_selection = Some(ConfigDirSelection::Selected);
                if let Some(config_dir) = config_dir {
                    mdl.picker.update_config_dir(&config_dir)
                } else {
                    // Dialog dismissed without choosing a directory.
                    true
                }
            }
            PickerAction::SelectFileName(file_name) => mdl.picker.select_file_name(file_name),
            PickerAction::SetHideMenu(hide_menu) => mdl.picker.set_hide_menu(hide_menu),
            PickerAction::Apply => {
                commit_selection(mdl);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                false
            }
            PickerAction::Cancel => {
                // Discarding is simply not reading the state afterward.
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                false
            }
        }
    }

    #[allow(clippy::unused_self)]
    fn on_event(&mut self, ctx: &Context, event: Event) {
        match event {
            Event::Picker(PickerEvent::StateChanged) => {
                ctx.request_repaint();
            }
        }
    }
}

/// Hand the committed selections over to the host process.
fn commit_selection(mdl: &Model) {
    let state = mdl.picker.read();
    let file = state.selected_file_path().unwrap_or_default();
    let hide_menu = state.hide_menu();
    log::info!("Committing selection: file '{file}', hide menu {hide_menu}");
    println!("file={file}");
    println!("hide_menu={hide_menu}");
}

#[must_use]
fn default_start_dir() -> Option<PathBuf> {
    directories::UserDirs::new().map(|user_dirs| user_dirs.home_dir().to_path_buf())
}
