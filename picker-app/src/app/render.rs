// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use eframe::Frame;
use egui::{Align, Button, CentralPanel, ComboBox, Context, Grid, Key, Layout, TopBottomPanel};

use super::{ConfigDirSelection, MessageSender, Model, PickerAction};

// In contrast to `UpdateContext` the model is immutable during rendering.
pub(super) struct RenderContext<'a> {
    pub(super) msg_tx: &'a MessageSender,
    pub(super) mdl: &'a Model,
}

impl RenderContext<'_> {
    pub(super) fn render_frame(&mut self, ctx: &Context, _frm: &mut Frame) {
        let Self { msg_tx, mdl } = self;

        let current_state = mdl.picker.read();

        TopBottomPanel::bottom("buttons-panel").show(ctx, |ui| {
            render_buttons_panel(ui, msg_tx);
        });

        CentralPanel::default().show(ctx, |ui| {
            render_picker_panel(ui, msg_tx, mdl, &current_state);
        });
    }
}

fn render_picker_panel(
    ui: &mut egui::Ui,
    msg_tx: &MessageSender,
    mdl: &Model,
    current_state: &vizcfg::desktop_app::picker::State,
) {
    Grid::new("picker-grid")
        .num_columns(3)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("File path").on_hover_text("Full path to file");
            ui.label(
                current_state
                    .config_dir
                    .as_deref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_default(),
            );
            if ui
                .add_enabled(
                    !matches!(
                        mdl.config_dir_selection,
                        Some(ConfigDirSelection::Selecting)
                    ),
                    Button::new("Browse"),
                )
                .clicked()
            {
                msg_tx.send_action(PickerAction::BrowseConfigDir);
            }
            ui.end_row();

            ui.label("Select configuration");
            ComboBox::from_id_salt("config-file-list")
                .selected_text(current_state.selected_file_name.as_deref().unwrap_or_default())
                .show_ui(ui, |ui| {
                    for file_name in &current_state.file_names {
                        let selected =
                            current_state.selected_file_name.as_deref() == Some(file_name.as_str());
                        if ui.selectable_label(selected, file_name).clicked() {
                            msg_tx.send_action(PickerAction::SelectFileName(file_name.clone()));
                        }
                    }
                });
            ui.end_row();

            ui.label("Hide menu")
                .on_hover_text("Check to hide the host's top menu bar");
            let mut hide_menu = current_state.hide_menu();
            if ui.checkbox(&mut hide_menu, "").changed() {
                msg_tx.send_action(PickerAction::SetHideMenu(hide_menu));
            }
            ui.end_row();
        });
}

fn render_buttons_panel(ui: &mut egui::Ui, msg_tx: &MessageSender) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let apply_response = ui.add(Button::new("Apply"));
        // Apply is the default action: Enter commits while no other
        // widget holds the keyboard focus.
        let enter_pressed = ui.memory(|memory| memory.focused().is_none())
            && ui.input(|input| input.key_pressed(Key::Enter));
        if apply_response.clicked() || enter_pressed {
            msg_tx.send_action(PickerAction::Apply);
        }
        if ui.add(Button::new("Cancel")).clicked() {
            msg_tx.send_action(PickerAction::Cancel);
        }
    });
}
