// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use discro::tasklet::OnChanged;

use vizcfg::desktop_app::picker;

use super::{MessageSender, PickerEvent};

/// Current phase of the interactive directory selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigDirSelection {
    /// The native directory chooser is open.
    Selecting,
    /// A directory has been chosen and the state has been updated.
    Selected,
}

#[derive(Debug)]
pub(crate) struct Model {
    /// Shared with the state-watching tasklets.
    pub(super) picker: Arc<picker::ObservableState>,

    pub(super) config_dir_selection: Option<ConfigDirSelection>,
}

impl Model {
    #[must_use]
    pub(crate) fn new(picker: picker::ObservableState) -> Self {
        Self {
            picker: Arc::new(picker),
            config_dir_selection: None,
        }
    }

    /// Spawn the tasklets that translate state changes into app events.
    pub(super) fn spawn_event_tasks(&self, rt: &tokio::runtime::Handle, msg_tx: &MessageSender) {
        let subscriber = self.picker.subscribe_changed();
        let msg_tx = msg_tx.clone();
        rt.spawn(picker::tasklet::on_state_changed(subscriber, move || {
            if msg_tx.emit_event(PickerEvent::StateChanged).is_err() {
                return OnChanged::Abort;
            }
            OnChanged::Continue
        }));
    }
}
