// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use discro::{tasklet::OnChanged, Subscriber};

use super::State;
use crate::fs::DirPath;

/// Invoke a callback for every change of the picker state.
pub fn on_state_changed(
    mut subscriber: Subscriber<State>,
    mut on_changed: impl FnMut() -> OnChanged + Send + 'static,
) -> impl Future<Output = ()> + Send + 'static {
    async move {
        log::debug!("Starting on_state_changed");
        loop {
            // Consume the current state before waiting for the next change.
            drop(subscriber.read_ack());
            match on_changed() {
                OnChanged::Continue => (),
                OnChanged::Abort => {
                    // Consumer has rejected the notification
                    log::debug!("Aborting on_state_changed");
                    return;
                }
            }
            if subscriber.changed().await.is_err() {
                // Publisher has disappeared
                log::debug!("Aborting on_state_changed");
                break;
            }
        }
        log::debug!("Stopping on_state_changed");
    }
}

/// Listen for changes of the configuration directory.
pub fn on_config_dir_changed(
    mut subscriber: Subscriber<State>,
    mut on_changed: impl FnMut(Option<&DirPath<'_>>) -> OnChanged + Send + 'static,
) -> impl Future<Output = ()> + Send + 'static {
    // Read the initial value immediately before spawning the async task
    let mut value = subscriber.read_ack().config_dir.clone();
    async move {
        log::debug!("Starting on_config_dir_changed");
        // Enforce initial update
        let mut value_changed = true;
        loop {
            if value_changed {
                log::debug!("on_config_dir_changed({value:?})");
                match on_changed(value.as_ref()) {
                    OnChanged::Continue => (),
                    OnChanged::Abort => {
                        // Consumer has rejected the notification
                        log::debug!("Aborting on_config_dir_changed");
                        return;
                    }
                }
            }
            value_changed = false;
            if subscriber.changed().await.is_err() {
                // Publisher has disappeared
                log::debug!("Aborting on_config_dir_changed");
                break;
            }
            let state = subscriber.read_ack();
            let new_value = state.config_dir.as_ref();
            if value.as_ref() != new_value {
                value = new_value.cloned();
                value_changed = true;
            }
        }
        log::debug!("Stopping on_config_dir_changed");
    }
}
