// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The vizcfg authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::mpsc;

use egui::Context;

use vizcfg::util::fs::DirPath;

use crate::NoReceiverForEvent;

#[allow(missing_debug_implementations)]
struct NoReceiverForMessage(Message);

#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub(crate) struct MessageSender {
    ctx: Context,
    msg_tx: mpsc::Sender<Message>,
}

impl MessageSender {
    pub(crate) const fn new(ctx: Context, msg_tx: mpsc::Sender<Message>) -> Self {
        Self { ctx, msg_tx }
    }

    pub(crate) fn send_action<T>(&self, action: T)
    where
        T: Into<Action>,
    {
        if let Err(NoReceiverForMessage(msg)) = self.send_message(Message::Action(action.into())) {
            let Message::Action(action) = msg else {
                unreachable!()
            };
            log::warn!("No receiver for action {action:?}");
        }
    }

    pub(crate) fn emit_event<T>(&self, event: T) -> Result<(), NoReceiverForEvent>
    where
        T: Into<Event>,
    {
        if let Err(NoReceiverForMessage(msg)) = self.send_message(Message::Event(event.into())) {
            let Message::Event(event) = msg else {
                unreachable!()
            };
            log::warn!("No receiver for event: {event:?}");
            return Err(NoReceiverForEvent);
        }
        Ok(())
    }

    fn send_message(&self, msg: Message) -> Result<(), NoReceiverForMessage> {
        self.msg_tx.send(msg).map_err(|err| {
            log::warn!("Failed to send message: {err}");
            NoReceiverForMessage(err.0)
        })?;
        // Queued messages are consumed before rendering the next frame.
        self.ctx.request_repaint();
        Ok(())
    }
}

// Not cloneable so large enum variants should be fine.
#[derive(Debug)]
pub(crate) enum Message {
    Action(Action),
    Event(Event),
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

#[derive(Debug)]
pub(crate) enum Action {
    Picker(PickerAction),
}

#[derive(Debug)]
pub(crate) enum PickerAction {
    /// Let the user choose the configuration directory interactively.
    BrowseConfigDir,
    /// Outcome of the directory chooser.
    UpdateConfigDir(Option<DirPath<'static>>),
    /// Select one of the listed configuration files.
    SelectFileName(String),
    SetHideMenu(bool),
    /// Commit the current selections and close the dialog.
    Apply,
    /// Close the dialog, discarding the current selections.
    Cancel,
}

impl From<PickerAction> for Action {
    fn from(action: PickerAction) -> Self {
        Self::Picker(action)
    }
}

/// App-level event
///
/// Not cloneable to prevent unintended storage. Notifications are
/// supposed to be ephemeral and should disappear after being processed.
#[derive(Debug)]
pub(crate) enum Event {
    Picker(PickerEvent),
}

#[derive(Debug)]
pub(crate) enum PickerEvent {
    StateChanged,
}

impl From<PickerEvent> for Event {
    fn from(event: PickerEvent) -> Self {
        Self::Picker(event)
    }
}
