// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application event distribution.
//!
//! Events flow from the command worker (and the prompt, for input it could
//! not parse) to the main thread, which is the only place that writes to the
//! terminal.
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    `mpsc` channel.
//! 2. **Process**: [`process_events`] follows navigation requests by sending
//!    new commands to the worker.
//! 3. **Output**: Feedback, prompts and listings are written out, error
//!    feedback to standard error.

use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Result;
use log::debug;

use crate::{
    App,
    actions::commands::AppCommand,
    editor::{EditCommand, FeedbackKind, FeedbackMessage},
    model::Album,
};

/// Places the edit screen can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    AlbumList,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    /// A fresh album snapshot replaced the previous one.
    AlbumChanged(Arc<Album>),

    Feedback(FeedbackMessage),

    ConfirmRequested(String),

    Navigate(Route),

    ShowText(String),

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, writing out events as they arrive.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(app: &mut App) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::AlbumChanged(album) => {
                debug!("Album {} now has {} tracks", album.id, album.tracks.len());
            }

            AppEvent::Feedback(message) => match message.kind {
                FeedbackKind::Info => writeln!(out, "{message}")?,
                FeedbackKind::Error => writeln!(err, "{message}")?,
            },

            AppEvent::ConfirmRequested(prompt) => writeln!(out, "{prompt} (yes/no)")?,

            AppEvent::Navigate(Route::AlbumList) => {
                app.command_tx.send(AppCommand::Edit(EditCommand::ListAlbums))?;
            }

            AppEvent::ShowText(text) => writeln!(out, "{text}")?,

            AppEvent::Error(message) => writeln!(err, "{}", FeedbackMessage::error(message))?,

            AppEvent::ExitApplication => {}
        }

        out.flush()?;
    }

    Ok(())
}
