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

//! Background command processing.
//!
//! This module implements the command pattern used to keep catalog requests
//! off the main thread. A dedicated worker owns the [`AlbumEditor`] and
//! processes one [`AppCommand`] at a time, so requests never overlap. Results
//! go back to the application as [`AppEvent`]s.

use anyhow::Result;
use log::error;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use crate::{
    actions::events::AppEvent,
    commander,
    config::AppConfig,
    editor::{AlbumEditor, EditCommand},
    store::Stores,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppCommand {
    Edit(EditCommand),
    Help,
    ExitApplication,
}

/// Spawns a background thread to process application commands against the
/// configured catalog API.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    spawn_worker(Stores::rest(config), command_rx, event_tx)
}

fn spawn_worker(
    stores: Stores,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut editor = AlbumEditor::new(stores, event_tx.clone());

        while let Ok(command) = command_rx.recv() {
            if let Err(e) = handle_command(&mut editor, command, &event_tx) {
                error!("{e:#}");
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
    })
}

/// Orchestrates the execution of a single command.
fn handle_command(
    editor: &mut AlbumEditor,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Edit(edit) => editor.handle(edit)?,
        AppCommand::Help => event_tx.send(AppEvent::ShowText(commander::HELP.to_string()))?,
        AppCommand::ExitApplication => event_tx.send(AppEvent::ExitApplication)?,
    }

    Ok(())
}
