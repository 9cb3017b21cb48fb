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

//! # Album Editor.
//!
//! A terminal client for editing albums in a music catalog served by a REST
//! API: album details, genres, rating, and the album's tracks.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Input Thread** reads command lines and turns them into commands.
//! * The **Command Worker** owns the album being edited and runs one command
//!   at a time against the catalog API.
//! * The **Main Thread** receives the resulting events and writes feedback
//!   and listings to the terminal.
//!
//! ## Architecture
//!
//! Communication between the threads is handled via `std::sync::mpsc`
//! channels. Since a single worker processes commands in order, requests to
//! the catalog never overlap.

mod actions;
mod commander;
mod config;
mod editor;
mod error;
mod model;
mod render;
mod store;
mod util;

use anyhow::{Context, Result};
use log::{debug, info};
use std::{
    env,
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    commander::Commander,
    config::AppConfig,
    editor::EditCommand,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            event_tx,
            event_rx,
            command_tx,
        }
    }
}

/// The entry point of the application.
///
/// An album id may be given as the only argument to open that album straight
/// away.
fn main() -> Result<()> {
    let config = config::load_config();
    init_logging(&config);

    let album_id = env::args()
        .nth(1)
        .map(|arg| arg.parse::<i64>())
        .transpose()
        .context("The album id must be a number")?;

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    run(&mut app, command_rx, album_id).context("Application error occurred")
}

fn init_logging(config: &AppConfig) {
    let mut clog = colog::default_builder();
    clog.filter(None, config.log_level_filter());
    clog.init();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * A command worker to process [`AppCommand`]s.
/// * An input thread reading command lines from standard input.
///
/// After spawning the workers, it hands control to [`process_events`] until
/// the user quits.
fn run(app: &mut App, command_rx: Receiver<AppCommand>, album_id: Option<i64>) -> Result<()> {
    info!("Using catalog at {}", app.config.base_url);

    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(&app.config, command_rx, command_event_tx);

    let commander = Commander::new(app.command_tx.clone(), app.event_tx.clone());
    let exit_tx = app.command_tx.clone();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let keep_going = line
                .map_err(anyhow::Error::from)
                .and_then(|line| commander.handle_line(&line));
            match keep_going {
                Ok(true) => {}
                Ok(false) => return,
                Err(e) => {
                    debug!("Input stopped: {e:#}");
                    break;
                }
            }
        }

        // End of input quits like `q` does.
        let _ = exit_tx.send(AppCommand::ExitApplication);
    });

    let first = match album_id {
        Some(album_id) => AppCommand::Edit(EditCommand::Load(album_id)),
        None => AppCommand::Help,
    };
    app.command_tx.send(first)?;

    process_events(app)
}
