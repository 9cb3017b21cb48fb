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

//! Command-line input logic.
//!
//! This module turns lines typed at the prompt into application commands and
//! dispatches them to the command worker. Input that does not parse is
//! reported back as error feedback.

use std::sync::mpsc::Sender;

use anyhow::Result;
use thiserror::Error;

use crate::{
    actions::{commands::AppCommand, events::AppEvent},
    editor::{EditCommand, FeedbackMessage},
    model::discs::Direction,
};

pub(crate) const HELP: &str = "\
albums                   list the albums in the catalog
open <album>             open an album for editing
show                     show the open album
artist <name>            change the artist
title <title>            change the album title
date <yyyy-mm-dd>        change the release date
cover <url>              change the cover address
genres <g1>, <g2>, ...   replace the genres (none to clear)
rate <0-5>|clear         rate the album in half stars
tt <track> <title>       change a track title
tm <track> <minutes>     change a track's minutes (0-99)
ts <track> <seconds>     change a track's seconds (0-59)
up <track>               move a track up
down <track>             move a track down
nd|nt|nm|ns <value>      fill in the new track's disc, title, minutes, seconds
add                      add the new track
rmt <track>              remove a track
rma                      remove the album
yes | no                 confirm or cancel a removal
new-artist <name>        add an artist to the catalog
new-genre <name>         add a genre to the catalog
help                     show this list
q                        quit";

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command '{0}', type 'help' for the list of commands")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub(crate) struct Commander {
    command_tx: Sender<AppCommand>,
    event_tx: Sender<AppEvent>,
}

impl Commander {
    pub(crate) fn new(command_tx: Sender<AppCommand>, event_tx: Sender<AppEvent>) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Handles one line of input, returning `false` once the user has quit.
    pub(crate) fn handle_line(&self, buffer: &str) -> Result<bool> {
        match parse_command(buffer) {
            Ok(Some(command)) => {
                let exit = command == AppCommand::ExitApplication;
                self.command_tx.send(command)?;
                Ok(!exit)
            }
            Ok(None) => Ok(true),
            Err(e) => {
                self.event_tx.send(AppEvent::Feedback(FeedbackMessage::error(e.to_string())))?;
                Ok(true)
            }
        }
    }
}

/// Parses one line of input. Blank lines give `None`.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<AppCommand>, CommandError> {
    let (command, rest) = split_word(buffer);

    let edit = match command {
        "" => return Ok(None),

        "q" | "quit" => return Ok(Some(AppCommand::ExitApplication)),
        "help" | "?" => return Ok(Some(AppCommand::Help)),

        "albums" => EditCommand::ListAlbums,
        "open" => EditCommand::Load(parse_id(rest, "open <album>")?),
        "show" => EditCommand::Show,

        "artist" => EditCommand::EditArtist(rest.to_string()),
        "title" => EditCommand::EditTitle(rest.to_string()),
        "date" => EditCommand::EditReleaseDate(rest.to_string()),
        "cover" => EditCommand::EditCover(rest.to_string()),
        "genres" => EditCommand::EditGenres(parse_list(rest)),
        "rate" => EditCommand::RateAlbum(parse_rating(rest)?),

        "tt" => {
            let (track, title) = split_word(rest);
            EditCommand::EditTrackTitle(parse_id(track, "tt <track> <title>")?, title.to_string())
        }
        "tm" => {
            let (track, minutes) = split_word(rest);
            EditCommand::EditTrackMinutes(parse_id(track, "tm <track> <minutes>")?, minutes.to_string())
        }
        "ts" => {
            let (track, seconds) = split_word(rest);
            EditCommand::EditTrackSeconds(parse_id(track, "ts <track> <seconds>")?, seconds.to_string())
        }
        "up" => EditCommand::MoveTrack(parse_id(rest, "up <track>")?, Direction::Up),
        "down" => EditCommand::MoveTrack(parse_id(rest, "down <track>")?, Direction::Down),

        "nd" => EditCommand::SetNewTrackDisc(rest.to_string()),
        "nt" => EditCommand::SetNewTrackTitle(rest.to_string()),
        "nm" => EditCommand::SetNewTrackMinutes(rest.to_string()),
        "ns" => EditCommand::SetNewTrackSeconds(rest.to_string()),
        "add" => EditCommand::AddTrack,

        "rmt" => EditCommand::RequestTrackRemoval(parse_id(rest, "rmt <track>")?),
        "rma" => EditCommand::RequestAlbumRemoval,
        "yes" | "y" => EditCommand::Confirm,
        "no" | "n" => EditCommand::Cancel,

        "new-artist" => EditCommand::AddArtist(rest.to_string()),
        "new-genre" => EditCommand::AddGenre(rest.to_string()),

        unknown => return Err(CommandError::Unknown(unknown.to_string())),
    };

    Ok(Some(AppCommand::Edit(edit)))
}

/// Splits off the first word, trimming what remains.
fn split_word(buffer: &str) -> (&str, &str) {
    let buffer = buffer.trim();
    match buffer.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (buffer, ""),
    }
}

fn parse_id(word: &str, usage: &'static str) -> Result<i64, CommandError> {
    word.parse().map_err(|_| CommandError::Usage(usage))
}

fn parse_list(rest: &str) -> Vec<String> {
    if rest.is_empty() || rest == "none" {
        return vec![];
    }
    rest.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_rating(rest: &str) -> Result<Option<f64>, CommandError> {
    match rest {
        "clear" => Ok(None),
        stars => stars
            .parse()
            .map(Some)
            .map_err(|_| CommandError::Usage("rate <0-5>|clear")),
    }
}
