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

//! Error kinds.
//!
//! [`ValidationError`]s are raised before any request is made and are shown to
//! the user as feedback. [`StoreError`]s come back from the catalog API, the
//! `Conflict` kind is singled out because the edit screen reports it instead
//! of failing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("No album is open")]
    NoAlbumLoaded,

    #[error("Album title cannot be empty")]
    AlbumTitleEmpty,

    #[error("Release date cannot be empty")]
    ReleaseDateEmpty,

    #[error("Release date '{0}' is not a valid YYYY-MM-DD date")]
    ReleaseDateInvalid(String),

    #[error("Cover cannot be empty")]
    CoverEmpty,

    #[error("Cover '{0}' is not a valid address")]
    CoverInvalid(String),

    #[error("Unknown artist '{0}'")]
    UnknownArtist(String),

    #[error("Unknown genre '{0}'")]
    UnknownGenre(String),

    #[error("Artist name cannot be empty")]
    ArtistTitleEmpty,

    #[error("Genre name cannot be empty")]
    GenreTitleEmpty,

    #[error("Rating {0} must be between 0 and 5 in steps of 0.5")]
    InvalidRating(String),

    #[error("No track with id {0} on this album")]
    UnknownTrack(i64),

    #[error("Track title cannot be empty")]
    TrackTitleEmpty,

    #[error("Disc number must be a whole number from 1")]
    DiscNumberInvalid,

    #[error("Nothing to confirm")]
    NothingToConfirm,

    #[error("Track minutes cannot be empty")]
    MinutesEmpty,

    #[error("Track minutes cannot be negative")]
    MinutesNegative,

    #[error("Track minutes maximum value is 99")]
    MinutesTooLarge,

    #[error("Track seconds cannot be empty")]
    SecondsEmpty,

    #[error("Track seconds cannot be negative")]
    SecondsNegative,

    #[error("Track seconds maximum value is 59")]
    SecondsTooLarge,
}

#[derive(Error, Debug)]
pub(crate) enum StoreError {
    #[error("Request to {0} was rejected as a duplicate")]
    Conflict(String),

    #[error("Request to {url} failed with status code {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
