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

//! Create and partial-update payloads.
//!
//! A partial update only carries the fields that should change, absent
//! fields are left out of the request body entirely.

use serde::Serialize;

use super::{ArtistRef, Genre, Rating};

/// Changes to an album. `rating: Some(None)` clears the rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AlbumPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) artist: Option<ArtistRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rating: Option<Option<Rating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) genres: Option<Vec<Genre>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) disc_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) track_number: Option<u32>,
}

impl TrackPatch {
    pub(crate) fn position(disc_number: u32, track_number: u32) -> Self {
        Self {
            disc_number: Some(disc_number),
            track_number: Some(track_number),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewTrack {
    pub(crate) album_id: i64,
    pub(crate) disc_number: u32,
    pub(crate) track_number: u32,
    pub(crate) title: String,
    pub(crate) seconds: u32,
}

/// Album creation body. The edit screen never creates albums, the type only
/// completes the album store contract, so it is only built by tests.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewAlbum {
    pub(crate) title: String,
    pub(crate) artist: ArtistRef,
    pub(crate) release_date: String,
    pub(crate) cover: String,
}

/// Body for creating or renaming the title-only records, artists and genres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct TitleRecord {
    pub(crate) title: String,
}
