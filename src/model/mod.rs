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

//! Domain models and core data structures.
//!
//! This module defines the catalog entities as the REST API exchanges them:
//! Artists, Genres, Albums and their Tracks. Field names follow the API's
//! camelCase JSON.
//!
//! Artists and genres are associated with an album by title, not by id.

pub(crate) mod discs;
pub(crate) mod patch;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub(crate) use patch::{AlbumPatch, NewAlbum, NewTrack, TitleRecord, TrackPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Artist {
    pub(crate) id: i64,
    pub(crate) title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Genre {
    pub(crate) id: i64,
    pub(crate) title: String,
}

/// The artist an album belongs to, matched by title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ArtistRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i64>,
    pub(crate) title: String,
}

impl ArtistRef {
    pub(crate) fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Track {
    pub(crate) id: i64,
    pub(crate) album_id: i64,
    pub(crate) disc_number: u32,
    pub(crate) track_number: u32,
    pub(crate) title: String,
    pub(crate) seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Album {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) artist: ArtistRef,
    #[serde(default)]
    pub(crate) release_date: String,
    #[serde(default)]
    pub(crate) cover: String,
    #[serde(default)]
    pub(crate) rating: Option<Rating>,
    #[serde(default)]
    pub(crate) genres: Vec<Genre>,
    #[serde(default)]
    pub(crate) tracks: Vec<Track>,
}

/// An album rating between zero and five stars, in half star steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub(crate) struct Rating(f64);

impl Rating {
    pub(crate) const MAX: f64 = 5.0;
}

impl TryFrom<f64> for Rating {
    type Error = ValidationError;

    fn try_from(stars: f64) -> Result<Self, Self::Error> {
        let in_range = stars.is_finite() && (0.0..=Self::MAX).contains(&stars);
        if in_range && (stars * 2.0).fract() == 0.0 {
            Ok(Self(stars))
        } else {
            Err(ValidationError::InvalidRating(stars.to_string()))
        }
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
