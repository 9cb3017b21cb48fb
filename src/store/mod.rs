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

//! Catalog store access.
//!
//! Every catalog entity is exposed by the API through the same five calls,
//! captured here by [`EntityStore`]. The edit screen talks to one store per
//! entity, bundled in [`Stores`].
//!
//! * [`rest`]: the HTTP implementation used by the application.
//! * `memory`: an in-process catalog used by the tests.

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod rest;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config::AppConfig,
    error::StoreError,
    model::{Album, AlbumPatch, Artist, Genre, NewAlbum, NewTrack, TitleRecord, Track, TrackPatch},
};

/// A catalog entity as served by the API.
pub(crate) trait Entity: DeserializeOwned + Send + 'static {
    /// Collection path below the API base address.
    const PATH: &'static str;

    /// Creation body, the entity without its id.
    type New: Serialize;

    /// Partial update body.
    type Patch: Serialize;
}

impl Entity for Album {
    const PATH: &'static str = "albums";
    type New = NewAlbum;
    type Patch = AlbumPatch;
}

impl Entity for Track {
    const PATH: &'static str = "tracks";
    type New = NewTrack;
    type Patch = TrackPatch;
}

impl Entity for Artist {
    const PATH: &'static str = "artists";
    type New = TitleRecord;
    type Patch = TitleRecord;
}

impl Entity for Genre {
    const PATH: &'static str = "genres";
    type New = TitleRecord;
    type Patch = TitleRecord;
}

pub(crate) trait EntityStore<E: Entity>: Send {
    fn get_all(&self) -> Result<Vec<E>, StoreError>;

    fn get_by_id(&self, id: i64) -> Result<E, StoreError>;

    fn create(&self, entity: &E::New) -> Result<E, StoreError>;

    /// Changes only the fields present in `changes`.
    fn patch(&self, id: i64, changes: &E::Patch) -> Result<E, StoreError>;

    /// Deletes an entity, returning what was removed.
    fn remove(&self, id: i64) -> Result<E, StoreError>;
}

/// One store per catalog entity.
pub(crate) struct Stores {
    pub(crate) albums: Box<dyn EntityStore<Album>>,
    pub(crate) tracks: Box<dyn EntityStore<Track>>,
    pub(crate) artists: Box<dyn EntityStore<Artist>>,
    pub(crate) genres: Box<dyn EntityStore<Genre>>,
}

impl Stores {
    /// Stores talking to the configured catalog API, sharing one HTTP agent.
    pub(crate) fn rest(config: &AppConfig) -> Self {
        let api = rest::RestApi::new(config);

        Self {
            albums: Box::new(api.store::<Album>()),
            tracks: Box::new(api.store::<Track>()),
            artists: Box::new(api.store::<Artist>()),
            genres: Box::new(api.store::<Genre>()),
        }
    }
}
