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

//! In-process catalog behaving like the REST API.
//!
//! Albums are served with their tracks attached, duplicate album titles per
//! artist and duplicate artist/genre titles are rejected as conflicts. Every
//! call is recorded as `METHOD path` so tests can assert which requests were
//! made.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::StoreError,
    model::{
        Album, AlbumPatch, Artist, ArtistRef, Genre, NewAlbum, NewTrack, TitleRecord, Track,
        TrackPatch,
    },
    store::{EntityStore, Stores},
};

#[derive(Default)]
struct CatalogData {
    albums: Vec<Album>,
    tracks: Vec<Track>,
    artists: Vec<Artist>,
    genres: Vec<Genre>,
    next_id: i64,
    calls: Vec<String>,
    fail_after: Option<usize>,
}

impl CatalogData {
    fn record(&mut self, call: String) {
        self.calls.push(call);
    }

    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Fails the write when a test asked for a conflict.
    fn check_write(&mut self, path: &str) -> Result<(), StoreError> {
        match self.fail_after {
            Some(0) => {
                self.fail_after = None;
                Err(StoreError::Conflict(path.to_string()))
            }
            Some(remaining) => {
                self.fail_after = Some(remaining - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn album_with_tracks(&self, id: i64, path: &str) -> Result<Album, StoreError> {
        let mut album = self
            .albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(|| not_found(path))?;
        album.tracks = self
            .tracks
            .iter()
            .filter(|track| track.album_id == id)
            .cloned()
            .collect();
        Ok(album)
    }
}

fn not_found(path: &str) -> StoreError {
    StoreError::Status {
        url: path.to_string(),
        status: 404,
    }
}

#[derive(Clone)]
pub(crate) struct MemoryCatalog {
    data: Arc<Mutex<CatalogData>>,
}

impl MemoryCatalog {
    pub(crate) fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(CatalogData {
                next_id: 1000,
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogData> {
        self.data.lock().unwrap()
    }

    pub(crate) fn stores(&self) -> Stores {
        Stores {
            albums: Box::new(self.clone()),
            tracks: Box::new(self.clone()),
            artists: Box::new(self.clone()),
            genres: Box::new(self.clone()),
        }
    }

    pub(crate) fn insert_artist(&self, id: i64, title: &str) {
        self.lock().artists.push(Artist {
            id,
            title: title.to_string(),
        });
    }

    pub(crate) fn insert_genre(&self, id: i64, title: &str) {
        self.lock().genres.push(Genre {
            id,
            title: title.to_string(),
        });
    }

    /// Inserts an album, its tracks go into the track table.
    pub(crate) fn insert_album(&self, mut album: Album) {
        let mut data = self.lock();
        data.tracks.append(&mut album.tracks);
        data.albums.push(album);
    }

    pub(crate) fn album(&self, id: i64) -> Album {
        self.lock().album_with_tracks(id, "albums").unwrap()
    }

    pub(crate) fn track(&self, id: i64) -> Option<Track> {
        self.lock().tracks.iter().find(|track| track.id == id).cloned()
    }

    pub(crate) fn album_count(&self) -> usize {
        self.lock().albums.len()
    }

    pub(crate) fn artists(&self) -> Vec<Artist> {
        self.lock().artists.clone()
    }

    pub(crate) fn fail_next_write(&self) {
        self.fail_write_after(0);
    }

    /// Lets `writes` writes through, then rejects the next one as a conflict.
    pub(crate) fn fail_write_after(&self, writes: usize) {
        self.lock().fail_after = Some(writes);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.lock().calls.clear();
    }
}

impl EntityStore<Album> for MemoryCatalog {
    fn get_all(&self) -> Result<Vec<Album>, StoreError> {
        let mut data = self.lock();
        data.record("GET albums".to_string());
        let ids: Vec<i64> = data.albums.iter().map(|album| album.id).collect();
        ids.into_iter()
            .map(|id| data.album_with_tracks(id, "albums"))
            .collect()
    }

    fn get_by_id(&self, id: i64) -> Result<Album, StoreError> {
        let path = format!("albums/{id}");
        let mut data = self.lock();
        data.record(format!("GET {path}"));
        data.album_with_tracks(id, &path)
    }

    fn create(&self, entity: &NewAlbum) -> Result<Album, StoreError> {
        let mut data = self.lock();
        data.record("POST albums".to_string());
        data.check_write("albums")?;
        let duplicate = data.albums.iter().any(|album| {
            album.artist.title == entity.artist.title && album.title == entity.title
        });
        if duplicate {
            return Err(StoreError::Conflict("albums".to_string()));
        }

        let album = Album {
            id: data.allocate_id(),
            title: entity.title.clone(),
            artist: entity.artist.clone(),
            release_date: entity.release_date.clone(),
            cover: entity.cover.clone(),
            rating: None,
            genres: vec![],
            tracks: vec![],
        };
        data.albums.push(album.clone());
        Ok(album)
    }

    fn patch(&self, id: i64, changes: &AlbumPatch) -> Result<Album, StoreError> {
        let path = format!("albums/{id}");
        let mut data = self.lock();
        data.record(format!("PATCH {path}"));
        data.check_write(&path)?;

        let current = data.album_with_tracks(id, &path)?;
        let artist = match &changes.artist {
            Some(artist) => ArtistRef {
                id: data
                    .artists
                    .iter()
                    .find(|known| known.title == artist.title)
                    .map(|known| known.id),
                title: artist.title.clone(),
            },
            None => current.artist.clone(),
        };
        let title = changes.title.clone().unwrap_or(current.title.clone());
        let duplicate = data.albums.iter().any(|album| {
            album.id != id && album.artist.title == artist.title && album.title == title
        });
        if duplicate {
            return Err(StoreError::Conflict(path));
        }

        let album = data
            .albums
            .iter_mut()
            .find(|album| album.id == id)
            .ok_or_else(|| not_found(&path))?;
        album.artist = artist;
        album.title = title;
        if let Some(release_date) = &changes.release_date {
            album.release_date = release_date.clone();
        }
        if let Some(cover) = &changes.cover {
            album.cover = cover.clone();
        }
        if let Some(rating) = changes.rating {
            album.rating = rating;
        }
        if let Some(genres) = &changes.genres {
            album.genres = genres.clone();
        }

        data.album_with_tracks(id, &path)
    }

    fn remove(&self, id: i64) -> Result<Album, StoreError> {
        let path = format!("albums/{id}");
        let mut data = self.lock();
        data.record(format!("DELETE {path}"));
        data.check_write(&path)?;

        let album = data.album_with_tracks(id, &path)?;
        data.albums.retain(|album| album.id != id);
        data.tracks.retain(|track| track.album_id != id);
        Ok(album)
    }
}

impl EntityStore<Track> for MemoryCatalog {
    fn get_all(&self) -> Result<Vec<Track>, StoreError> {
        let mut data = self.lock();
        data.record("GET tracks".to_string());
        Ok(data.tracks.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Track, StoreError> {
        let path = format!("tracks/{id}");
        let mut data = self.lock();
        data.record(format!("GET {path}"));
        data.tracks
            .iter()
            .find(|track| track.id == id)
            .cloned()
            .ok_or_else(|| not_found(&path))
    }

    fn create(&self, entity: &NewTrack) -> Result<Track, StoreError> {
        let mut data = self.lock();
        data.record("POST tracks".to_string());
        data.check_write("tracks")?;

        let track = Track {
            id: data.allocate_id(),
            album_id: entity.album_id,
            disc_number: entity.disc_number,
            track_number: entity.track_number,
            title: entity.title.clone(),
            seconds: entity.seconds,
        };
        data.tracks.push(track.clone());
        Ok(track)
    }

    fn patch(&self, id: i64, changes: &TrackPatch) -> Result<Track, StoreError> {
        let path = format!("tracks/{id}");
        let mut data = self.lock();
        data.record(format!("PATCH {path}"));
        data.check_write(&path)?;

        let track = data
            .tracks
            .iter_mut()
            .find(|track| track.id == id)
            .ok_or_else(|| not_found(&path))?;
        if let Some(title) = &changes.title {
            track.title = title.clone();
        }
        if let Some(seconds) = changes.seconds {
            track.seconds = seconds;
        }
        if let Some(disc_number) = changes.disc_number {
            track.disc_number = disc_number;
        }
        if let Some(track_number) = changes.track_number {
            track.track_number = track_number;
        }
        Ok(track.clone())
    }

    fn remove(&self, id: i64) -> Result<Track, StoreError> {
        let path = format!("tracks/{id}");
        let mut data = self.lock();
        data.record(format!("DELETE {path}"));
        data.check_write(&path)?;

        let index = data
            .tracks
            .iter()
            .position(|track| track.id == id)
            .ok_or_else(|| not_found(&path))?;
        Ok(data.tracks.remove(index))
    }
}

/// Artist and genre collections are both plain `{ id, title }` records.
macro_rules! title_record_store {
    ($entity:ident, $field:ident, $path:literal) => {
        impl EntityStore<$entity> for MemoryCatalog {
            fn get_all(&self) -> Result<Vec<$entity>, StoreError> {
                let mut data = self.lock();
                data.record(format!("GET {}", $path));
                Ok(data.$field.clone())
            }

            fn get_by_id(&self, id: i64) -> Result<$entity, StoreError> {
                let path = format!("{}/{}", $path, id);
                let mut data = self.lock();
                data.record(format!("GET {path}"));
                data.$field
                    .iter()
                    .find(|record| record.id == id)
                    .cloned()
                    .ok_or_else(|| not_found(&path))
            }

            fn create(&self, entity: &TitleRecord) -> Result<$entity, StoreError> {
                let mut data = self.lock();
                data.record(format!("POST {}", $path));
                data.check_write($path)?;
                if data.$field.iter().any(|record| record.title == entity.title) {
                    return Err(StoreError::Conflict($path.to_string()));
                }

                let record = $entity {
                    id: data.allocate_id(),
                    title: entity.title.clone(),
                };
                data.$field.push(record.clone());
                Ok(record)
            }

            fn patch(&self, id: i64, changes: &TitleRecord) -> Result<$entity, StoreError> {
                let path = format!("{}/{}", $path, id);
                let mut data = self.lock();
                data.record(format!("PATCH {path}"));
                data.check_write(&path)?;

                let record = data
                    .$field
                    .iter_mut()
                    .find(|record| record.id == id)
                    .ok_or_else(|| not_found(&path))?;
                record.title = changes.title.clone();
                Ok(record.clone())
            }

            fn remove(&self, id: i64) -> Result<$entity, StoreError> {
                let path = format!("{}/{}", $path, id);
                let mut data = self.lock();
                data.record(format!("DELETE {path}"));
                data.check_write(&path)?;

                let index = data
                    .$field
                    .iter()
                    .position(|record| record.id == id)
                    .ok_or_else(|| not_found(&path))?;
                Ok(data.$field.remove(index))
            }
        }
    };
}

title_record_store!(Artist, artists, "artists");
title_record_store!(Genre, genres, "genres");

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MemoryCatalog {
        let catalog = MemoryCatalog::new();
        catalog.insert_artist(1, "Lumen");
        catalog.insert_album(Album {
            id: 10,
            title: "First".to_string(),
            artist: ArtistRef::titled("Lumen"),
            release_date: "2019-03-01".to_string(),
            cover: String::new(),
            rating: None,
            genres: vec![],
            tracks: vec![],
        });
        catalog
    }

    #[test]
    fn test_album_create_rejects_duplicate_title_for_artist() {
        let catalog = catalog();
        let albums: &dyn EntityStore<Album> = &catalog;
        let new_album = NewAlbum {
            title: "First".to_string(),
            artist: ArtistRef::titled("Lumen"),
            release_date: "2020-01-01".to_string(),
            cover: String::new(),
        };

        assert!(matches!(albums.create(&new_album), Err(StoreError::Conflict(_))));

        let other = NewAlbum {
            title: "Second".to_string(),
            ..new_album
        };
        let created = albums.create(&other).unwrap();
        assert_eq!(albums.get_by_id(created.id).unwrap().title, "Second");
        assert_eq!(catalog.album_count(), 2);
    }

    #[test]
    fn test_album_is_served_with_its_tracks() {
        let catalog = catalog();
        let tracks: &dyn EntityStore<Track> = &catalog;
        tracks
            .create(&NewTrack {
                album_id: 10,
                disc_number: 1,
                track_number: 1,
                title: "Opening".to_string(),
                seconds: 60,
            })
            .unwrap();

        assert_eq!(catalog.album(10).tracks.len(), 1);
        assert_eq!(catalog.calls(), vec!["POST tracks".to_string()]);
    }

    #[test]
    fn test_forced_conflict_only_affects_next_write() {
        let catalog = catalog();
        let artists: &dyn EntityStore<Artist> = &catalog;
        catalog.fail_next_write();

        let renamed = TitleRecord {
            title: "Lumen Trio".to_string(),
        };
        assert!(matches!(artists.patch(1, &renamed), Err(StoreError::Conflict(_))));
        assert_eq!(artists.patch(1, &renamed).unwrap().title, "Lumen Trio");
        assert_eq!(artists.remove(1).unwrap().title, "Lumen Trio");
        assert!(artists.get_all().unwrap().is_empty());
    }
}
