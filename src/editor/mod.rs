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

//! Album edit screen controller.
//!
//! The [`AlbumEditor`] owns the only copy of the album being edited. Every
//! edit follows the same pipeline:
//!
//! 1. **Validate** the input locally. A [`ValidationError`] is reported as
//!    error feedback and nothing is sent.
//! 2. **Write** the change to the catalog. A conflict is reported as error
//!    feedback and the snapshot is left alone.
//! 3. **Refresh** the album from the catalog, replacing the snapshot whole.
//! 4. **Notify** the outcome on the event channel.
//!
//! Any other store failure is returned to the caller.

mod feedback;
mod validate;


use std::sync::{Arc, mpsc::Sender};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::{
    actions::events::{AppEvent, Route},
    error::{StoreError, ValidationError},
    model::{
        Album, AlbumPatch, Artist, ArtistRef, Genre, NewTrack, Rating, TitleRecord, Track,
        TrackPatch,
        discs::{self, Direction, TrackMove},
    },
    render,
    store::Stores,
    util::format::{combine, format_track_length, seconds_to_minutes, seconds_to_remainder},
};

pub(crate) use feedback::{FeedbackKind, FeedbackMessage};

/// Operations of the edit screen, one per user interaction.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EditCommand {
    Load(i64),
    ListAlbums,
    Show,

    EditArtist(String),
    EditTitle(String),
    EditReleaseDate(String),
    EditCover(String),
    EditGenres(Vec<String>),
    RateAlbum(Option<f64>),

    EditTrackTitle(i64, String),
    EditTrackMinutes(i64, String),
    EditTrackSeconds(i64, String),
    MoveTrack(i64, Direction),

    SetNewTrackDisc(String),
    SetNewTrackTitle(String),
    SetNewTrackMinutes(String),
    SetNewTrackSeconds(String),
    AddTrack,

    RequestTrackRemoval(i64),
    RequestAlbumRemoval,
    Confirm,
    Cancel,

    AddArtist(String),
    AddGenre(String),
}

/// A confirmation step in front of a destructive action.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Confirm<T> {
    Hidden,
    Shown(T),
}

impl<T> Default for Confirm<T> {
    fn default() -> Self {
        Self::Hidden
    }
}

impl<T> Confirm<T> {
    pub(crate) fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }
}

/// The add-track input row. Fields hold raw input until the track is added.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewTrackForm {
    pub(crate) disc: String,
    pub(crate) title: String,
    pub(crate) minutes: String,
    pub(crate) seconds: String,
}

impl NewTrackForm {
    fn for_disc(disc_number: u32) -> Self {
        Self {
            disc: disc_number.to_string(),
            title: String::new(),
            minutes: "0".to_string(),
            seconds: "0".to_string(),
        }
    }

    /// Clears everything but the disc, so consecutive tracks land on the same disc.
    fn reset(&mut self) {
        let disc = std::mem::take(&mut self.disc);
        *self = Self {
            disc,
            ..Self::for_disc(1)
        };
    }
}

impl Default for NewTrackForm {
    fn default() -> Self {
        Self::for_disc(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EditorState {
    pub(crate) album: Option<Arc<Album>>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) genres: Vec<Genre>,
    pub(crate) new_track: NewTrackForm,
    pub(crate) track_removal: Confirm<Track>,
    pub(crate) album_removal: Confirm<Arc<Album>>,
}

impl EditorState {
    /// Loaded genres the album does not have yet, matched by title.
    pub(crate) fn selectable_genres(&self) -> Vec<&Genre> {
        let Some(album) = &self.album else {
            return vec![];
        };
        self.genres
            .iter()
            .filter(|genre| !album.genres.iter().any(|g| g.title == genre.title))
            .collect()
    }

    /// The album's genres in title order.
    pub(crate) fn album_genres(&self) -> Vec<&Genre> {
        let Some(album) = &self.album else {
            return vec![];
        };
        let mut genres: Vec<&Genre> = album.genres.iter().collect();
        genres.sort_by(|a, b| a.title.cmp(&b.title));
        genres
    }
}

pub(crate) struct AlbumEditor {
    stores: Stores,
    state: EditorState,
    event_tx: Sender<AppEvent>,
}

impl AlbumEditor {
    pub(crate) fn new(stores: Stores, event_tx: Sender<AppEvent>) -> Self {
        Self {
            stores,
            state: EditorState::default(),
            event_tx,
        }
    }

    pub(crate) fn state(&self) -> &EditorState {
        &self.state
    }

    /// Runs one edit operation to completion.
    ///
    /// Validation failures are reported as error feedback. Store failures
    /// other than conflicts are returned.
    pub(crate) fn handle(&mut self, command: EditCommand) -> Result<()> {
        let result = match command {
            EditCommand::Load(album_id) => self.load(album_id),
            EditCommand::ListAlbums => self.list_albums(),
            EditCommand::Show => self.show(),

            EditCommand::EditArtist(artist) => self.edit_artist(&artist),
            EditCommand::EditTitle(title) => self.edit_title(&title),
            EditCommand::EditReleaseDate(date) => self.edit_release_date(&date),
            EditCommand::EditCover(cover) => self.edit_cover(&cover),
            EditCommand::EditGenres(genres) => self.edit_genres(&genres),
            EditCommand::RateAlbum(stars) => self.rate_album(stars),

            EditCommand::EditTrackTitle(id, title) => self.edit_track_title(id, &title),
            EditCommand::EditTrackMinutes(id, input) => self.edit_track_minutes(id, &input),
            EditCommand::EditTrackSeconds(id, input) => self.edit_track_seconds(id, &input),
            EditCommand::MoveTrack(id, Direction::Up) => self.move_track_up(id),
            EditCommand::MoveTrack(id, Direction::Down) => self.move_track_down(id),

            EditCommand::SetNewTrackDisc(input) => {
                self.state.new_track.disc = input;
                Ok(())
            }
            EditCommand::SetNewTrackTitle(input) => {
                self.state.new_track.title = input;
                Ok(())
            }
            EditCommand::SetNewTrackMinutes(input) => {
                self.state.new_track.minutes = input;
                Ok(())
            }
            EditCommand::SetNewTrackSeconds(input) => {
                self.state.new_track.seconds = input;
                Ok(())
            }
            EditCommand::AddTrack => self.add_track(),

            EditCommand::RequestTrackRemoval(id) => self.request_track_removal(id),
            EditCommand::RequestAlbumRemoval => self.request_album_removal(),
            EditCommand::Confirm => self.confirm(),
            EditCommand::Cancel => self.cancel(),

            EditCommand::AddArtist(title) => self.add_artist(&title),
            EditCommand::AddGenre(title) => self.add_genre(&title),
        };

        match result {
            Err(err) => match err.downcast::<ValidationError>() {
                Ok(invalid) => {
                    debug!("Rejected input: {invalid}");
                    self.notify(FeedbackMessage::error(invalid.to_string()))
                }
                Err(err) => Err(err),
            },
            ok => ok,
        }
    }

    fn notify(&self, message: FeedbackMessage) -> Result<()> {
        self.event_tx.send(AppEvent::Feedback(message))?;
        Ok(())
    }

    fn open_album(&self) -> Result<Arc<Album>, ValidationError> {
        self.state.album.clone().ok_or(ValidationError::NoAlbumLoaded)
    }

    fn find_track(album: &Album, track_id: i64) -> Result<Track, ValidationError> {
        album
            .tracks
            .iter()
            .find(|track| track.id == track_id)
            .cloned()
            .ok_or(ValidationError::UnknownTrack(track_id))
    }

    /// Replaces the snapshot with a fresh copy from the catalog.
    fn refresh(&mut self, album_id: i64) -> Result<Arc<Album>> {
        let album = self
            .stores
            .albums
            .get_by_id(album_id)
            .with_context(|| format!("Failed to fetch album {album_id}"))?;
        let album = Arc::new(album);

        self.state.album = Some(Arc::clone(&album));
        self.event_tx.send(AppEvent::AlbumChanged(Arc::clone(&album)))?;
        Ok(album)
    }

    /// Checks the outcome of a write.
    ///
    /// A conflict is reported as error feedback and gives `None`, any other
    /// failure is returned.
    fn write<T>(
        &self,
        result: Result<T, StoreError>,
        conflict_message: impl FnOnce() -> String,
    ) -> Result<Option<T>> {
        match result {
            Ok(written) => Ok(Some(written)),
            Err(StoreError::Conflict(url)) => {
                warn!("Catalog rejected a duplicate at {url}");
                self.notify(FeedbackMessage::error(conflict_message()))?;
                Ok(None)
            }
            Err(err) => Err(err).context("Catalog write failed"),
        }
    }

    fn patch_album(&mut self, album: &Album, patch: AlbumPatch, success: String) -> Result<()> {
        let written = self.write(self.stores.albums.patch(album.id, &patch), || {
            format!(
                "Album {} by {} conflicts with an album already in the catalog",
                patch.title.as_deref().unwrap_or(&album.title),
                patch
                    .artist
                    .as_ref()
                    .map_or(album.artist.title.as_str(), |artist| artist.title.as_str()),
            )
        })?;
        if written.is_none() {
            return Ok(());
        }

        self.refresh(album.id)?;
        info!("{success}");
        self.notify(FeedbackMessage::info(success))
    }

    fn patch_track(&mut self, album_id: i64, track: &Track, patch: TrackPatch, success: String) -> Result<()> {
        let written = self.write(self.stores.tracks.patch(track.id, &patch), || {
            format!("Track {} could not be changed, it conflicts with another track", track.title)
        })?;
        if written.is_none() {
            return Ok(());
        }

        self.refresh(album_id)?;
        info!("{success}");
        self.notify(FeedbackMessage::info(success))
    }

    /// Opens an album together with the artist and genre lists.
    pub(crate) fn load(&mut self, album_id: i64) -> Result<()> {
        let album = self
            .stores
            .albums
            .get_by_id(album_id)
            .with_context(|| format!("Failed to fetch album {album_id}"))?;
        let artists = self.stores.artists.get_all().context("Failed to fetch artists")?;
        let genres = self.stores.genres.get_all().context("Failed to fetch genres")?;

        let last_disc = album.tracks.iter().map(|track| track.disc_number).max();
        let album = Arc::new(album);
        info!("Opened album {} by {}", album.title, album.artist.title);

        self.state = EditorState {
            album: Some(Arc::clone(&album)),
            artists,
            genres,
            new_track: NewTrackForm::for_disc(last_disc.unwrap_or(1)),
            ..Default::default()
        };
        self.event_tx.send(AppEvent::AlbumChanged(album))?;
        self.show()
    }

    pub(crate) fn list_albums(&mut self) -> Result<()> {
        let albums = self.stores.albums.get_all().context("Failed to fetch albums")?;
        self.event_tx.send(AppEvent::ShowText(render::album_index(&albums)))?;
        Ok(())
    }

    pub(crate) fn show(&mut self) -> Result<()> {
        let album = self.open_album()?;
        let listing = render::album_listing(&album, &self.state.selectable_genres());
        self.event_tx.send(AppEvent::ShowText(listing))?;
        Ok(())
    }

    pub(crate) fn edit_artist(&mut self, artist: &str) -> Result<()> {
        let album = self.open_album()?;
        let artist = artist.trim();
        if !self.state.artists.iter().any(|known| known.title == artist) {
            return Err(ValidationError::UnknownArtist(artist.to_string()).into());
        }
        if artist == album.artist.title {
            return Ok(());
        }

        let patch = AlbumPatch {
            artist: Some(ArtistRef::titled(artist)),
            ..Default::default()
        };
        let success = format!("Artist changed from {} to {}", album.artist.title, artist);
        self.patch_album(&album, patch, success)
    }

    pub(crate) fn edit_title(&mut self, title: &str) -> Result<()> {
        let album = self.open_album()?;
        let title = validate::non_empty(title, ValidationError::AlbumTitleEmpty)?;
        if title == album.title {
            return Ok(());
        }

        let success = format!("Album title changed from {} to {}", album.title, title);
        let patch = AlbumPatch {
            title: Some(title),
            ..Default::default()
        };
        self.patch_album(&album, patch, success)
    }

    pub(crate) fn edit_release_date(&mut self, release_date: &str) -> Result<()> {
        let album = self.open_album()?;
        let release_date = validate::release_date(release_date)?;
        if release_date == album.release_date {
            return Ok(());
        }

        let success = format!(
            "Release date changed from {} to {}",
            or_none(&album.release_date),
            release_date
        );
        let patch = AlbumPatch {
            release_date: Some(release_date),
            ..Default::default()
        };
        self.patch_album(&album, patch, success)
    }

    pub(crate) fn edit_cover(&mut self, cover: &str) -> Result<()> {
        let album = self.open_album()?;
        let cover = validate::cover(cover)?;
        if cover == album.cover {
            return Ok(());
        }

        let success = format!(
            "Cover changed from {} to {}",
            or_none(file_name(&album.cover)),
            file_name(&cover)
        );
        let patch = AlbumPatch {
            cover: Some(cover),
            ..Default::default()
        };
        self.patch_album(&album, patch, success)
    }

    /// Replaces the album's genre set with the named genres.
    pub(crate) fn edit_genres(&mut self, titles: &[String]) -> Result<()> {
        let album = self.open_album()?;

        let mut genres: Vec<Genre> = Vec::with_capacity(titles.len());
        for title in titles.iter().map(|title| title.trim()) {
            let genre = self
                .state
                .genres
                .iter()
                .find(|genre| genre.title == title)
                .ok_or_else(|| ValidationError::UnknownGenre(title.to_string()))?;
            if !genres.iter().any(|chosen| chosen.title == genre.title) {
                genres.push(genre.clone());
            }
        }
        genres.sort_by(|a, b| a.title.cmp(&b.title));

        let previous = genre_titles(self.state.album_genres());
        let chosen = genre_titles(genres.iter());
        if previous == chosen {
            return Ok(());
        }

        let success = format!(
            "Genres changed from {} to {}",
            or_none(&previous),
            or_none(&chosen)
        );
        let patch = AlbumPatch {
            genres: Some(genres),
            ..Default::default()
        };
        self.patch_album(&album, patch, success)
    }

    /// Sets the rating, `None` clears it.
    pub(crate) fn rate_album(&mut self, stars: Option<f64>) -> Result<()> {
        let album = self.open_album()?;
        let rating = stars.map(Rating::try_from).transpose()?;
        if rating == album.rating {
            return Ok(());
        }

        let success = format!(
            "Rating changed from {} to {}",
            rating_text(album.rating),
            rating_text(rating)
        );
        let patch = AlbumPatch {
            rating: Some(rating),
            ..Default::default()
        };
        self.patch_album(&album, patch, success)
    }

    pub(crate) fn edit_track_title(&mut self, track_id: i64, title: &str) -> Result<()> {
        let album = self.open_album()?;
        let track = Self::find_track(&album, track_id)?;
        let title = validate::non_empty(title, ValidationError::TrackTitleEmpty)?;
        if title == track.title {
            return Ok(());
        }

        let success = format!("Track title changed from {} to {}", track.title, title);
        let patch = TrackPatch {
            title: Some(title),
            ..Default::default()
        };
        self.patch_track(album.id, &track, patch, success)
    }

    pub(crate) fn edit_track_minutes(&mut self, track_id: i64, input: &str) -> Result<()> {
        let album = self.open_album()?;
        let track = Self::find_track(&album, track_id)?;
        let minutes = validate::minutes(input)?;
        if minutes == seconds_to_minutes(track.seconds) {
            return Ok(());
        }

        let seconds = combine(minutes, seconds_to_remainder(track.seconds));
        self.set_track_length(album.id, &track, seconds)
    }

    pub(crate) fn edit_track_seconds(&mut self, track_id: i64, input: &str) -> Result<()> {
        let album = self.open_album()?;
        let track = Self::find_track(&album, track_id)?;
        let remainder = validate::seconds(input)?;
        if remainder == seconds_to_remainder(track.seconds) {
            return Ok(());
        }

        let seconds = combine(seconds_to_minutes(track.seconds), remainder);
        self.set_track_length(album.id, &track, seconds)
    }

    fn set_track_length(&mut self, album_id: i64, track: &Track, seconds: u32) -> Result<()> {
        let success = format!(
            "Track length changed from {} to {}",
            format_track_length(track.seconds),
            format_track_length(seconds)
        );
        let patch = TrackPatch {
            seconds: Some(seconds),
            ..Default::default()
        };
        self.patch_track(album_id, track, patch, success)
    }

    pub(crate) fn move_track_up(&mut self, track_id: i64) -> Result<()> {
        self.move_track(track_id, Direction::Up)
    }

    pub(crate) fn move_track_down(&mut self, track_id: i64) -> Result<()> {
        self.move_track(track_id, Direction::Down)
    }

    /// Swaps a track with its neighbor, writing both new positions.
    fn move_track(&mut self, track_id: i64, direction: Direction) -> Result<()> {
        let album = self.open_album()?;
        let track = Self::find_track(&album, track_id)?;
        let Some(plan) = discs::plan_move(&album.tracks, track_id, direction) else {
            debug!("Track {track_id} is already at the {direction:?} end of the album");
            return Ok(());
        };

        let conflict = || format!("Track {} could not be moved, the position is taken", track.title);
        let moved = TrackPatch::position(plan.moved.disc_number, plan.moved.track_number);
        if self
            .write(self.stores.tracks.patch(plan.moved.track_id, &moved), conflict)?
            .is_none()
        {
            return Ok(());
        }

        let displaced = TrackPatch::position(plan.displaced.disc_number, plan.displaced.track_number);
        if let Err(err) = self.stores.tracks.patch(plan.displaced.track_id, &displaced) {
            // Put the moved track back, the catalog then matches the snapshot again.
            let restore = TrackPatch::position(plan.from_disc, plan.from_track);
            self.stores
                .tracks
                .patch(plan.moved.track_id, &restore)
                .with_context(|| format!("Failed to restore track {} after a failed move", track.title))?;
            return self.write(Err::<Track, _>(err), conflict).map(|_| ());
        }

        self.refresh(album.id)?;
        let success = move_message(&plan);
        info!("{success}");
        self.notify(FeedbackMessage::info(success))
    }

    /// Adds the track described by the new-track form to the end of its disc.
    pub(crate) fn add_track(&mut self) -> Result<()> {
        let album = self.open_album()?;
        let form = &self.state.new_track;
        let disc_number = validate::disc_number(&form.disc)?;
        let title = validate::non_empty(&form.title, ValidationError::TrackTitleEmpty)?;
        let minutes = validate::minutes(&form.minutes)?;
        let seconds = validate::seconds(&form.seconds)?;

        let new_track = NewTrack {
            album_id: album.id,
            disc_number,
            track_number: discs::next_track_number(&album.tracks, disc_number),
            title,
            seconds: combine(minutes, seconds),
        };
        let created = self.write(self.stores.tracks.create(&new_track), || {
            format!("Track {} could not be added, the position is taken", new_track.title)
        })?;
        if created.is_none() {
            return Ok(());
        }

        self.refresh(album.id)?;
        self.state.new_track.reset();

        let success = format!("Track {} added", new_track.title);
        info!("{success}");
        self.notify(FeedbackMessage::info(success))
    }

    pub(crate) fn request_track_removal(&mut self, track_id: i64) -> Result<()> {
        let album = self.open_album()?;
        let track = Self::find_track(&album, track_id)?;
        let prompt = format!("Are you sure you want to remove track {}?", track.title);

        self.state.album_removal = Confirm::Hidden;
        self.state.track_removal = Confirm::Shown(track);
        self.event_tx.send(AppEvent::ConfirmRequested(prompt))?;
        Ok(())
    }

    pub(crate) fn request_album_removal(&mut self) -> Result<()> {
        let album = self.open_album()?;
        let prompt = format!(
            "Are you sure you want to remove album {} by {}?",
            album.title, album.artist.title
        );

        self.state.track_removal = Confirm::Hidden;
        self.state.album_removal = Confirm::Shown(album);
        self.event_tx.send(AppEvent::ConfirmRequested(prompt))?;
        Ok(())
    }

    /// Carries out whichever removal is waiting for confirmation.
    pub(crate) fn confirm(&mut self) -> Result<()> {
        if self.state.album_removal.is_shown() {
            self.confirm_album_removal()
        } else if self.state.track_removal.is_shown() {
            self.confirm_track_removal()
        } else {
            Err(ValidationError::NothingToConfirm.into())
        }
    }

    pub(crate) fn cancel(&mut self) -> Result<()> {
        if self.state.album_removal.is_shown() || self.state.track_removal.is_shown() {
            debug!("Removal cancelled");
        }
        self.state.album_removal = Confirm::Hidden;
        self.state.track_removal = Confirm::Hidden;
        Ok(())
    }

    /// Removes the track, then moves the tracks after it on its disc up one
    /// place each.
    fn confirm_track_removal(&mut self) -> Result<()> {
        let Confirm::Shown(track) = std::mem::take(&mut self.state.track_removal) else {
            return Ok(());
        };
        let album = self.open_album()?;

        let removed = self.write(self.stores.tracks.remove(track.id), || {
            format!("Track {} could not be removed", track.title)
        })?;
        if removed.is_none() {
            return Ok(());
        }

        let mut renumbering = Ok(());
        for placement in discs::close_gap(&album.tracks, &track) {
            let patch = TrackPatch {
                track_number: Some(placement.track_number),
                ..Default::default()
            };
            let result = self.write(self.stores.tracks.patch(placement.track_id, &patch), || {
                let title = Self::find_track(&album, placement.track_id)
                    .map_or_else(|_| placement.track_id.to_string(), |moved| moved.title);
                format!("Track {title} could not be renumbered, the position is taken")
            });
            match result {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(err) => {
                    renumbering = Err(err);
                    break;
                }
            }
        }

        // The track is gone whatever happened to the renumbering.
        self.refresh(album.id)?;
        renumbering?;
        let success = format!("Track {} removed", track.title);
        info!("{success}");
        self.notify(FeedbackMessage::info(success))
    }

    fn confirm_album_removal(&mut self) -> Result<()> {
        let Confirm::Shown(album) = std::mem::take(&mut self.state.album_removal) else {
            return Ok(());
        };

        let removed = self.write(self.stores.albums.remove(album.id), || {
            format!("Album {} by {} could not be removed", album.title, album.artist.title)
        })?;
        if removed.is_none() {
            return Ok(());
        }

        self.state.album = None;
        self.state.track_removal = Confirm::Hidden;

        let success = format!("Album {} by {} removed", album.title, album.artist.title);
        info!("{success}");
        self.notify(FeedbackMessage::info(success))?;
        self.event_tx.send(AppEvent::Navigate(Route::AlbumList))?;
        Ok(())
    }

    pub(crate) fn add_artist(&mut self, title: &str) -> Result<()> {
        let title = validate::non_empty(title, ValidationError::ArtistTitleEmpty)?;
        let record = TitleRecord { title };
        let created = self.write(self.stores.artists.create(&record), || {
            format!("Artist {} already exists", record.title)
        })?;
        if created.is_none() {
            return Ok(());
        }

        self.state.artists = self.stores.artists.get_all().context("Failed to fetch artists")?;
        self.notify(FeedbackMessage::info(format!("Artist {} added", record.title)))
    }

    pub(crate) fn add_genre(&mut self, title: &str) -> Result<()> {
        let title = validate::non_empty(title, ValidationError::GenreTitleEmpty)?;
        let record = TitleRecord { title };
        let created = self.write(self.stores.genres.create(&record), || {
            format!("Genre {} already exists", record.title)
        })?;
        if created.is_none() {
            return Ok(());
        }

        self.state.genres = self.stores.genres.get_all().context("Failed to fetch genres")?;
        self.notify(FeedbackMessage::info(format!("Genre {} added", record.title)))
    }
}

fn move_message(plan: &TrackMove) -> String {
    if plan.crosses_disc() {
        format!(
            "Track moved from disc {} track {} to disc {} track {}",
            plan.from_disc, plan.from_track, plan.moved.disc_number, plan.moved.track_number
        )
    } else {
        format!(
            "Track number changed from {} to {}",
            plan.from_track, plan.moved.track_number
        )
    }
}

/// The last path segment of an address.
fn file_name(address: &str) -> &str {
    address.rsplit('/').next().unwrap_or(address)
}

fn genre_titles<'a>(genres: impl IntoIterator<Item = &'a Genre>) -> String {
    genres
        .into_iter()
        .map(|genre| genre.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn rating_text(rating: Option<Rating>) -> String {
    rating.map_or_else(|| "none".to_string(), |rating| rating.to_string())
}

fn or_none(text: &str) -> &str {
    if text.is_empty() { "none" } else { text }
}
