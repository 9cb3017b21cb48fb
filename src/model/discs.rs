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

//! Disc layout of an album's tracks.
//!
//! Tracks are positioned by a 1-based disc number and a 1-based track number
//! within that disc. Within each disc the track numbers form a dense `1..=N`
//! sequence, and reordering swaps positions so that stays true.

use std::collections::BTreeMap;

use crate::{model::Track, util::format::format_tracks_length};

/// Tracks keyed by disc number, discs in ascending order.
pub(crate) type DiscMap<'a> = BTreeMap<u32, Vec<&'a Track>>;

/// Groups tracks by disc number.
///
/// Tracks keep their source order within a disc, nothing is sorted here. Use
/// [`sorted_tracks`] first when the source order is not already disc order.
pub(crate) fn group_by_disc<'a, I>(tracks: I) -> DiscMap<'a>
where
    I: IntoIterator<Item = &'a Track>,
{
    let mut discs = DiscMap::new();
    for track in tracks {
        discs.entry(track.disc_number).or_default().push(track);
    }
    discs
}

/// Returns the tracks ordered by disc number, then track number.
pub(crate) fn sorted_tracks(tracks: &[Track]) -> Vec<&Track> {
    let mut sorted: Vec<&Track> = tracks.iter().collect();
    sorted.sort_by_key(|track| (track.disc_number, track.track_number));
    sorted
}

/// One `Disc <n>: <length>` line per disc.
pub(crate) fn format_disc_lengths(discs: &DiscMap<'_>) -> String {
    discs
        .iter()
        .map(|(disc_number, tracks)| {
            format!(
                "Disc {}: {}",
                disc_number,
                format_tracks_length(tracks.iter().copied())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The track number a track appended to `disc_number` would get.
pub(crate) fn next_track_number(tracks: &[Track], disc_number: u32) -> u32 {
    let on_disc = tracks
        .iter()
        .filter(|track| track.disc_number == disc_number)
        .count();
    on_disc as u32 + 1
}

/// New positions for the tracks after `removed` on its disc, each moved up
/// one place so the disc stays dense. Ordered so that every position written
/// is already free.
pub(crate) fn close_gap(tracks: &[Track], removed: &Track) -> Vec<Placement> {
    sorted_tracks(tracks)
        .into_iter()
        .filter(|track| {
            track.id != removed.id
                && track.disc_number == removed.disc_number
                && track.track_number > removed.track_number
        })
        .map(|track| Placement {
            track_id: track.id,
            disc_number: track.disc_number,
            track_number: track.track_number - 1,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) track_id: i64,
    pub(crate) disc_number: u32,
    pub(crate) track_number: u32,
}

/// A swap of two adjacent tracks.
///
/// `moved` is where the requested track ends up, `displaced` is where its
/// neighbor ends up. Both need writing for the discs to stay dense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrackMove {
    pub(crate) moved: Placement,
    pub(crate) displaced: Placement,
    pub(crate) from_disc: u32,
    pub(crate) from_track: u32,
}

impl TrackMove {
    pub(crate) fn crosses_disc(&self) -> bool {
        self.from_disc != self.moved.disc_number
    }
}

/// Plans moving a track one position up or down in disc order.
///
/// The track swaps positions with its neighbor. Moving the first track of a
/// disc up places it last on the previous disc, moving the last track of a
/// disc down places it first on the next disc. Returns `None` when the track
/// is unknown or already at that end of the album.
pub(crate) fn plan_move(tracks: &[Track], track_id: i64, direction: Direction) -> Option<TrackMove> {
    let ordered = sorted_tracks(tracks);
    let index = ordered.iter().position(|track| track.id == track_id)?;
    let neighbor_index = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index + 1,
    };

    let track = ordered[index];
    let neighbor = ordered.get(neighbor_index)?;

    Some(TrackMove {
        moved: Placement {
            track_id: track.id,
            disc_number: neighbor.disc_number,
            track_number: neighbor.track_number,
        },
        displaced: Placement {
            track_id: neighbor.id,
            disc_number: track.disc_number,
            track_number: track.track_number,
        },
        from_disc: track.disc_number,
        from_track: track.track_number,
    })
}
