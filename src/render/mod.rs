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

//! Plain text listings printed by the prompt.

use std::fmt::Write;

use crate::{
    model::{
        Album, Genre,
        discs::{format_disc_lengths, group_by_disc, sorted_tracks},
    },
    util::format::{format_track_length, format_tracks_length},
};

/// The album header, track list by disc and the length summary.
///
/// Track ids are shown since the track commands refer to them.
pub(crate) fn album_listing(album: &Album, selectable_genres: &[&Genre]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "[{}] {} - {}", album.id, album.artist.title, album.title);
    let _ = writeln!(
        out,
        "Released: {}  Rating: {}",
        or_dash(&album.release_date),
        album.rating.map_or_else(|| "-".to_string(), |rating| rating.to_string())
    );
    let _ = writeln!(out, "Cover: {}", or_dash(&album.cover));

    let mut genres: Vec<&str> = album.genres.iter().map(|genre| genre.title.as_str()).collect();
    genres.sort_unstable();
    let available: Vec<&str> = selectable_genres.iter().map(|genre| genre.title.as_str()).collect();
    let _ = writeln!(
        out,
        "Genres: {}  (available: {})",
        or_dash(&genres.join(", ")),
        or_dash(&available.join(", "))
    );

    let discs = group_by_disc(sorted_tracks(&album.tracks));
    for (disc_number, tracks) in &discs {
        let _ = writeln!(out, "Disc {disc_number}");
        for track in tracks {
            let _ = writeln!(
                out,
                "  {:>6}  {:>2}. {}  {}",
                track.id,
                track.track_number,
                track.title,
                format_track_length(track.seconds)
            );
        }
    }

    let _ = writeln!(out, "Total: {}", format_tracks_length(&album.tracks));
    if discs.len() > 1 {
        let _ = writeln!(out, "{}", format_disc_lengths(&discs));
    }

    out.trim_end().to_string()
}

/// One line per album, ordered by artist then title.
pub(crate) fn album_index(albums: &[Album]) -> String {
    let mut sorted: Vec<&Album> = albums.iter().collect();
    sorted.sort_by(|a, b| {
        (a.artist.title.as_str(), a.title.as_str()).cmp(&(b.artist.title.as_str(), b.title.as_str()))
    });

    if sorted.is_empty() {
        return "No albums in the catalog".to_string();
    }

    sorted
        .iter()
        .map(|album| format!("{:>6}  {} - {}", album.id, album.artist.title, album.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}
