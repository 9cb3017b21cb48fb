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

//! Track duration arithmetic and formatting.
//!
//! Track lengths are stored as a whole number of seconds. The edit screen
//! works with separate minute and second fields, so these helpers convert in
//! both directions and render lengths for display.

use crate::model::Track;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3600;

/// Whole minutes contained in a length.
pub(crate) fn seconds_to_minutes(total_seconds: u32) -> u32 {
    total_seconds / SECONDS_PER_MINUTE
}

/// Seconds left over after removing the whole minutes, in `0..=59`.
pub(crate) fn seconds_to_remainder(total_seconds: u32) -> u32 {
    total_seconds % SECONDS_PER_MINUTE
}

/// Combines separate minute and second fields into a total length.
///
/// The caller is responsible for keeping `seconds` within `0..=59`, input
/// fields are validated before they get here.
pub(crate) fn combine(minutes: u32, seconds: u32) -> u32 {
    minutes * SECONDS_PER_MINUTE + seconds
}

/// Formats a single track length as `M:SS`.
///
/// Minutes are not padded and never roll over into hours.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_track_length(169), "2:49");
/// assert_eq!(format_track_length(5), "0:05");
/// ```
pub(crate) fn format_track_length(total_seconds: u32) -> String {
    format!(
        "{}:{:02}",
        seconds_to_minutes(total_seconds),
        seconds_to_remainder(total_seconds)
    )
}

/// Formats a length, rolling over into `H:MM:SS` from one hour upwards.
pub(crate) fn format_length(total_seconds: u32) -> String {
    if total_seconds >= SECONDS_PER_HOUR {
        let hours = total_seconds / SECONDS_PER_HOUR;
        let rest = total_seconds % SECONDS_PER_HOUR;
        format!(
            "{}:{:02}:{:02}",
            hours,
            seconds_to_minutes(rest),
            seconds_to_remainder(rest)
        )
    } else {
        format_track_length(total_seconds)
    }
}

/// Formats the combined length of a set of tracks.
///
/// An empty set formats as `0:00`.
pub(crate) fn format_tracks_length<'a, I>(tracks: I) -> String
where
    I: IntoIterator<Item = &'a Track>,
{
    let total = tracks.into_iter().map(|track| track.seconds).sum();
    format_length(total)
}
