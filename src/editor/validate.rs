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

//! Input checks run before anything is sent to the catalog.

use std::num::IntErrorKind;

use chrono::NaiveDate;
use url::Url;

use crate::error::ValidationError;

const MAX_MINUTES: i64 = 99;
const MAX_SECONDS: i64 = 59;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims `input`, failing with `error` when nothing is left.
pub(crate) fn non_empty(input: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn minutes(input: &str) -> Result<u32, ValidationError> {
    bounded(
        input,
        MAX_MINUTES,
        [
            ValidationError::MinutesEmpty,
            ValidationError::MinutesNegative,
            ValidationError::MinutesTooLarge,
        ],
    )
}

pub(crate) fn seconds(input: &str) -> Result<u32, ValidationError> {
    bounded(
        input,
        MAX_SECONDS,
        [
            ValidationError::SecondsEmpty,
            ValidationError::SecondsNegative,
            ValidationError::SecondsTooLarge,
        ],
    )
}

/// Parses a whole number in `0..=max`.
///
/// Errors are given as `[empty or not a number, negative, too large]`.
fn bounded(input: &str, max: i64, [empty, negative, too_large]: [ValidationError; 3]) -> Result<u32, ValidationError> {
    let value = match input.trim().parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            return Err(match err.kind() {
                IntErrorKind::PosOverflow => too_large,
                IntErrorKind::NegOverflow => negative,
                _ => empty,
            });
        }
    };
    if value < 0 {
        Err(negative)
    } else if value > max {
        Err(too_large)
    } else {
        Ok(value as u32)
    }
}

pub(crate) fn disc_number(input: &str) -> Result<u32, ValidationError> {
    match input.trim().parse::<u32>() {
        Ok(disc_number) if disc_number >= 1 => Ok(disc_number),
        _ => Err(ValidationError::DiscNumberInvalid),
    }
}

/// A non-empty `YYYY-MM-DD` calendar date.
pub(crate) fn release_date(input: &str) -> Result<String, ValidationError> {
    let date = non_empty(input, ValidationError::ReleaseDateEmpty)?;
    NaiveDate::parse_from_str(&date, RELEASE_DATE_FORMAT)
        .map_err(|_| ValidationError::ReleaseDateInvalid(date.clone()))?;
    Ok(date)
}

/// A non-empty absolute address.
pub(crate) fn cover(input: &str) -> Result<String, ValidationError> {
    let cover = non_empty(input, ValidationError::CoverEmpty)?;
    Url::parse(&cover).map_err(|_| ValidationError::CoverInvalid(cover.clone()))?;
    Ok(cover)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_boundaries() {
        assert_eq!(minutes("0"), Ok(0));
        assert_eq!(minutes("99"), Ok(99));
        assert_eq!(minutes(" 42 "), Ok(42));
        assert_eq!(minutes("100"), Err(ValidationError::MinutesTooLarge));
        assert_eq!(minutes("-1"), Err(ValidationError::MinutesNegative));
        assert_eq!(minutes(""), Err(ValidationError::MinutesEmpty));
        assert_eq!(minutes("ten"), Err(ValidationError::MinutesEmpty));
        assert_eq!(minutes("1.5"), Err(ValidationError::MinutesEmpty));
    }

    #[test]
    fn test_overflowing_input_is_out_of_range() {
        assert_eq!(minutes("99999999999999999999"), Err(ValidationError::MinutesTooLarge));
        assert_eq!(seconds("99999999999999999999"), Err(ValidationError::SecondsTooLarge));
        assert_eq!(seconds("-99999999999999999999"), Err(ValidationError::SecondsNegative));
    }

    #[test]
    fn test_seconds_boundaries() {
        assert_eq!(seconds("59"), Ok(59));
        assert_eq!(seconds("60"), Err(ValidationError::SecondsTooLarge));
        assert_eq!(seconds("-5"), Err(ValidationError::SecondsNegative));
        assert_eq!(seconds("x"), Err(ValidationError::SecondsEmpty));
    }

    #[test]
    fn test_disc_number() {
        assert_eq!(disc_number("2"), Ok(2));
        assert_eq!(disc_number("0"), Err(ValidationError::DiscNumberInvalid));
        assert_eq!(disc_number("-1"), Err(ValidationError::DiscNumberInvalid));
        assert_eq!(disc_number(""), Err(ValidationError::DiscNumberInvalid));
    }

    #[test]
    fn test_release_date() {
        assert_eq!(release_date(" 2019-03-01 "), Ok("2019-03-01".to_string()));
        assert_eq!(release_date(""), Err(ValidationError::ReleaseDateEmpty));
        assert_eq!(
            release_date("2019-02-30"),
            Err(ValidationError::ReleaseDateInvalid("2019-02-30".to_string()))
        );
        assert!(release_date("01/03/2019").is_err());
    }

    #[test]
    fn test_cover() {
        assert!(cover("http://covers.example/loom.jpg").is_ok());
        assert_eq!(cover("   "), Err(ValidationError::CoverEmpty));
        assert!(matches!(cover("loom.jpg"), Err(ValidationError::CoverInvalid(_))));
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(
            non_empty("  Coda ", ValidationError::TrackTitleEmpty),
            Ok("Coda".to_string())
        );
        assert_eq!(
            non_empty(" ", ValidationError::TrackTitleEmpty),
            Err(ValidationError::TrackTitleEmpty)
        );
    }
}
