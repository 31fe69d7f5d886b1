// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Display formatting for byte counts and timestamps.

use std::fmt;

use anyhow::{Context, Result};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::utils::mime::MEGABYTE;

/// Default number of decimals used by [`format_bytes`] callers.
pub const DEFAULT_DECIMALS: i32 = 2;

/// Precision beyond this is meaningless for an `f64`.
pub const MAX_DECIMALS: i32 = 15;

const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Index of the largest power of 1024 that does not exceed `bytes`.
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut value = bytes;
    while value >= 1024 && index < UNITS.len() - 1 {
        value /= 1024;
        index += 1;
    }
    index
}

/// Scale a byte count to its largest binary unit and round it.
///
/// Returns the bare number; pair it with [`byte_unit`] to get a label.
/// `decimals` is clamped to `0..=MAX_DECIMALS`.
///
/// # Examples
///
/// ```rust
/// use filekit::utils::format::format_bytes;
/// assert_eq!(format_bytes(1536, 1), 1.5);
/// assert_eq!(format_bytes(0, 2), 0.0);
/// ```
pub fn format_bytes(bytes: u64, decimals: i32) -> f64 {
    if bytes == 0 {
        return 0.0;
    }
    let index = unit_index(bytes);
    let scaled = bytes as f64 / 1024f64.powi(index as i32);
    let factor = 10f64.powi(decimals.clamp(0, MAX_DECIMALS));
    (scaled * factor).round() / factor
}

/// Unit label matching the scale [`format_bytes`] picks for `bytes`.
pub fn byte_unit(bytes: u64) -> &'static str {
    UNITS[unit_index(bytes)]
}

/// Human-readable size such as `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    format!(
        "{} {}",
        format_bytes(bytes, DEFAULT_DECIMALS),
        byte_unit(bytes)
    )
}

/// Render a byte limit in megabytes the way error messages show it
/// (`20`, `0.5`, never `20.0`).
pub fn format_megabytes(bytes: u64) -> String {
    format!("{}", bytes as f64 / MEGABYTE as f64)
}

/// Byte count that displays as megabytes via [`format_megabytes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Megabytes(pub u64);

impl fmt::Display for Megabytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_megabytes(self.0))
    }
}

/// Parse an ISO-8601 timestamp or date into its UTC calendar date.
fn parse_date(value: &str) -> Result<Date> {
    if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(datetime.to_offset(UtcOffset::UTC).date());
    }
    if let Ok(datetime) = PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"),
    ) {
        return Ok(datetime.date());
    }
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("Unrecognized date: {value:?}"))
}

/// Format an ISO timestamp for display.
///
/// Compact mode yields `M/D/YY` (for narrow screens); otherwise `D Mon YYYY`.
/// Empty input yields an empty string.
///
/// # Errors
///
/// Returns an error when the input is neither an RFC 3339 timestamp nor a
/// `YYYY-MM-DD` date.
///
/// # Examples
///
/// ```rust
/// use filekit::utils::format::format_date;
/// assert_eq!(format_date("2020-01-01T00:00:00.000Z", false).unwrap(), "1 Jan 2020");
/// assert_eq!(format_date("2020-01-01T00:00:00.000Z", true).unwrap(), "1/1/20");
/// ```
pub fn format_date(value: &str, compact: bool) -> Result<String> {
    if value.is_empty() {
        return Ok(String::new());
    }

    let date = parse_date(value)?;
    let month = date.month() as u8;

    if compact {
        return Ok(format!(
            "{}/{}/{:02}",
            month,
            date.day(),
            date.year().rem_euclid(100)
        ));
    }

    Ok(format!(
        "{} {} {}",
        date.day(),
        MONTHS[usize::from(month) - 1],
        date.year()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Zero stays exactly zero instead of producing a unit string.
    #[test]
    fn format_bytes_returns_zero_for_zero() {
        assert_eq!(format_bytes(0, DEFAULT_DECIMALS), 0.0);
    }

    // Values scale to the largest 1024 power and round to the requested places.
    #[test]
    fn format_bytes_scales_and_rounds() {
        assert_eq!(format_bytes(1024, DEFAULT_DECIMALS), 1.0);
        assert_eq!(format_bytes(1536, 1), 1.5);
        assert_eq!(format_bytes(1000, DEFAULT_DECIMALS), 1000.0);
        assert_eq!(format_bytes(1_572_864, 0), 2.0);
        assert_eq!(format_bytes(1_234_567, 2), 1.18);
        assert_eq!(format_bytes(1_073_741_824, DEFAULT_DECIMALS), 1.0);
    }

    // Negative precision behaves like zero decimals.
    #[test]
    fn format_bytes_clamps_negative_decimals() {
        assert_eq!(format_bytes(1536, -3), 2.0);
    }

    // Huge precision is capped instead of overflowing to NaN.
    #[test]
    fn format_bytes_caps_large_decimals() {
        assert_eq!(format_bytes(1536, 400), 1.5);
        assert_eq!(format_bytes(1_234_567, i32::MAX), format_bytes(1_234_567, MAX_DECIMALS));
    }

    // Unit labels follow the same scale as the number.
    #[test]
    fn byte_unit_and_format_size_agree() {
        assert_eq!(byte_unit(512), "B");
        assert_eq!(byte_unit(2048), "KB");
        assert_eq!(byte_unit(5 * MEGABYTE), "MB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(0), "0 B");
    }

    // Megabyte limits print without a trailing `.0`.
    #[test]
    fn format_megabytes_prints_plain_numbers() {
        assert_eq!(format_megabytes(20 * MEGABYTE), "20");
        assert_eq!(format_megabytes(MEGABYTE / 2), "0.5");
        assert_eq!(Megabytes(25 * MEGABYTE).to_string(), "25");
    }

    // Empty input is not an error.
    #[test]
    fn format_date_returns_empty_for_empty_input() {
        assert_eq!(format_date("", false).unwrap(), "");
        assert_eq!(format_date("", true).unwrap(), "");
    }

    // Full mode uses day, English month abbreviation and four-digit year.
    #[test]
    fn format_date_full_mode() {
        assert_eq!(
            format_date("2020-01-01T00:00:00.000Z", false).unwrap(),
            "1 Jan 2020"
        );
        assert_eq!(format_date("2024-12-25", false).unwrap(), "25 Dec 2024");
        assert_eq!(
            format_date("2023-07-04T18:30:00", false).unwrap(),
            "4 Jul 2023"
        );
    }

    // Compact mode is month/day/two-digit-year without padding on month and day.
    #[test]
    fn format_date_compact_mode() {
        assert_eq!(
            format_date("2020-01-01T00:00:00.000Z", true).unwrap(),
            "1/1/20"
        );
        assert_eq!(format_date("2009-11-05", true).unwrap(), "11/5/09");
    }

    // Offsets are normalized to UTC before the calendar date is taken.
    #[test]
    fn format_date_normalizes_offsets_to_utc() {
        assert_eq!(
            format_date("2021-03-01T01:00:00+02:00", false).unwrap(),
            "28 Feb 2021"
        );
    }

    // Garbage input is reported rather than rendered.
    #[test]
    fn format_date_rejects_unparsable_input() {
        let err = format_date("yesterday", false).unwrap_err();
        assert!(err.to_string().contains("Unrecognized date"));
    }
}
