//! Display helpers that turn one record's raw fields into list-row text.
//!
//! Everything here is pure and total: malformed inputs produce a best-effort
//! string rather than an error.
use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Offset text used when a location has no `" of "` separator.
pub const NEAR_FALLBACK: &str = "Near";

const LOCATION_SEPARATOR: &str = " of ";

/// Severity category derived from a magnitude; colors are chosen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagnitudeBucket {
    /// Levels `1..=9`; level 1 also covers readings whose remainder is 0.
    Level(u8),
    TenPlus,
}

/// A location split into its offset prefix and the place name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    pub offset: String,
    pub place: String,
}

fn datetime_in<Tz: TimeZone>(occurred_at_ms: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    Utc.timestamp_millis_opt(occurred_at_ms)
        .single()
        .map(|utc| utc.with_timezone(tz))
}

/// `"Mar 03, 1984"` in the given timezone.
pub fn format_date_in<Tz>(occurred_at_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime_in(occurred_at_ms, tz)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// `"4:30 PM"` in the given timezone.
pub fn format_time_in<Tz>(occurred_at_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    datetime_in(occurred_at_ms, tz)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

pub fn format_date(occurred_at_ms: i64) -> String {
    format_date_in(occurred_at_ms, &Local)
}

pub fn format_time(occurred_at_ms: i64) -> String {
    format_time_in(occurred_at_ms, &Local)
}

/// One decimal place, rounding half away from zero (`6.05` -> `"6.1"`).
pub fn format_magnitude(magnitude: f64) -> String {
    let mut tenths = (magnitude * 10.0).round();
    // Scaling overflows near f64::MAX; such values have no fractional part anyway.
    if !tenths.is_finite() {
        return format!("{magnitude:.1}");
    }
    // Avoid printing "-0.0" for tiny negative readings.
    if tenths == 0.0 {
        tenths = 0.0;
    }
    format!("{:.1}", tenths / 10.0)
}

/// Split `"5km NW of Example Town"` into `("5km NW of ", "Example Town")`.
///
/// Without a separator the whole input becomes the place and the offset is
/// [`NEAR_FALLBACK`].
pub fn split_location(location: &str) -> LocationParts {
    match location.find(LOCATION_SEPARATOR) {
        Some(idx) => {
            let (offset, place) = location.split_at(idx + LOCATION_SEPARATOR.len());
            LocationParts {
                offset: offset.to_string(),
                place: place.to_string(),
            }
        }
        None => LocationParts {
            offset: NEAR_FALLBACK.to_string(),
            place: location.to_string(),
        },
    }
}

/// Bucket by the integer part of `magnitude % 10`, truncated toward zero.
///
/// Remainders 0 and 1 share the lowest level. Negative remainders (magnitudes
/// at or below -1) and non-finite input land in [`MagnitudeBucket::TenPlus`].
pub fn magnitude_color_bucket(magnitude: f64) -> MagnitudeBucket {
    let remainder = magnitude % 10.0;
    if !remainder.is_finite() {
        return MagnitudeBucket::TenPlus;
    }
    match remainder.trunc() as i64 {
        0 | 1 => MagnitudeBucket::Level(1),
        level @ 2..=9 => MagnitudeBucket::Level(level as u8),
        _ => MagnitudeBucket::TenPlus,
    }
}
