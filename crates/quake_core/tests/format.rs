use chrono::{FixedOffset, Utc};
use pretty_assertions::assert_eq;
use quake_core::{
    format_date_in, format_magnitude, format_time_in, magnitude_color_bucket, split_location,
    LocationParts, MagnitudeBucket,
};

// 2023-11-14T22:13:20Z
const SAMPLE_MS: i64 = 1_700_000_000_000;

fn parts(offset: &str, place: &str) -> LocationParts {
    LocationParts {
        offset: offset.to_string(),
        place: place.to_string(),
    }
}

#[test]
fn split_location_keeps_separator_in_offset() {
    assert_eq!(
        split_location("5km NW of Example Town"),
        parts("5km NW of ", "Example Town")
    );
}

#[test]
fn split_location_falls_back_to_near() {
    assert_eq!(split_location("Example Town"), parts("Near", "Example Town"));
    assert_eq!(split_location(""), parts("Near", ""));
}

#[test]
fn split_location_needs_spaces_around_of() {
    assert_eq!(
        split_location("Gulf ofAlaska"),
        parts("Near", "Gulf ofAlaska")
    );
}

#[test]
fn magnitude_has_one_decimal_rounded_half_up() {
    assert_eq!(format_magnitude(6.05), "6.1");
    assert_eq!(format_magnitude(-0.2), "-0.2");
    assert_eq!(format_magnitude(7.0), "7.0");
    assert_eq!(format_magnitude(4.44), "4.4");
    assert_eq!(format_magnitude(0.0), "0.0");
}

#[test]
fn magnitude_never_prints_negative_zero() {
    assert_eq!(format_magnitude(-0.04), "0.0");
    assert_eq!(format_magnitude(-0.0), "0.0");
}

#[test]
fn lowest_bucket_covers_zero_and_one() {
    assert_eq!(magnitude_color_bucket(0.0), magnitude_color_bucket(1.0));
    assert_eq!(magnitude_color_bucket(0.7), MagnitudeBucket::Level(1));
    assert_eq!(magnitude_color_bucket(1.9), MagnitudeBucket::Level(1));
}

#[test]
fn bucket_wraps_modulo_ten() {
    assert_eq!(magnitude_color_bucket(10.0), magnitude_color_bucket(0.0));
    assert_eq!(magnitude_color_bucket(24.0), magnitude_color_bucket(4.0));
    assert_eq!(magnitude_color_bucket(4.0), MagnitudeBucket::Level(4));
    assert_eq!(magnitude_color_bucket(9.99), MagnitudeBucket::Level(9));
}

#[test]
fn bucket_truncates_fraction_toward_zero() {
    assert_eq!(magnitude_color_bucket(6.8), MagnitudeBucket::Level(6));
    assert_eq!(magnitude_color_bucket(2.0), MagnitudeBucket::Level(2));
    // Small negatives truncate to zero and share the lowest level.
    assert_eq!(magnitude_color_bucket(-0.5), MagnitudeBucket::Level(1));
}

#[test]
fn negative_remainders_map_to_ten_plus() {
    assert_eq!(magnitude_color_bucket(-1.0), MagnitudeBucket::TenPlus);
    assert_eq!(magnitude_color_bucket(-3.7), MagnitudeBucket::TenPlus);
}

#[test]
fn bucket_is_total_over_finite_inputs() {
    for tenth in -200..=300 {
        let magnitude = f64::from(tenth) / 10.0;
        let bucket = magnitude_color_bucket(magnitude);
        assert_eq!(bucket, magnitude_color_bucket(magnitude));
        if let MagnitudeBucket::Level(level) = bucket {
            assert!((1..=9).contains(&level), "level {level} for {magnitude}");
        }
    }
}

#[test]
fn date_and_time_in_utc() {
    assert_eq!(format_date_in(SAMPLE_MS, &Utc), "Nov 14, 2023");
    assert_eq!(format_time_in(SAMPLE_MS, &Utc), "10:13 PM");
}

#[test]
fn date_and_time_follow_timezone() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    assert_eq!(format_date_in(SAMPLE_MS, &tokyo), "Nov 15, 2023");
    assert_eq!(format_time_in(SAMPLE_MS, &tokyo), "7:13 AM");
}

#[test]
fn epoch_formats_with_padded_day() {
    assert_eq!(format_date_in(0, &Utc), "Jan 01, 1970");
    assert_eq!(format_time_in(0, &Utc), "12:00 AM");
}
