use std::fmt;

use chrono::TimeZone;

use crate::{
    format_date_in, format_magnitude, format_time_in, magnitude_color_bucket, split_location,
    EarthquakeRecord, LoadFailure, LoadPhase, LoadState, LoaderState, MagnitudeBucket,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadViewModel {
    pub phase: LoadPhase,
    pub status_text: Option<String>,
    pub rows: Vec<EarthquakeRowView>,
    pub skipped: usize,
}

/// Display-ready fields for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarthquakeRowView {
    pub magnitude: String,
    pub bucket: MagnitudeBucket,
    pub offset: String,
    pub place: String,
    pub date: String,
    pub time: String,
    pub detail_url: String,
}

impl EarthquakeRowView {
    pub fn from_record<Tz>(record: &EarthquakeRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let location = split_location(record.location());
        Self {
            magnitude: format_magnitude(record.magnitude()),
            bucket: magnitude_color_bucket(record.magnitude()),
            offset: location.offset,
            place: location.place,
            date: format_date_in(record.occurred_at_ms(), tz),
            time: format_time_in(record.occurred_at_ms(), tz),
            detail_url: record.detail_url().to_string(),
        }
    }
}

impl LoaderState {
    /// Build the presentation snapshot, formatting times in `tz`.
    pub fn view<Tz>(&self, tz: &Tz) -> LoadViewModel
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        LoadViewModel {
            phase: self.load().phase(),
            status_text: status_text(self.load()),
            rows: self
                .records()
                .iter()
                .map(|record| EarthquakeRowView::from_record(record, tz))
                .collect(),
            skipped: self.last_skipped(),
        }
    }
}

fn status_text(load: &LoadState) -> Option<String> {
    match load {
        LoadState::Idle | LoadState::Loaded(_) => None,
        LoadState::CheckingConnectivity | LoadState::Fetching | LoadState::Parsing => {
            Some("Loading earthquakes...".to_string())
        }
        LoadState::Empty => Some("No earthquakes found.".to_string()),
        LoadState::Failed(LoadFailure::NoConnectivity) => {
            Some("No internet connection.".to_string())
        }
        LoadState::Failed(failure) => Some(format!("Failed to load earthquakes: {failure}")),
    }
}
