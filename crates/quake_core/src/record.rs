/// USGS event query endpoint used when no settings override it.
pub const DEFAULT_FEED_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// One seismic event as delivered by the feed.
///
/// Records are only built by the feed parser, which enforces that the
/// magnitude is finite, `location` and `detail_url` are non-empty and the
/// timestamp is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    magnitude: f64,
    location: String,
    occurred_at_ms: i64,
    detail_url: String,
}

impl EarthquakeRecord {
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        occurred_at_ms: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            occurred_at_ms,
            detail_url: detail_url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Raw place description, e.g. `"5km NW of Example Town"`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Event time in milliseconds since the Unix epoch.
    pub fn occurred_at_ms(&self) -> i64 {
        self.occurred_at_ms
    }

    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }
}

/// Result of parsing one feed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedFeed {
    pub records: Vec<EarthquakeRecord>,
    /// Features dropped because a field was missing, mistyped or invalid.
    pub skipped: usize,
}

/// Query options for one load, passed through to the feed unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    pub base_url: String,
    pub result_limit: u32,
    pub min_magnitude: String,
    pub order_by: String,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_URL.to_string(),
            result_limit: 10,
            min_magnitude: "6".to_string(),
            order_by: "magnitude".to_string(),
        }
    }
}
