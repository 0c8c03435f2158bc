//! Quake core: pure load state machine, feed request building and presentation formatting.
mod effect;
mod format;
mod msg;
mod record;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{
    format_date, format_date_in, format_magnitude, format_time, format_time_in,
    magnitude_color_bucket, split_location, LocationParts, MagnitudeBucket, NEAR_FALLBACK,
};
pub use msg::Msg;
pub use record::{EarthquakeRecord, FeedOptions, ParsedFeed, DEFAULT_FEED_URL};
pub use request::{build_feed_url, InvalidEndpoint};
pub use state::{CycleId, LoadFailure, LoadPhase, LoadState, LoaderState};
pub use update::update;
pub use view_model::{EarthquakeRowView, LoadViewModel};
