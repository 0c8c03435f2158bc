use std::fmt;

use url::Url;

use crate::FeedOptions;

/// The configured base URL could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEndpoint {
    pub base_url: String,
    pub reason: String,
}

impl fmt::Display for InvalidEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid feed endpoint {:?}: {}", self.base_url, self.reason)
    }
}

impl std::error::Error for InvalidEndpoint {}

/// Build the GeoJSON query URL for `options`.
///
/// Query pairs are appended after any the base URL already carries.
pub fn build_feed_url(options: &FeedOptions) -> Result<String, InvalidEndpoint> {
    let mut url = Url::parse(options.base_url.trim()).map_err(|err| InvalidEndpoint {
        base_url: options.base_url.clone(),
        reason: err.to_string(),
    })?;

    url.query_pairs_mut()
        .append_pair("format", "geojson")
        .append_pair("limit", &options.result_limit.to_string())
        .append_pair("minmag", &options.min_magnitude)
        .append_pair("orderby", &options.order_by);

    Ok(url.into())
}
