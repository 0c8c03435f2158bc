use quake_core::{EarthquakeRecord, ParsedFeed};
use quake_logging::{quake_debug, quake_warn};
use serde::Deserialize;
use serde_json::value::RawValue;

/// The body is not a feed document at all; individual bad features never produce this.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("feed is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("feed root is not a JSON object")]
    NotAnObject,
    #[error("feed has no `features` array")]
    MissingFeatures,
}

/// Top level of the document; features stay raw so each one decodes on its own.
#[derive(Debug, Deserialize)]
struct FeedDocument<'a> {
    #[serde(borrow)]
    features: Option<&'a RawValue>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    mag: f64,
    place: String,
    time: i64,
    url: String,
}

/// Decode a GeoJSON feed into records, preserving feature order.
///
/// Features with a missing, mistyped or invalid field are counted in
/// [`ParsedFeed::skipped`] and dropped; the rest of the batch still loads.
/// Values are only range-checked per feature, so an unrepresentable number
/// in one feature never rejects the document.
pub fn parse_feed(raw: &str) -> Result<ParsedFeed, ParseError> {
    // Syntax check only; raw values skip numeric conversion.
    let _: &RawValue =
        serde_json::from_str(raw).map_err(|err| ParseError::InvalidJson(err.to_string()))?;
    if !raw.trim_start().starts_with('{') {
        return Err(ParseError::NotAnObject);
    }
    let document: FeedDocument<'_> =
        serde_json::from_str(raw).map_err(|err| ParseError::InvalidJson(err.to_string()))?;
    let features: Vec<&RawValue> = document
        .features
        .and_then(|features| serde_json::from_str(features.get()).ok())
        .ok_or(ParseError::MissingFeatures)?;

    let mut records = Vec::with_capacity(features.len());
    let mut skipped = 0;
    for (index, feature) in features.into_iter().enumerate() {
        match record_from_feature(feature) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                quake_debug!("Skipping feature {}: {}", index, reason);
            }
        }
    }

    if skipped > 0 {
        quake_warn!(
            "Parsed {} earthquake records, skipped {} malformed features",
            records.len(),
            skipped
        );
    }
    Ok(ParsedFeed { records, skipped })
}

fn record_from_feature(feature: &RawValue) -> Result<EarthquakeRecord, String> {
    let Feature { properties } =
        serde_json::from_str(feature.get()).map_err(|err| err.to_string())?;

    if !properties.mag.is_finite() {
        return Err("magnitude is not finite".to_string());
    }
    if properties.place.trim().is_empty() {
        return Err("place is empty".to_string());
    }
    if properties.url.trim().is_empty() {
        return Err("url is empty".to_string());
    }
    if properties.time < 0 {
        return Err(format!("time {} is negative", properties.time));
    }

    Ok(EarthquakeRecord::new(
        properties.mag,
        properties.place,
        properties.time,
        properties.url,
    ))
}
