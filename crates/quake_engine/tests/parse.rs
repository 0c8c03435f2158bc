use pretty_assertions::assert_eq;
use quake_core::EarthquakeRecord;
use quake_engine::{parse_feed, ParseError};
use serde_json::{json, Value};

fn feature(mag: Value, place: Value, time: Value, url: Value) -> Value {
    json!({
        "type": "Feature",
        "properties": { "mag": mag, "place": place, "time": time, "url": url },
        "geometry": { "type": "Point", "coordinates": [0.0, 0.0, 10.0] }
    })
}

fn good(mag: f64, place: &str, time: i64) -> Value {
    feature(
        json!(mag),
        json!(place),
        json!(time),
        json!(format!("https://earthquake.usgs.gov/ev/{time}")),
    )
}

fn feed(features: Vec<Value>) -> String {
    let count = features.len();
    json!({ "type": "FeatureCollection", "metadata": { "count": count }, "features": features })
        .to_string()
}

#[test]
fn parses_records_in_feed_order() {
    let raw = feed(vec![
        good(7.2, "88km N of Yelizovo, Russia", 1_700_000_000_000),
        good(6.1, "Fiji region", 1_600_000_000_000),
    ]);

    let parsed = parse_feed(&raw).unwrap();
    assert_eq!(parsed.skipped, 0);
    assert_eq!(
        parsed.records,
        vec![
            EarthquakeRecord::new(
                7.2,
                "88km N of Yelizovo, Russia",
                1_700_000_000_000,
                "https://earthquake.usgs.gov/ev/1700000000000"
            ),
            EarthquakeRecord::new(
                6.1,
                "Fiji region",
                1_600_000_000_000,
                "https://earthquake.usgs.gov/ev/1600000000000"
            ),
        ]
    );
}

#[test]
fn malformed_features_are_skipped_and_counted() {
    let raw = feed(vec![
        good(5.0, "A", 1),
        feature(Value::Null, json!("B"), json!(2), json!("https://e/b")),
        json!({ "type": "Feature" }),
        good(4.0, "C", 3),
        feature(json!(3.0), json!(42), json!(4), json!("https://e/d")),
        feature(json!(3.0), json!("E"), json!(1.5), json!("https://e/e")),
        feature(json!(3.0), json!("F"), json!(6), json!("")),
        feature(json!(3.0), json!("   "), json!(7), json!("https://e/g")),
        feature(json!(3.0), json!("H"), json!(-8), json!("https://e/h")),
        json!("not a feature"),
        good(-0.4, "I", 9),
    ]);

    let parsed = parse_feed(&raw).unwrap();
    let places: Vec<_> = parsed.records.iter().map(|r| r.location()).collect();
    assert_eq!(places, vec!["A", "C", "I"]);
    assert_eq!(parsed.skipped, 8);
}

#[test]
fn record_count_plus_skips_equals_feature_count() {
    for total in 0..12usize {
        let features = (0..total)
            .map(|i| {
                if i % 3 == 1 {
                    feature(json!("big"), json!("P"), json!(i), json!("https://e"))
                } else {
                    good(i as f64, "P", i as i64)
                }
            })
            .collect::<Vec<_>>();
        let malformed = (0..total).filter(|i| i % 3 == 1).count();

        let parsed = parse_feed(&feed(features)).unwrap();
        assert_eq!(parsed.records.len(), total - malformed);
        assert_eq!(parsed.skipped, malformed);
    }
}

#[test]
fn integer_magnitudes_are_accepted() {
    let parsed = parse_feed(&feed(vec![feature(
        json!(6),
        json!("X"),
        json!(10),
        json!("https://e/x"),
    )]))
    .unwrap();
    assert_eq!(parsed.records[0].magnitude(), 6.0);
}

#[test]
fn empty_features_is_not_an_error() {
    let parsed = parse_feed(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn invalid_documents_fail_whole_batch() {
    assert!(matches!(parse_feed(""), Err(ParseError::InvalidJson(_))));
    assert!(matches!(
        parse_feed("<html>oops</html>"),
        Err(ParseError::InvalidJson(_))
    ));
    assert_eq!(parse_feed("[1,2,3]"), Err(ParseError::NotAnObject));
    assert_eq!(
        parse_feed(r#"{"type":"FeatureCollection"}"#),
        Err(ParseError::MissingFeatures)
    );
    assert_eq!(
        parse_feed(r#"{"features":{"a":1}}"#),
        Err(ParseError::MissingFeatures)
    );
}

#[test]
fn out_of_range_magnitude_skips_only_that_feature() {
    let raw = r#"{"features":[
        {"properties":{"mag":5.2,"place":"3km N of A","time":1,"url":"https://e/a"}},
        {"properties":{"mag":1e400,"place":"B","time":2,"url":"https://e/b"}}
    ]}"#;

    let parsed = parse_feed(raw).unwrap();
    let places: Vec<_> = parsed.records.iter().map(|r| r.location()).collect();
    assert_eq!(places, vec!["3km N of A"]);
    assert_eq!(parsed.skipped, 1);
}

#[test]
fn oversized_numbers_outside_features_are_tolerated() {
    let raw = r#"{"metadata":{"generated":1e999},"features":[
        {"properties":{"mag":4.0,"place":"C","time":3,"url":"https://e/c"},
         "geometry":{"coordinates":[1e500,0,10]}}
    ]}"#;

    let parsed = parse_feed(raw).unwrap();
    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn null_features_is_missing() {
    assert_eq!(
        parse_feed(r#"{"features":null}"#),
        Err(ParseError::MissingFeatures)
    );
}
