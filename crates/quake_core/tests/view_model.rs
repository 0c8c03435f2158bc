use chrono::Utc;
use pretty_assertions::assert_eq;
use quake_core::{
    update, EarthquakeRecord, EarthquakeRowView, FeedOptions, LoadFailure, LoadPhase,
    LoaderState, MagnitudeBucket, Msg, ParsedFeed,
};

fn finish_cycle(result: Result<ParsedFeed, LoadFailure>) -> LoaderState {
    let (state, _) = update(LoaderState::new(), Msg::LoadRequested(FeedOptions::default()));
    let (state, _) = update(
        state,
        Msg::ConnectivityChecked {
            cycle: 1,
            available: true,
        },
    );
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            cycle: 1,
            result: Ok(String::new()),
        },
    );
    let (state, _) = update(state, Msg::ParseCompleted { cycle: 1, result });
    state
}

#[test]
fn row_view_formats_record() {
    let record = EarthquakeRecord::new(
        7.25,
        "88km N of Yelizovo, Russia",
        1_700_000_000_000,
        "https://earthquake.usgs.gov/earthquakes/eventpage/us1",
    );

    let row = EarthquakeRowView::from_record(&record, &Utc);
    assert_eq!(
        row,
        EarthquakeRowView {
            magnitude: "7.3".to_string(),
            bucket: MagnitudeBucket::Level(7),
            offset: "88km N of ".to_string(),
            place: "Yelizovo, Russia".to_string(),
            date: "Nov 14, 2023".to_string(),
            time: "10:13 PM".to_string(),
            detail_url: "https://earthquake.usgs.gov/earthquakes/eventpage/us1".to_string(),
        }
    );
}

#[test]
fn loaded_view_lists_rows_and_skips() {
    let state = finish_cycle(Ok(ParsedFeed {
        records: vec![
            EarthquakeRecord::new(6.0, "Fiji region", 0, "https://e/1"),
            EarthquakeRecord::new(5.5, "3km E of Town", 0, "https://e/2"),
        ],
        skipped: 1,
    }));

    let view = state.view(&Utc);
    assert_eq!(view.phase, LoadPhase::Loaded);
    assert_eq!(view.status_text, None);
    assert_eq!(view.skipped, 1);
    let places: Vec<_> = view.rows.iter().map(|row| row.place.as_str()).collect();
    assert_eq!(places, vec!["Fiji region", "Town"]);
    assert_eq!(view.rows[0].offset, "Near");
}

#[test]
fn empty_view_has_status_text() {
    let view = finish_cycle(Ok(ParsedFeed::default())).view(&Utc);
    assert_eq!(view.phase, LoadPhase::Empty);
    assert_eq!(view.status_text.as_deref(), Some("No earthquakes found."));
    assert!(view.rows.is_empty());
}

#[test]
fn failure_views_describe_reason() {
    let view = finish_cycle(Err(LoadFailure::MalformedFeed)).view(&Utc);
    assert_eq!(view.phase, LoadPhase::Failed);
    assert_eq!(
        view.status_text.as_deref(),
        Some("Failed to load earthquakes: malformed feed")
    );

    let (state, _) = update(LoaderState::new(), Msg::LoadRequested(FeedOptions::default()));
    let loading = state.view(&Utc);
    assert_eq!(loading.status_text.as_deref(), Some("Loading earthquakes..."));

    let (state, _) = update(
        state,
        Msg::ConnectivityChecked {
            cycle: 1,
            available: false,
        },
    );
    assert_eq!(
        state.view(&Utc).status_text.as_deref(),
        Some("No internet connection.")
    );
}
