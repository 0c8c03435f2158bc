use crate::{CycleId, FeedOptions, LoadFailure, ParsedFeed};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Presentation asked for a fresh load using these options.
    LoadRequested(FeedOptions),
    /// Connectivity probe finished for a cycle.
    ConnectivityChecked { cycle: CycleId, available: bool },
    /// Feed request finished; `Ok` carries the response body.
    FetchCompleted {
        cycle: CycleId,
        result: Result<String, LoadFailure>,
    },
    /// Parser finished; `Err` means the body was not a recognizable feed.
    ParseCompleted {
        cycle: CycleId,
        result: Result<ParsedFeed, LoadFailure>,
    },
    /// A cycle step could not be dispatched at all.
    CycleAborted { cycle: CycleId, failure: LoadFailure },
    /// Return to `Idle` and drop records; ignored while a cycle is in flight.
    Reset,
}
