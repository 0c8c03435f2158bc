use crate::{build_feed_url, Effect, LoadFailure, LoadPhase, LoadState, LoaderState, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// At most one transition happens per message. Messages tagged with a cycle
/// other than the current one, or arriving in a phase that does not expect
/// them, leave the state untouched.
pub fn update(mut state: LoaderState, msg: Msg) -> (LoaderState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested(options) => {
            // Single flight: no queuing and no pre-emption of the running cycle.
            if state.is_busy() {
                return (state, Vec::new());
            }
            let cycle = state.begin_cycle(options);
            vec![Effect::CheckConnectivity { cycle }]
        }
        Msg::ConnectivityChecked { cycle, available } => {
            if !state.expects(cycle, LoadPhase::CheckingConnectivity) {
                return (state, Vec::new());
            }
            if !available {
                state.fail(LoadFailure::NoConnectivity);
                return (state, Vec::new());
            }
            let url = state
                .take_options()
                .ok_or(LoadFailure::InvalidEndpoint)
                .and_then(|options| {
                    build_feed_url(&options).map_err(|_| LoadFailure::InvalidEndpoint)
                });
            match url {
                Ok(url) => {
                    state.transition(LoadState::Fetching);
                    vec![Effect::FetchFeed { cycle, url }]
                }
                Err(failure) => {
                    state.fail(failure);
                    Vec::new()
                }
            }
        }
        Msg::FetchCompleted { cycle, result } => {
            if !state.expects(cycle, LoadPhase::Fetching) {
                return (state, Vec::new());
            }
            match result {
                Ok(body) => {
                    state.transition(LoadState::Parsing);
                    vec![Effect::ParseFeed { cycle, body }]
                }
                Err(failure) => {
                    state.fail(failure);
                    Vec::new()
                }
            }
        }
        Msg::ParseCompleted { cycle, result } => {
            if !state.expects(cycle, LoadPhase::Parsing) {
                return (state, Vec::new());
            }
            match result {
                Ok(parsed) => {
                    state.set_last_skipped(parsed.skipped);
                    if parsed.records.is_empty() {
                        state.transition(LoadState::Empty);
                    } else {
                        state.transition(LoadState::Loaded(parsed.records));
                    }
                }
                Err(_) => state.fail(LoadFailure::MalformedFeed),
            }
            Vec::new()
        }
        Msg::CycleAborted { cycle, failure } => {
            if state.cycle() == cycle && state.is_busy() {
                state.fail(failure);
            }
            Vec::new()
        }
        Msg::Reset => {
            // No cancellation: a running cycle always reaches its terminal state.
            if !state.is_busy() {
                state.reset();
            }
            Vec::new()
        }
    };

    (state, effects)
}
