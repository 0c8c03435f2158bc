use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::TimeZone;
use quake_core::{
    update, EarthquakeRecord, Effect, LoadFailure, LoadState, LoadViewModel, LoaderState, Msg,
};
use quake_logging::{quake_debug, quake_info};

use crate::{EngineEvent, EngineHandle, SettingsSource};

/// Callback invoked with the new state after every transition.
pub type StateListener = Box<dyn FnMut(&LoadState) + Send>;

/// Runs load cycles against the engine and reports every transition.
///
/// All state changes and listener calls happen on the thread that calls into
/// the orchestrator; the engine thread only produces events. At most one cycle
/// is in flight at a time.
pub struct LoadOrchestrator {
    state: LoaderState,
    engine: EngineHandle,
    settings: Arc<dyn SettingsSource>,
    listeners: Vec<StateListener>,
}

impl LoadOrchestrator {
    pub fn new(engine: EngineHandle, settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            state: LoaderState::new(),
            engine,
            settings,
            listeners: Vec::new(),
        }
    }

    pub fn on_state_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&LoadState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Start a new cycle. Returns false, without side effects, if one is already running.
    pub fn request_load(&mut self) -> bool {
        if self.state.is_busy() {
            quake_debug!(
                "Load request ignored; cycle {} still in flight",
                self.state.cycle()
            );
            return false;
        }
        let options = self.settings.feed_options();
        self.dispatch(Msg::LoadRequested(options));
        true
    }

    /// Back to `Idle`, dropping records. Returns false, doing nothing, while a cycle runs.
    pub fn reset(&mut self) -> bool {
        if self.state.is_busy() {
            quake_debug!(
                "Reset ignored; cycle {} still in flight",
                self.state.cycle()
            );
            return false;
        }
        self.dispatch(Msg::Reset);
        true
    }

    pub fn state(&self) -> &LoadState {
        self.state.load()
    }

    /// Records of the last cycle; empty unless the state is `Loaded`.
    pub fn current_records(&self) -> &[EarthquakeRecord] {
        self.state.records()
    }

    pub fn last_skipped(&self) -> usize {
        self.state.last_skipped()
    }

    pub fn view<Tz>(&self, tz: &Tz) -> LoadViewModel
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.state.view(tz)
    }

    /// Apply every engine event that is ready, without blocking.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.engine.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Block until the current cycle reaches a terminal state.
    ///
    /// Returns false if `timeout` elapsed first; the cycle keeps running and
    /// later events can still be applied with [`Self::process_pending`].
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.engine.recv_timeout(remaining) {
                Some(event) => self.handle_event(event),
                None => return !self.state.is_busy(),
            }
        }
        true
    }

    fn handle_event(&mut self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::ConnectivityChecked { cycle, available } => {
                Msg::ConnectivityChecked { cycle, available }
            }
            EngineEvent::FetchCompleted { cycle, result } => Msg::FetchCompleted {
                cycle,
                result: result.map_err(|err| err.kind.to_load_failure()),
            },
            EngineEvent::ParseCompleted { cycle, result } => Msg::ParseCompleted {
                cycle,
                result: result.map_err(|err| {
                    quake_info!("Cycle {} feed rejected: {}", cycle, err);
                    LoadFailure::MalformedFeed
                }),
            },
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;

        if changed {
            quake_debug!(
                "Cycle {} -> {:?}",
                self.state.cycle(),
                self.state.load().phase()
            );
            let current = self.state.load();
            for listener in &mut self.listeners {
                listener(current);
            }
        }

        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let cycle = effect.cycle();
            let sent = match effect {
                Effect::CheckConnectivity { cycle } => self.engine.check_connectivity(cycle),
                Effect::FetchFeed { cycle, url } => {
                    quake_info!("Cycle {} requesting {}", cycle, url);
                    self.engine.fetch(cycle, url)
                }
                Effect::ParseFeed { cycle, body } => self.engine.parse(cycle, body),
            };
            if !sent {
                self.dispatch(Msg::CycleAborted {
                    cycle,
                    failure: LoadFailure::NetworkError,
                });
            }
        }
    }
}
