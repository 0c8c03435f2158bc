use std::fmt;

use crate::{EarthquakeRecord, FeedOptions};

/// Identifies one load cycle; engine events carry it so stale results can be dropped.
pub type CycleId = u64;

/// Machine-readable reason a cycle ended in [`LoadState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    InvalidEndpoint,
    NoConnectivity,
    NetworkError,
    UnexpectedStatus { code: u16 },
    MalformedFeed,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::InvalidEndpoint => write!(f, "invalid feed endpoint"),
            LoadFailure::NoConnectivity => write!(f, "no network connectivity"),
            LoadFailure::NetworkError => write!(f, "network error"),
            LoadFailure::UnexpectedStatus { code } => write!(f, "unexpected http status {code}"),
            LoadFailure::MalformedFeed => write!(f, "malformed feed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    CheckingConnectivity,
    Fetching,
    Parsing,
    Loaded(Vec<EarthquakeRecord>),
    Empty,
    Failed(LoadFailure),
}

/// Payload-free discriminant of [`LoadState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    Idle,
    CheckingConnectivity,
    Fetching,
    Parsing,
    Loaded,
    Empty,
    Failed,
}

impl LoadState {
    pub fn phase(&self) -> LoadPhase {
        match self {
            LoadState::Idle => LoadPhase::Idle,
            LoadState::CheckingConnectivity => LoadPhase::CheckingConnectivity,
            LoadState::Fetching => LoadPhase::Fetching,
            LoadState::Parsing => LoadPhase::Parsing,
            LoadState::Loaded(_) => LoadPhase::Loaded,
            LoadState::Empty => LoadPhase::Empty,
            LoadState::Failed(_) => LoadPhase::Failed,
        }
    }

    /// True while a cycle is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            LoadState::CheckingConnectivity | LoadState::Fetching | LoadState::Parsing
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LoadState::Loaded(_) | LoadState::Empty | LoadState::Failed(_)
        )
    }
}

/// Everything the load state machine owns for one screen session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoaderState {
    load: LoadState,
    cycle: CycleId,
    options: Option<FeedOptions>,
    last_skipped: usize,
    dirty: bool,
}

impl LoaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn cycle(&self) -> CycleId {
        self.cycle
    }

    pub fn is_busy(&self) -> bool {
        self.load.is_busy()
    }

    /// Records of the current cycle; empty unless the state is `Loaded`.
    pub fn records(&self) -> &[EarthquakeRecord] {
        match &self.load {
            LoadState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Features skipped by the most recent parse.
    pub fn last_skipped(&self) -> usize {
        self.last_skipped
    }

    /// Returns whether a transition happened since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn expects(&self, cycle: CycleId, phase: LoadPhase) -> bool {
        self.cycle == cycle && self.load.phase() == phase
    }

    pub(crate) fn begin_cycle(&mut self, options: FeedOptions) -> CycleId {
        self.cycle += 1;
        self.options = Some(options);
        self.last_skipped = 0;
        self.transition(LoadState::CheckingConnectivity);
        self.cycle
    }

    pub(crate) fn take_options(&mut self) -> Option<FeedOptions> {
        self.options.take()
    }

    pub(crate) fn set_last_skipped(&mut self, skipped: usize) {
        self.last_skipped = skipped;
    }

    pub(crate) fn fail(&mut self, failure: LoadFailure) {
        self.options = None;
        self.transition(LoadState::Failed(failure));
    }

    pub(crate) fn reset(&mut self) {
        self.options = None;
        self.last_skipped = 0;
        self.transition(LoadState::Idle);
    }

    pub(crate) fn transition(&mut self, next: LoadState) {
        self.load = next;
        self.dirty = true;
    }
}
