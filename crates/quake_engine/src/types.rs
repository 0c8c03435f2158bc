use std::fmt;

use quake_core::{CycleId, LoadFailure, ParsedFeed};

use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ConnectivityChecked {
        cycle: CycleId,
        available: bool,
    },
    FetchCompleted {
        cycle: CycleId,
        result: Result<String, FetchError>,
    },
    ParseCompleted {
        cycle: CycleId,
        result: Result<ParsedFeed, ParseError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    UnexpectedStatus(u16),
    Timeout,
    Network,
}

impl FailureKind {
    /// Collapse into the reason a load cycle reports.
    pub fn to_load_failure(self) -> LoadFailure {
        match self {
            FailureKind::InvalidUrl => LoadFailure::InvalidEndpoint,
            FailureKind::UnexpectedStatus(code) => LoadFailure::UnexpectedStatus { code },
            FailureKind::Timeout | FailureKind::Network => LoadFailure::NetworkError,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::UnexpectedStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
