//! Quake engine: feed IO, parsing and the background load orchestrator.
mod engine;
mod fetch;
mod orchestrator;
mod parse;
mod sources;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use orchestrator::{LoadOrchestrator, StateListener};
pub use parse::{parse_feed, ParseError};
pub use sources::{ConnectivityProbe, SettingsSource};
pub use types::{EngineEvent, FailureKind, FetchError};
