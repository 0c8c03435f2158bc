//! Pull-based collaborators the orchestrator consults at the start of each cycle.
use quake_core::FeedOptions;

/// Reports whether a network is active or connecting. May block.
pub trait ConnectivityProbe: Send + Sync {
    fn is_network_available(&self) -> bool;
}

impl<F> ConnectivityProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_network_available(&self) -> bool {
        self()
    }
}

/// Supplies the query options for the next load.
pub trait SettingsSource: Send + Sync {
    fn feed_options(&self) -> FeedOptions;
}

/// Fixed options, for callers without a settings store.
impl SettingsSource for FeedOptions {
    fn feed_options(&self) -> FeedOptions {
        self.clone()
    }
}
