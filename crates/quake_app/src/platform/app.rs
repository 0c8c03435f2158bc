use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::Local;
use quake_engine::{EngineHandle, FetchSettings, LoadOrchestrator, ReqwestFetcher};
use quake_logging::{quake_info, quake_warn};

use super::connectivity::DnsConnectivityProbe;
use super::logging::{self, LogConfig};
use super::render;
use super::settings::{SettingsFile, SETTINGS_FILENAME};

// Connect and read timeouts bound a cycle well below this.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Load the feed once and print it. The first argument overrides the settings path.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(&LogConfig::from_env());

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".").join(SETTINGS_FILENAME));
    let settings = Arc::new(SettingsFile::new(settings_path));
    settings.ensure_exists();

    let fetcher = ReqwestFetcher::new(FetchSettings::default())
        .context("failed to build http client")?;
    let probe = DnsConnectivityProbe::new(settings.connectivity_host());
    let engine = EngineHandle::new(Arc::new(fetcher), Arc::new(probe))
        .context("failed to start engine")?;

    let mut orchestrator = LoadOrchestrator::new(engine, settings);
    orchestrator.on_state_changed(|state| {
        quake_info!("Load state: {:?}", state.phase());
        eprintln!("[{}]", render::phase_label(state.phase()));
    });

    orchestrator.request_load();
    if !orchestrator.wait_until_settled(SETTLE_TIMEOUT) {
        quake_warn!("Load did not finish within {:?}", SETTLE_TIMEOUT);
        bail!("timed out waiting for the earthquake feed");
    }

    for line in render::render(&orchestrator.view(&Local)) {
        println!("{line}");
    }
    Ok(())
}
