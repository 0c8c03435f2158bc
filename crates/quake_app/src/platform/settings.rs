use std::fs;
use std::path::{Path, PathBuf};

use quake_core::FeedOptions;
use quake_engine::SettingsSource;
use quake_logging::{quake_error, quake_info, quake_warn};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILENAME: &str = "quake_settings.ron";
const DEFAULT_CONNECTIVITY_HOST: &str = "earthquake.usgs.gov:443";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct PersistedSettings {
    base_url: String,
    result_limit: u32,
    min_magnitude: String,
    order_by: String,
    /// `host:port` resolved to decide whether a network is available.
    connectivity_host: String,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        let options = FeedOptions::default();
        Self {
            base_url: options.base_url,
            result_limit: options.result_limit,
            min_magnitude: options.min_magnitude,
            order_by: options.order_by,
            connectivity_host: DEFAULT_CONNECTIVITY_HOST.to_string(),
        }
    }
}

impl PersistedSettings {
    fn into_feed_options(self) -> FeedOptions {
        FeedOptions {
            base_url: self.base_url,
            result_limit: self.result_limit,
            min_magnitude: self.min_magnitude,
            order_by: self.order_by,
        }
    }
}

/// Settings read from a RON file on every load, so edits apply to the next cycle.
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn connectivity_host(&self) -> String {
        load_settings(&self.path).connectivity_host
    }

    /// Write the defaults if no settings file exists yet.
    pub fn ensure_exists(&self) {
        if self.path.exists() {
            return;
        }
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&PersistedSettings::default(), pretty) {
            Ok(text) => text,
            Err(err) => {
                quake_error!("Failed to serialize default settings: {}", err);
                return;
            }
        };
        match fs::write(&self.path, content) {
            Ok(()) => quake_info!("Wrote default settings to {:?}", self.path),
            Err(err) => quake_warn!("Failed to write default settings to {:?}: {}", self.path, err),
        }
    }
}

impl SettingsSource for SettingsFile {
    fn feed_options(&self) -> FeedOptions {
        load_settings(&self.path).into_feed_options()
    }
}

fn load_settings(path: &Path) -> PersistedSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return PersistedSettings::default();
        }
        Err(err) => {
            quake_warn!("Failed to read settings from {:?}: {}", path, err);
            return PersistedSettings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            quake_warn!("Failed to parse settings from {:?}: {}", path, err);
            PersistedSettings::default()
        }
    }
}
