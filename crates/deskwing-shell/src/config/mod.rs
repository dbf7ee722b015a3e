use std::env;

use config::{Config, ConfigError, Environment, File};
use deskwing_protocol::events::{StickySide, Theme};
use serde::{Deserialize, Serialize};

/// Configuration for the event bus
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BusConfig {
    /// Broadcast channel capacity (default: 1024)
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// In-memory store capacity; oldest events are evicted beyond this
    /// (default: 4096)
    #[serde(default = "default_store_capacity")]
    pub store_capacity: usize,
    /// Retention window in hours for pruning stored events (default: 24)
    #[serde(default = "default_retention_hours")]
    pub retention_hours: u64,
}

fn default_channel_capacity() -> usize {
    1024
}

fn default_store_capacity() -> usize {
    4096
}

fn default_retention_hours() -> u64 {
    24
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            store_capacity: default_store_capacity(),
            retention_hours: default_retention_hours(),
        }
    }
}

/// UI defaults applied before the user changes anything
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UiConfig {
    /// Initial color scheme (default: system)
    #[serde(default)]
    pub theme: Theme,
    /// Initial edge for the floating window (default: right)
    #[serde(default)]
    pub sticky_side: StickySide,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub bus: BusConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with defaults
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add local configuration file (not tracked by git)
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from environment variables (with prefix DESKWING)
            .add_source(Environment::with_prefix("DESKWING").separator("_"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_any_source() {
        let settings = Settings::new().expect("defaults should always load");
        assert_eq!(settings.bus.channel_capacity, 1024);
        assert_eq!(settings.bus.store_capacity, 4096);
        assert_eq!(settings.bus.retention_hours, 24);
        assert_eq!(settings.ui.theme, Theme::System);
        assert_eq!(settings.ui.sticky_side, StickySide::Right);
    }
}
