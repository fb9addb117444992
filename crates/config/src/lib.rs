pub mod schema;
pub mod watcher;

pub use schema::{ChartConfig, SourceConfig, SourceMode, ThemeConfig, ThermoConfig};
pub use watcher::spawn_watcher;

use thermo_core::{Result, ThermoError};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ThermoConfig::default()`
/// if the file doesn't exist so the visualizer always starts with sensible
/// defaults (the original behavior: no config surface at all).
pub fn load(path: impl AsRef<Path>) -> Result<ThermoConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ThermoConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ThermoError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| ThermoError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("thermoscope").join("thermoscope.toml")
}
