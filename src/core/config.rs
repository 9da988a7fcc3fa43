// Configuration module for the race HUD

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::constants::{DANGER_BELOW_MS, NOTIFICATION_DURATION, WARNING_BELOW_MS};
use super::elements::ElementIds;

// =============================================================================
// CONFIGURATION STRUCTURES
// =============================================================================

/// Timer colour tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Remaining ms strictly below which the timer gets the `danger` class
    #[serde(default = "default_danger_below_ms")]
    pub danger_below_ms: i64,
    /// Remaining ms strictly below which the timer gets the `warning` class
    #[serde(default = "default_warning_below_ms")]
    pub warning_below_ms: i64,
}

fn default_danger_below_ms() -> i64 {
    DANGER_BELOW_MS
}

fn default_warning_below_ms() -> i64 {
    WARNING_BELOW_MS
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            danger_below_ms: default_danger_below_ms(),
            warning_below_ms: default_warning_below_ms(),
        }
    }
}

/// Toast settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    NOTIFICATION_DURATION.as_millis() as u64
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl NotificationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Write logs to stdout (native) or the browser console (NUI page)
    #[serde(default = "default_console")]
    pub console: bool,
    /// Log file path. Empty = no file logging. Ignored in the browser.
    #[serde(default)]
    pub log_file: String,
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_console() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            console: default_console(),
            log_file: String::new(),
            level: default_level(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudConfig {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default)]
    pub timer: TimerSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

// =============================================================================
// CONFIG LOADING
// =============================================================================

#[derive(Debug)]
pub enum ConfigError {
    ReadError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
        }
    }
}

impl HudConfig {
    pub const CONFIG_FILENAME: &'static str = "offroad_hud.toml";

    /// Parse configuration text; absent sections keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::ParseError)
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "[config] Looking for config");

        if !path.exists() {
            debug!("[config] No config found, using defaults");
            return Ok(HudConfig::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "[config] Loaded config");
        Ok(config)
    }
}
