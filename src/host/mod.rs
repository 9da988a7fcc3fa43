//! Host module - native (non-browser) runtime for the HUD
//!
//! This module contains:
//! - HudHost: single-threaded event loop rendering into a headless page
//! - HostHandle: thread-safe sender the game side pushes messages through
//! - Logging setup

pub mod event_loop;
pub mod logging;

use std::path::Path;

use crate::core::config::{ConfigError, HudConfig};

pub use event_loop::{inbound_channel, HostHandle, HostStats, HudHost};

/// Load `offroad_hud.toml` from `dir` (defaults if absent) and start logging
pub fn init_from_dir(dir: &Path) -> Result<HudConfig, ConfigError> {
    let config = HudConfig::load(&dir.join(HudConfig::CONFIG_FILENAME))?;
    logging::init_logging(&config.logging);
    Ok(config)
}
