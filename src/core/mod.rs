//! Core module - platform-independent HUD rendering

pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod document;
pub mod elements;
pub mod format;
pub mod protocol;
pub mod render;
pub mod timers;
pub mod ui;

pub use config::{ConfigError, HudConfig};
pub use dispatcher::{Dispatch, Dispatcher};
pub use document::{Document, Node};
pub use elements::{ElementIds, HudElements, MissingElement};
pub use format::{format_finish, format_ms, format_sec};
pub use protocol::{HudMessage, LeaderboardEntry, LobbyPlayer, NotificationKind, ProtocolError};
pub use timers::TimerQueue;
pub use ui::{NodeSpec, Scheduler, TaskHandle, UiRegion};
