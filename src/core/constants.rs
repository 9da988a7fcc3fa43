//! HUD constants - element ids, thresholds, class names
//!
//! Defaults for everything the page layout and the game host agree on.
//! Most of these can be overridden through `HudConfig`.

use std::time::Duration;

// =============================================================================
// ELEMENT IDS
// =============================================================================

pub const RACE_HUD_ID: &str = "race-hud";
pub const TIMER_ID: &str = "timer";
pub const CP_CURRENT_ID: &str = "cp-current";
pub const CP_TOTAL_ID: &str = "cp-total";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const LOBBY_PANEL_ID: &str = "lobby-panel";
pub const LOBBY_TIMER_ID: &str = "lobby-timer";
pub const LOBBY_PLAYERS_ID: &str = "lobby-players";
pub const LEADERBOARD_PANEL_ID: &str = "leaderboard-panel";
pub const LB_LIST_ID: &str = "lb-list";
pub const NOTIFICATIONS_ID: &str = "notifications";

// =============================================================================
// TIMER
// =============================================================================

/// Remaining time (ms) below which the timer turns red
pub const DANGER_BELOW_MS: i64 = 120_000;

/// Remaining time (ms) below which the timer turns orange
pub const WARNING_BELOW_MS: i64 = 300_000;

/// Base class of the timer element, restored before each tier evaluation
pub const TIMER_BASE_CLASS: &str = "timer-display";
pub const TIMER_DANGER_CLASS: &str = "danger";
pub const TIMER_WARNING_CLASS: &str = "warning";

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// How long a toast stays in the notification stream
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3800);

// =============================================================================
// LEADERBOARD
// =============================================================================

/// Position glyphs for the podium, indexed by rank - 1
pub const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Prefix of a finished entry's status
pub const FINISHED_MARK: &str = "✓";

// =============================================================================
// DISPLAY
// =============================================================================

pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";
