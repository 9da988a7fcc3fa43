//! Element cache - HUD regions resolved once at startup
//!
//! Every handler receives only the group of handles it renders into.

use serde::{Deserialize, Serialize};

use super::constants::*;

// =============================================================================
// ELEMENT IDS
// =============================================================================

/// DOM ids of the HUD regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub race_hud: String,
    pub timer: String,
    pub cp_current: String,
    pub cp_total: String,
    pub progress_fill: String,
    pub lobby_panel: String,
    pub lobby_timer: String,
    pub lobby_players: String,
    pub leaderboard: String,
    pub lb_list: String,
    pub notifications: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            race_hud: RACE_HUD_ID.to_string(),
            timer: TIMER_ID.to_string(),
            cp_current: CP_CURRENT_ID.to_string(),
            cp_total: CP_TOTAL_ID.to_string(),
            progress_fill: PROGRESS_FILL_ID.to_string(),
            lobby_panel: LOBBY_PANEL_ID.to_string(),
            lobby_timer: LOBBY_TIMER_ID.to_string(),
            lobby_players: LOBBY_PLAYERS_ID.to_string(),
            leaderboard: LEADERBOARD_PANEL_ID.to_string(),
            lb_list: LB_LIST_ID.to_string(),
            notifications: NOTIFICATIONS_ID.to_string(),
        }
    }
}

impl ElementIds {
    /// Every id, in lookup order
    pub fn all(&self) -> [&str; 11] {
        [
            self.race_hud.as_str(),
            self.timer.as_str(),
            self.cp_current.as_str(),
            self.cp_total.as_str(),
            self.progress_fill.as_str(),
            self.lobby_panel.as_str(),
            self.lobby_timer.as_str(),
            self.lobby_players.as_str(),
            self.leaderboard.as_str(),
            self.lb_list.as_str(),
            self.notifications.as_str(),
        ]
    }
}

// =============================================================================
// REGION GROUPS
// =============================================================================

/// Race HUD: countdown, checkpoint counter, progress bar
#[derive(Debug, Clone)]
pub struct TimerHud<R> {
    pub container: R,
    pub timer: R,
    pub cp_current: R,
    pub cp_total: R,
    pub progress_fill: R,
}

/// Pre-race waiting room
#[derive(Debug, Clone)]
pub struct LobbyPanel<R> {
    pub panel: R,
    pub timer: R,
    pub players: R,
}

/// Ranked standings
#[derive(Debug, Clone)]
pub struct LeaderboardPanel<R> {
    pub panel: R,
    pub list: R,
}

/// Container toasts are appended to
#[derive(Debug, Clone)]
pub struct NotificationStream<R> {
    pub stream: R,
}

/// All cached regions
#[derive(Debug, Clone)]
pub struct HudElements<R> {
    pub hud: TimerHud<R>,
    pub lobby: LobbyPanel<R>,
    pub leaderboard: LeaderboardPanel<R>,
    pub notifications: NotificationStream<R>,
}

/// A region the page does not contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingElement {
    pub id: String,
}

impl std::fmt::Display for MissingElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HUD element #{} not found in page", self.id)
    }
}

impl std::error::Error for MissingElement {}

impl<R> HudElements<R> {
    /// Look every region up once through `lookup`
    pub fn resolve<F>(ids: &ElementIds, mut lookup: F) -> Result<Self, MissingElement>
    where
        F: FnMut(&str) -> Option<R>,
    {
        let mut get = |id: &str| {
            lookup(id).ok_or_else(|| MissingElement { id: id.to_string() })
        };
        let [
            race_hud,
            timer,
            cp_current,
            cp_total,
            progress_fill,
            lobby_panel,
            lobby_timer,
            lobby_players,
            leaderboard,
            lb_list,
            notifications,
        ] = ids.all();

        Ok(Self {
            hud: TimerHud {
                container: get(race_hud)?,
                timer: get(timer)?,
                cp_current: get(cp_current)?,
                cp_total: get(cp_total)?,
                progress_fill: get(progress_fill)?,
            },
            lobby: LobbyPanel {
                panel: get(lobby_panel)?,
                timer: get(lobby_timer)?,
                players: get(lobby_players)?,
            },
            leaderboard: LeaderboardPanel {
                panel: get(leaderboard)?,
                list: get(lb_list)?,
            },
            notifications: NotificationStream {
                stream: get(notifications)?,
            },
        })
    }
}
