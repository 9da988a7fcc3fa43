//! Region renderers - one per HUD region
//!
//! Each region only touches its own handles. Lists are rebuilt from scratch
//! on every render, in input order.

use std::time::Duration;

use tracing::trace;

use super::config::TimerSettings;
use super::constants::{
    FINISHED_MARK, MEDALS, TIMER_BASE_CLASS, TIMER_DANGER_CLASS, TIMER_WARNING_CLASS,
};
use super::elements::{LeaderboardPanel, LobbyPanel, NotificationStream, TimerHud};
use super::format::{
    format_finish, format_ms, format_number, format_percent, format_sec, progress_percent,
};
use super::protocol::{LeaderboardEntry, LobbyPlayer, NotificationKind};
use super::ui::{NodeSpec, Scheduler, TaskHandle, UiRegion};

// =============================================================================
// RACE HUD
// =============================================================================

impl<R: UiRegion> TimerHud<R> {
    pub fn toggle(&self, show: bool) {
        self.container.set_visible(show);
    }

    /// Countdown, colour tier, checkpoint counter and progress bar.
    /// Never changes the HUD's visibility.
    pub fn update(&self, remaining: f64, checkpoint: f64, total: f64, tiers: &TimerSettings) {
        self.timer.set_text(&format_ms(remaining));

        // NaN falls through both tiers
        self.timer.set_class_name(TIMER_BASE_CLASS);
        if remaining < tiers.danger_below_ms as f64 {
            self.timer.add_class(TIMER_DANGER_CLASS);
        } else if remaining < tiers.warning_below_ms as f64 {
            self.timer.add_class(TIMER_WARNING_CLASS);
        }

        self.cp_current.set_text(&format_number(checkpoint));
        self.cp_total.set_text(&format!("/ {}", format_number(total)));

        let width = format_percent(progress_percent(checkpoint, total));
        trace!(checkpoint, total, %width, "[nui] Progress");
        self.progress_fill.set_width(&width);
    }
}

// =============================================================================
// LOBBY
// =============================================================================

/// `<li><span class="pos">N</span> name</li>`
pub fn lobby_row(index: usize, player: &LobbyPlayer) -> NodeSpec {
    NodeSpec::element("li")
        .with_child(NodeSpec::span("pos", (index + 1).to_string()))
        .with_text(format!(" {}", player.name))
}

impl<R: UiRegion> LobbyPanel<R> {
    /// Show or hide the panel. A hidden panel keeps whatever it rendered last.
    pub fn toggle(&self, show: bool, time_left: Option<f64>, players: Option<&[LobbyPlayer]>) {
        self.panel.set_visible(show);
        if !show {
            return;
        }

        if let Some(time_left) = time_left {
            self.timer.set_text(&format_sec(time_left));
        }

        let rows: Vec<NodeSpec> = players
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, p)| lobby_row(i, p))
            .collect();
        self.players.replace_children(&rows);
    }
}

// =============================================================================
// LEADERBOARD
// =============================================================================

/// Podium glyph for the first three ranks, `N.` after
pub fn position_label(index: usize) -> String {
    MEDALS
        .get(index)
        .map(|medal| medal.to_string())
        .unwrap_or_else(|| format!("{}.", index + 1))
}

/// Status span: finish time when finished, last checkpoint otherwise
pub fn status_span(entry: &LeaderboardEntry) -> NodeSpec {
    if entry.finished {
        let finish = format_finish(entry.finish_time.unwrap_or_default());
        NodeSpec::span("lb-finished", format!("{} {}", FINISHED_MARK, finish))
    } else {
        // A NaN checkpoint counts as none
        let checkpoint = entry.checkpoint.filter(|cp| !cp.is_nan()).unwrap_or(0.0);
        NodeSpec::span("lb-cp", format!("CP {}", format_number(checkpoint)))
    }
}

pub fn leaderboard_row(index: usize, entry: &LeaderboardEntry) -> NodeSpec {
    NodeSpec::element("li")
        .with_child(NodeSpec::span("lb-pos", position_label(index)))
        .with_child(NodeSpec::span("lb-name", entry.name.clone()))
        .with_child(status_span(entry))
}

impl<R: UiRegion> LeaderboardPanel<R> {
    /// Show or hide the standings. The list is only rebuilt when shown with entries.
    pub fn update(&self, show: bool, entries: Option<&[LeaderboardEntry]>) {
        self.panel.set_visible(show);

        let Some(entries) = entries.filter(|_| show) else {
            return;
        };

        let rows: Vec<NodeSpec> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| leaderboard_row(i, e))
            .collect();
        self.list.replace_children(&rows);
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

pub fn toast(message: &str, kind: NotificationKind) -> NodeSpec {
    NodeSpec::element("div")
        .with_class(&format!("notif {}", kind.as_class()))
        .with_text(message)
}

impl<R: UiRegion + 'static> NotificationStream<R> {
    /// Append a toast and schedule its removal after `duration`.
    ///
    /// The returned handle is never used to cancel: a toast always lives
    /// its full duration, even if the stream is torn down first.
    pub fn show<S: Scheduler>(
        &self,
        message: &str,
        kind: NotificationKind,
        duration: Duration,
        scheduler: &S,
    ) -> TaskHandle {
        let node = self.stream.append_child(&toast(message, kind));
        scheduler.schedule(duration, Box::new(move || node.remove()))
    }
}
