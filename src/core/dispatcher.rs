//! Render dispatcher - routes decoded messages to region renderers
//!
//! The dispatcher owns the element cache and a scheduler. Each message is
//! rendered synchronously and independently; nothing is remembered between
//! messages except what the page already shows.

use serde_json::Value;
use tracing::{debug, warn};

use super::config::{HudConfig, NotificationSettings, TimerSettings};
use super::elements::HudElements;
use super::protocol::{decode_message, HudMessage, ProtocolError};
use super::ui::{Scheduler, TaskHandle, UiRegion};

/// Outcome of dispatching one inbound payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A handler ran. Notifications carry their expiry task.
    Rendered {
        action: &'static str,
        expiry: Option<TaskHandle>,
    },
    /// No recognised action; nothing was touched
    Ignored,
}

pub struct Dispatcher<R, S> {
    elements: HudElements<R>,
    scheduler: S,
    timer: TimerSettings,
    notifications: NotificationSettings,
}

impl<R, S> Dispatcher<R, S>
where
    R: UiRegion + 'static,
    S: Scheduler,
{
    pub fn new(elements: HudElements<R>, scheduler: S, config: &HudConfig) -> Self {
        Self {
            elements,
            scheduler,
            timer: config.timer,
            notifications: config.notifications,
        }
    }

    pub fn elements(&self) -> &HudElements<R> {
        &self.elements
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Render one message. Returns the expiry task for notifications.
    pub fn handle(&self, message: HudMessage) -> Option<TaskHandle> {
        match message {
            HudMessage::ToggleHud { show } => {
                self.elements.hud.toggle(show);
                None
            }
            HudMessage::UpdateTimer {
                remaining,
                checkpoint,
                total,
            } => {
                self.elements
                    .hud
                    .update(remaining, checkpoint, total, &self.timer);
                None
            }
            HudMessage::ToggleLobby {
                show,
                time_left,
                players,
            } => {
                self.elements
                    .lobby
                    .toggle(show, time_left, players.as_deref());
                None
            }
            HudMessage::UpdateLeaderboard { show, leaderboard } => {
                self.elements
                    .leaderboard
                    .update(show, leaderboard.as_deref());
                None
            }
            HudMessage::Notification { message, kind } => Some(self.elements.notifications.show(
                &message,
                kind,
                self.notifications.duration(),
                &self.scheduler,
            )),
        }
    }

    /// Decode and render a payload already parsed as JSON
    pub fn dispatch_value(&self, value: Value) -> Result<Dispatch, ProtocolError> {
        match decode_message(value)? {
            Some(message) => Ok(self.render(message)),
            None => {
                debug!("[nui] Ignoring message without a known action");
                Ok(Dispatch::Ignored)
            }
        }
    }

    /// Decode and render raw JSON text
    pub fn dispatch_json(&self, raw: &str) -> Result<Dispatch, ProtocolError> {
        let value: Value = serde_json::from_str(raw).map_err(ProtocolError::Json)?;
        self.dispatch_value(value)
    }

    /// Listener entry point: malformed payloads are logged, never surfaced
    pub fn on_message(&self, raw: &str) {
        if let Err(e) = self.dispatch_json(raw) {
            warn!(error = %e, "[nui] Dropping malformed message");
        }
    }

    fn render(&self, message: HudMessage) -> Dispatch {
        let action = message.action();
        debug!(action, "[nui] Rendering");
        let expiry = self.handle(message);
        Dispatch::Rendered { action, expiry }
    }
}

// =============================================================================
// TESTS
// =============================================================================
