//! NUI protocol types
//!
//! This module contains the JSON messages the game host pushes to the HUD
//! page. Every message is an object with an `action` field selecting the
//! handler; the remaining fields are that handler's payload. These types are
//! platform-independent and can be tested without a browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// DATA TYPES
// =============================================================================

/// A player waiting in the lobby
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyPlayer {
    pub name: String,
}

/// One row of the race standings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    #[serde(default)]
    pub finished: bool,
    /// Finish time in milliseconds (required when `finished`)
    #[serde(rename = "finishTime", default)]
    pub finish_time: Option<f64>,
    /// Last checkpoint reached; shown as 0 when absent
    #[serde(default)]
    pub checkpoint: Option<f64>,
}

/// Toast flavour, used as a CSS class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

// =============================================================================
// HUD MESSAGES (game host → page)
// =============================================================================

/// Messages received from the game host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum HudMessage {
    /// Show or hide the race HUD
    #[serde(rename = "toggleHUD")]
    ToggleHud { show: bool },
    /// Timer, checkpoint counter and progress bar
    #[serde(rename = "updateTimer")]
    UpdateTimer {
        /// Remaining race time in milliseconds
        remaining: f64,
        checkpoint: f64,
        total: f64,
    },
    /// Show or hide the lobby, with its countdown and roster
    #[serde(rename = "toggleLobby")]
    ToggleLobby {
        show: bool,
        /// Countdown in seconds (required when `show`)
        #[serde(rename = "timeLeft", default)]
        time_left: Option<f64>,
        #[serde(default)]
        players: Option<Vec<LobbyPlayer>>,
    },
    /// Show or hide the standings
    #[serde(rename = "updateLeaderboard")]
    UpdateLeaderboard {
        show: bool,
        #[serde(default)]
        leaderboard: Option<Vec<LeaderboardEntry>>,
    },
    /// Push a toast
    #[serde(rename = "notification")]
    Notification {
        message: String,
        #[serde(rename = "type", default)]
        kind: NotificationKind,
    },
}

/// Action names the page knows how to render
pub const KNOWN_ACTIONS: [&str; 5] = [
    "toggleHUD",
    "updateTimer",
    "toggleLobby",
    "updateLeaderboard",
    "notification",
];

impl HudMessage {
    /// Action name as it appears on the wire
    pub fn action(&self) -> &'static str {
        match self {
            HudMessage::ToggleHud { .. } => "toggleHUD",
            HudMessage::UpdateTimer { .. } => "updateTimer",
            HudMessage::ToggleLobby { .. } => "toggleLobby",
            HudMessage::UpdateLeaderboard { .. } => "updateLeaderboard",
            HudMessage::Notification { .. } => "notification",
        }
    }

    /// Check fields whose presence depends on other fields
    fn validate(self) -> Result<Self, ProtocolError> {
        let missing = match &self {
            HudMessage::ToggleLobby {
                show: true,
                time_left: None,
                ..
            } => Some("timeLeft"),
            HudMessage::UpdateLeaderboard {
                show: true,
                leaderboard: Some(entries),
            } if entries.iter().any(|e| e.finished && e.finish_time.is_none()) => {
                Some("finishTime")
            }
            _ => None,
        };

        match missing {
            Some(field) => Err(ProtocolError::MissingField {
                action: self.action(),
                field,
            }),
            None => Ok(self),
        }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Errors for payloads that name a known action but cannot be rendered
#[derive(Debug)]
pub enum ProtocolError {
    /// Raw text was not JSON at all
    Json(serde_json::Error),
    /// A field required by the action (or by another field) is absent
    MissingField {
        action: &'static str,
        field: &'static str,
    },
    /// Fields present but of the wrong shape
    InvalidPayload {
        action: String,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolError::Json(e) => write!(f, "Message is not valid JSON: {}", e),
            ProtocolError::MissingField { action, field } => {
                write!(f, "{} message is missing required field `{}`", action, field)
            }
            ProtocolError::InvalidPayload { action, source } => {
                write!(f, "Invalid {} payload: {}", action, source)
            }
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Json(e) => Some(e),
            ProtocolError::InvalidPayload { source, .. } => Some(source),
            ProtocolError::MissingField { .. } => None,
        }
    }
}

/// Decode a message already parsed as JSON.
///
/// Returns `Ok(None)` for anything without a recognised `action`: non-objects,
/// a missing or non-string action, or an unknown name. Those are ignored by
/// the page rather than reported.
pub fn decode_message(value: Value) -> Result<Option<HudMessage>, ProtocolError> {
    let action = match value.get("action").and_then(Value::as_str) {
        Some(action) if KNOWN_ACTIONS.contains(&action) => action.to_string(),
        _ => return Ok(None),
    };

    let message: HudMessage = serde_json::from_value(value)
        .map_err(|source| ProtocolError::InvalidPayload { action, source })?;
    message.validate().map(Some)
}

/// Decode a message from raw JSON text
pub fn parse_message(raw: &str) -> Result<Option<HudMessage>, ProtocolError> {
    let value: Value = serde_json::from_str(raw).map_err(ProtocolError::Json)?;
    decode_message(value)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Option<HudMessage> {
        decode_message(value).unwrap()
    }

    // -------------------------------------------------------------------------
    // Known actions
    // -------------------------------------------------------------------------

    #[test]
    fn test_decode_toggle_hud() {
        let msg = decode(json!({"action": "toggleHUD", "show": true}));
        assert_eq!(msg, Some(HudMessage::ToggleHud { show: true }));
    }

    #[test]
    fn test_decode_update_timer() {
        let msg = decode(json!({
            "action": "updateTimer",
            "remaining": 754321,
            "checkpoint": 3,
            "total": 10
        }));
        assert_eq!(
            msg,
            Some(HudMessage::UpdateTimer {
                remaining: 754321.0,
                checkpoint: 3.0,
                total: 10.0
            })
        );
    }

    #[test]
    fn test_decode_fractional_numbers() {
        let msg = decode(json!({
            "action": "updateTimer",
            "remaining": 754321.5,
            "checkpoint": 3,
            "total": 10
        }));
        assert!(matches!(
            msg,
            Some(HudMessage::UpdateTimer { remaining, .. }) if remaining == 754321.5
        ));

        let msg = decode(json!({"action": "toggleLobby", "show": true, "timeLeft": 29.5}));
        assert!(matches!(
            msg,
            Some(HudMessage::ToggleLobby { time_left: Some(t), .. }) if t == 29.5
        ));
    }

    #[test]
    fn test_decode_extreme_integers() {
        let msg = decode(json!({
            "action": "updateTimer",
            "remaining": i64::MAX,
            "checkpoint": i64::MIN,
            "total": 10
        }));
        assert!(matches!(
            msg,
            Some(HudMessage::UpdateTimer { checkpoint, .. }) if checkpoint == i64::MIN as f64
        ));
    }

    #[test]
    fn test_decode_toggle_lobby_camel_case() {
        let msg = decode(json!({
            "action": "toggleLobby",
            "show": true,
            "timeLeft": 45,
            "players": [{"name": "Patxi"}, {"name": "Iker"}]
        }));
        match msg {
            Some(HudMessage::ToggleLobby {
                show,
                time_left,
                players,
            }) => {
                assert!(show);
                assert_eq!(time_left, Some(45.0));
                assert_eq!(players.unwrap().len(), 2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_decode_hidden_lobby_needs_no_countdown() {
        let msg = decode(json!({"action": "toggleLobby", "show": false}));
        assert_eq!(
            msg,
            Some(HudMessage::ToggleLobby {
                show: false,
                time_left: None,
                players: None
            })
        );
    }

    #[test]
    fn test_decode_leaderboard_entry_defaults() {
        let msg = decode(json!({
            "action": "updateLeaderboard",
            "show": true,
            "leaderboard": [{"name": "Iker"}]
        }));
        let Some(HudMessage::UpdateLeaderboard {
            leaderboard: Some(entries),
            ..
        }) = msg
        else {
            panic!("expected leaderboard");
        };
        assert!(!entries[0].finished);
        assert_eq!(entries[0].checkpoint, None);
        assert_eq!(entries[0].finish_time, None);
    }

    #[test]
    fn test_decode_notification_defaults_to_info() {
        let msg = decode(json!({"action": "notification", "message": "x"}));
        assert_eq!(
            msg,
            Some(HudMessage::Notification {
                message: "x".to_string(),
                kind: NotificationKind::Info
            })
        );
    }

    #[test]
    fn test_decode_notification_type() {
        let msg = decode(json!({"action": "notification", "message": "GO", "type": "success"}));
        assert!(matches!(
            msg,
            Some(HudMessage::Notification {
                kind: NotificationKind::Success,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let msg = decode(json!({"action": "toggleHUD", "show": false, "race": "bardenas"}));
        assert_eq!(msg, Some(HudMessage::ToggleHud { show: false }));
    }

    // -------------------------------------------------------------------------
    // Ignored input
    // -------------------------------------------------------------------------

    #[test]
    fn test_unknown_action_ignored() {
        assert_eq!(decode(json!({"action": "doesNotExist"})), None);
    }

    #[test]
    fn test_missing_action_ignored() {
        assert_eq!(decode(json!({"show": true})), None);
        assert_eq!(decode(json!({"action": 3})), None);
    }

    #[test]
    fn test_non_object_ignored() {
        assert_eq!(decode(json!("toggleHUD")), None);
        assert_eq!(decode(json!([1, 2, 3])), None);
        assert_eq!(decode(Value::Null), None);
    }

    // -------------------------------------------------------------------------
    // Malformed payloads
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_required_field() {
        let err = decode_message(json!({"action": "updateTimer", "remaining": 1000})).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidPayload { ref action, .. } if action == "updateTimer"));
        assert!(err.to_string().contains("checkpoint"));
    }

    #[test]
    fn test_shown_lobby_requires_countdown() {
        let err = decode_message(json!({"action": "toggleLobby", "show": true})).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MissingField {
                action: "toggleLobby",
                field: "timeLeft"
            }
        ));
    }

    #[test]
    fn test_finished_entry_requires_finish_time() {
        let err = decode_message(json!({
            "action": "updateLeaderboard",
            "show": true,
            "leaderboard": [{"name": "Iker", "finished": true}]
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MissingField {
                field: "finishTime",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_notification_type_rejected() {
        let result = decode_message(json!({"action": "notification", "message": "x", "type": "fancy"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_message("{not json").unwrap_err();
        assert!(matches!(err, ProtocolError::Json(_)));
    }

    #[test]
    fn test_parse_message_text() {
        let msg = parse_message(r#"{"action":"toggleHUD","show":true}"#).unwrap();
        assert_eq!(msg.map(|m| m.action()), Some("toggleHUD"));
    }

    #[test]
    fn test_action_names_match_wire() {
        for action in KNOWN_ACTIONS {
            let value = serde_json::to_value(match action {
                "toggleHUD" => HudMessage::ToggleHud { show: true },
                "updateTimer" => HudMessage::UpdateTimer {
                    remaining: 0.0,
                    checkpoint: 1.0,
                    total: 1.0,
                },
                "toggleLobby" => HudMessage::ToggleLobby {
                    show: false,
                    time_left: None,
                    players: None,
                },
                "updateLeaderboard" => HudMessage::UpdateLeaderboard {
                    show: false,
                    leaderboard: None,
                },
                _ => HudMessage::Notification {
                    message: String::new(),
                    kind: NotificationKind::Info,
                },
            })
            .unwrap();
            assert_eq!(value["action"], action);
        }
    }
}
