//! Wire types for the REST endpoints and the real-time channel.
//!
//! Inbound frames use a `{type, data}` envelope. They are parsed into the
//! typed [`ServerEvent`] union right at the boundary; a frame that does not
//! parse is reported as a [`ProtocolError`] and dropped by the caller.

use serde::{Deserialize, Serialize};

use crate::battle::BattleSnapshot;
use crate::puzzle::PuzzleData;

pub const EVENT_CONNECTED: &str = "connected";
pub const EVENT_PLAYER_ACTION: &str = "player_action";
pub const EVENT_ORACLE_DEFEATED: &str = "oracle_defeated";
pub const EVENT_GAME_EVENT: &str = "game_event";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("frame is not a {{type, data}} envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),
    #[error("unknown message type `{0}`")]
    UnknownType(String),
    #[error("payload for `{kind}` does not match its schema: {source}")]
    MalformedPayload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Connection acknowledgement sent by the server right after the socket
/// opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedEvent {
    pub game_id: i64,
    pub player_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleDefeatedEvent {
    pub oracle_name: String,
}

/// Typed union of everything the server pushes. Player-action echoes and
/// generic game events carry free-form payloads by design; the client only
/// logs them.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Connected(ConnectedEvent),
    PlayerAction(serde_json::Value),
    OracleDefeated(OracleDefeatedEvent),
    GameEvent(serde_json::Value),
}

/// Parses one inbound frame.
///
/// # Errors
///
/// Returns a [`ProtocolError`] when the frame is not an envelope, names an
/// unknown type, or carries a payload that fails its schema.
pub fn parse_server_event(raw: &str) -> Result<ServerEvent, ProtocolError> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(ProtocolError::MalformedEnvelope)?;
    match envelope.kind.as_str() {
        EVENT_CONNECTED => serde_json::from_value(envelope.data)
            .map(ServerEvent::Connected)
            .map_err(|source| ProtocolError::MalformedPayload {
                kind: EVENT_CONNECTED,
                source,
            }),
        EVENT_PLAYER_ACTION => Ok(ServerEvent::PlayerAction(envelope.data)),
        EVENT_ORACLE_DEFEATED => serde_json::from_value(envelope.data)
            .map(ServerEvent::OracleDefeated)
            .map_err(|source| ProtocolError::MalformedPayload {
                kind: EVENT_ORACLE_DEFEATED,
                source,
            }),
        EVENT_GAME_EVENT => Ok(ServerEvent::GameEvent(envelope.data)),
        other => Err(ProtocolError::UnknownType(other.to_string())),
    }
}

/// Outbound frame. Only the generic send shape is exercised by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: serde_json::Value,
}

impl ClientMessage {
    #[must_use]
    pub fn new(kind: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// # Errors
    ///
    /// Returns the serialization error when the payload cannot be encoded.
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// REST response shapes.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    pub player_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCreated {
    pub game_id: i64,
}

/// Challenge response: the oracle-state row to solve against plus the
/// generated puzzle content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeGrant {
    pub oracle_state_id: i64,
    pub puzzle: PuzzleData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveVerdict {
    pub valid: bool,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStartGrant {
    pub battle_state: BattleSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightReply {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_defeated_parses_typed() {
        let event = parse_server_event(
            r#"{"type": "oracle_defeated", "data": {"oracle_name": "Nyx"}}"#,
        )
        .expect("typed event");
        assert_eq!(
            event,
            ServerEvent::OracleDefeated(OracleDefeatedEvent {
                oracle_name: String::from("Nyx"),
            })
        );
    }

    #[test]
    fn generic_events_keep_their_payload() {
        let event = parse_server_event(r#"{"type": "game_event", "data": {"stage": 4}}"#)
            .expect("generic event");
        match event {
            ServerEvent::GameEvent(data) => assert_eq!(data["stage"], 4),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_a_typed_error() {
        let err = parse_server_event(r#"{"type": "tremor", "data": {}}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownType(kind) if kind == "tremor"));
    }

    #[test]
    fn malformed_frame_is_a_typed_error() {
        let err = parse_server_event("not json").unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedEnvelope(_)));
    }

    #[test]
    fn malformed_payload_names_the_type() {
        let err = parse_server_event(r#"{"type": "oracle_defeated", "data": {"oracle": 3}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::MalformedPayload {
                kind: EVENT_ORACLE_DEFEATED,
                ..
            }
        ));
    }

    #[test]
    fn client_message_uses_the_envelope_shape() {
        let frame = ClientMessage::new("ping", serde_json::json!({"at": 1}))
            .to_frame()
            .expect("frame");
        assert_eq!(frame, r#"{"type":"ping","data":{"at":1}}"#);
    }

    #[test]
    fn solve_verdict_tolerates_extra_fields() {
        let verdict: SolveVerdict = serde_json::from_str(
            r#"{"valid": false, "attempts": 2, "message": "Incorrect solution. Try again.", "next_phase": "puzzle"}"#,
        )
        .expect("verdict");
        assert!(!verdict.valid);
        assert_eq!(verdict.attempts, 2);
    }
}
