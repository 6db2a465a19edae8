//! Astraeum Client Core
//!
//! Platform-agnostic client logic for Thirteen Oracles of Astraeum.
//! This crate owns the typed data model, the phase state machine, the
//! session store, and the wire protocol types. All game rules are resolved
//! server-side; nothing here computes combat or puzzle outcomes.

pub mod battle;
pub mod config;
pub mod game;
pub mod inventory;
pub mod oracle;
pub mod phase;
pub mod player;
pub mod protocol;
pub mod puzzle;
pub mod reconnect;
pub mod session;
pub mod validators;

// Re-export commonly used types
pub use battle::{
    BattleAction, BattleContext, BattleSnapshot, BattleStatus, OutcomeEffects, health_percent,
    resolve_outcome,
};
pub use config::TimingConfig;
pub use game::{Difficulty, GameSnapshot, Resources, SnapshotError};
pub use inventory::{ArmyUnit, Inventory};
pub use oracle::{ChallengeRejection, OracleStatus, OracleSummary, ensure_challengeable};
pub use phase::{Phase, PhaseTag};
pub use player::Player;
pub use protocol::{
    Acknowledgement, BattleStartGrant, ChallengeGrant, ClientMessage, GameCreated, InsightReply,
    ProtocolError, ServerEvent, SolveVerdict, TokenGrant, parse_server_event,
};
pub use puzzle::{HintReveal, PuzzleData, PuzzleSession, TickOutcome, format_time};
pub use reconnect::ReconnectPolicy;
pub use session::{Session, SessionAction};
pub use validators::{
    ValidationError, validate_difficulty, validate_email, validate_password, validate_solution,
    validate_token_format, validate_username,
};
