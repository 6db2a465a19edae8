//! Battle snapshot types and the terminal-outcome resolver.
//!
//! All combat resolution happens server-side; each action call replaces the
//! previous snapshot wholesale. The resolver below only decides what the
//! client does when a snapshot reports a terminal status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::TimingConfig;

/// Reference health used to scale the combat bars.
pub const HEALTH_BAR_SCALE: i64 = 1_000;

pub const VICTORY_NOTICE: &str = "Victory! Oracle defeated!";
pub const DEFEAT_NOTICE: &str = "Defeat! Your army has fallen...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    InProgress,
    Victory,
    Defeat,
}

impl BattleStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Player action for one combat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BattleAction {
    #[default]
    Attack,
    Defend,
    SpecialAbility,
}

impl BattleAction {
    pub const ALL: [Self; 3] = [Self::Attack, Self::Defend, Self::SpecialAbility];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::SpecialAbility => "special_ability",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defend => "Defend",
            Self::SpecialAbility => "Special Ability",
        }
    }
}

impl fmt::Display for BattleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BattleAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(Self::Attack),
            "defend" => Ok(Self::Defend),
            "special_ability" => Ok(Self::SpecialAbility),
            _ => Err(()),
        }
    }
}

/// Server-reported combat state. The log is the trailing window the server
/// chose to send; the client appends nothing to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub turn: u32,
    pub player_health: i64,
    pub enemy_health: i64,
    #[serde(default)]
    pub battle_log: Vec<String>,
    pub status: BattleStatus,
}

/// Battle payload carried by the battle phase. `snapshot` stays `None` while
/// the start request is in flight, which renders the preparing placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BattleContext {
    pub snapshot: Option<BattleSnapshot>,
}

impl BattleContext {
    #[must_use]
    pub const fn preparing() -> Self {
        Self { snapshot: None }
    }

    #[must_use]
    pub const fn is_preparing(&self) -> bool {
        self.snapshot.is_none()
    }
}

/// What the client must do after receiving a terminal battle snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeEffects {
    pub notification: &'static str,
    /// Victory is confirmed to the server with exactly one defeat call;
    /// a loss is not reported.
    pub confirm_defeat: bool,
    pub return_delay_ms: u32,
}

/// Maps a snapshot status onto the client-side effects. `None` while the
/// battle is still in progress.
#[must_use]
pub fn resolve_outcome(status: BattleStatus, timing: &TimingConfig) -> Option<OutcomeEffects> {
    match status {
        BattleStatus::InProgress => None,
        BattleStatus::Victory => Some(OutcomeEffects {
            notification: VICTORY_NOTICE,
            confirm_defeat: true,
            return_delay_ms: timing.battle_return_ms,
        }),
        BattleStatus::Defeat => Some(OutcomeEffects {
            notification: DEFEAT_NOTICE,
            confirm_defeat: false,
            return_delay_ms: timing.battle_return_ms,
        }),
    }
}

/// Health bar width in percent against the fixed combat scale.
#[must_use]
pub fn health_percent(health: i64) -> f64 {
    let percent = health as f64 / HEALTH_BAR_SCALE as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_has_no_effects() {
        let timing = TimingConfig::default_config();
        assert!(resolve_outcome(BattleStatus::InProgress, &timing).is_none());
    }

    #[test]
    fn victory_confirms_defeat_exactly_once() {
        let timing = TimingConfig::default_config();
        let effects = resolve_outcome(BattleStatus::Victory, &timing).expect("terminal");
        assert!(effects.confirm_defeat);
        assert_eq!(effects.notification, VICTORY_NOTICE);
        assert_eq!(effects.return_delay_ms, timing.battle_return_ms);
    }

    #[test]
    fn defeat_is_not_reported_to_server() {
        let timing = TimingConfig::default_config();
        let effects = resolve_outcome(BattleStatus::Defeat, &timing).expect("terminal");
        assert!(!effects.confirm_defeat);
        assert_eq!(effects.notification, DEFEAT_NOTICE);
    }

    #[test]
    fn health_percent_is_clamped() {
        assert!((health_percent(500) - 50.0).abs() < f64::EPSILON);
        assert!((health_percent(-30) - 0.0).abs() < f64::EPSILON);
        assert!((health_percent(2_500) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn action_wire_names_round_trip() {
        for action in BattleAction::ALL {
            assert_eq!(action.as_str().parse::<BattleAction>(), Ok(action));
        }
        assert!("flee".parse::<BattleAction>().is_err());
    }

    #[test]
    fn snapshot_deserializes_wire_shape() {
        let snapshot: BattleSnapshot = serde_json::from_str(
            r#"{
                "turn": 3,
                "player_health": 820,
                "enemy_health": 410,
                "battle_log": ["Turn 2: Player dealt 90 damage"],
                "status": "in_progress"
            }"#,
        )
        .expect("wire snapshot");
        assert_eq!(snapshot.status, BattleStatus::InProgress);
        assert_eq!(snapshot.battle_log.len(), 1);
    }
}
