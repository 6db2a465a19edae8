use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::oracle::OracleSummary;

pub const STAGE_MIN: u8 = 1;
pub const STAGE_MAX: u8 = 13;

/// Resource counters carried by the game snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Resources {
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub insight_tokens: i64,
}

/// Server-authoritative progress record. Replaced wholesale on every fetch;
/// the client never merges partial updates into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: i64,
    pub current_stage: u8,
    pub oracles_defeated: u8,
    #[serde(default)]
    pub resources: Resources,
    #[serde(default)]
    pub oracles: Vec<OracleSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("current_stage {0} outside {STAGE_MIN}..={STAGE_MAX}")]
    StageOutOfRange(u8),
    #[error("oracles_defeated {count} exceeds oracle list of {total}")]
    DefeatCountExceedsOracles { count: u8, total: usize },
    #[error("snapshot carries no oracle list")]
    NoOracles,
}

impl GameSnapshot {
    /// Boundary validation applied when a snapshot arrives from the network.
    /// A snapshot that fails here is rejected, not rendered.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if !(STAGE_MIN..=STAGE_MAX).contains(&self.current_stage) {
            return Err(SnapshotError::StageOutOfRange(self.current_stage));
        }
        if self.oracles.is_empty() {
            return Err(SnapshotError::NoOracles);
        }
        if usize::from(self.oracles_defeated) > self.oracles.len() {
            return Err(SnapshotError::DefeatCountExceedsOracles {
                count: self.oracles_defeated,
                total: self.oracles.len(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn oracle(&self, oracle_id: i64) -> Option<&OracleSummary> {
        self.oracles.iter().find(|oracle| oracle.id == oracle_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(id: i64, defeated: bool) -> OracleSummary {
        OracleSummary {
            id,
            name: format!("Oracle {id}"),
            domain: String::from("Test"),
            title: String::from("Title"),
            description: String::new(),
            is_defeated: defeated,
            is_hostile: false,
        }
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            game_id: 1,
            current_stage: 1,
            oracles_defeated: 1,
            resources: Resources {
                gold: 100,
                insight_tokens: 1,
            },
            oracles: vec![oracle(1, true), oracle(2, false)],
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        assert!(snapshot().validate().is_ok());
    }

    #[test]
    fn stage_bounds_are_enforced() {
        let mut snap = snapshot();
        snap.current_stage = 0;
        assert_eq!(snap.validate(), Err(SnapshotError::StageOutOfRange(0)));
        snap.current_stage = 14;
        assert_eq!(snap.validate(), Err(SnapshotError::StageOutOfRange(14)));
    }

    #[test]
    fn defeat_count_cannot_exceed_oracle_list() {
        let mut snap = snapshot();
        snap.oracles_defeated = 3;
        assert_eq!(
            snap.validate(),
            Err(SnapshotError::DefeatCountExceedsOracles { count: 3, total: 2 })
        );
    }

    #[test]
    fn empty_oracle_list_is_rejected() {
        let mut snap = snapshot();
        snap.oracles.clear();
        snap.oracles_defeated = 0;
        assert_eq!(snap.validate(), Err(SnapshotError::NoOracles));
    }

    #[test]
    fn oracle_lookup_by_id() {
        let snap = snapshot();
        assert_eq!(snap.oracle(2).map(|o| o.id), Some(2));
        assert!(snap.oracle(99).is_none());
    }

    #[test]
    fn difficulty_round_trips() {
        for (text, value) in [
            ("easy", Difficulty::Easy),
            ("normal", Difficulty::Normal),
            ("hard", Difficulty::Hard),
        ] {
            assert_eq!(text.parse::<Difficulty>(), Ok(value));
            assert_eq!(value.as_str(), text);
        }
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}
