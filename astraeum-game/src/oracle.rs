use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the thirteen oracle encounters as reported in a game snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleSummary {
    pub id: i64,
    pub name: String,
    pub domain: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_defeated: bool,
    #[serde(default)]
    pub is_hostile: bool,
}

impl OracleSummary {
    #[must_use]
    pub const fn status(&self) -> OracleStatus {
        if self.is_defeated {
            OracleStatus::Defeated
        } else if self.is_hostile {
            OracleStatus::Hostile
        } else {
            OracleStatus::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleStatus {
    Neutral,
    Hostile,
    Defeated,
}

impl OracleStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Hostile => "Hostile",
            Self::Defeated => "Defeated",
        }
    }
}

impl fmt::Display for OracleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a challenge request is rejected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChallengeRejection {
    #[error("Oracle already defeated")]
    AlreadyDefeated,
}

/// Guard applied when the player picks an oracle on the map. A defeated
/// oracle cannot be challenged again; hostility does not block a challenge.
///
/// # Errors
///
/// Returns a rejection describing why the oracle cannot be challenged.
pub fn ensure_challengeable(oracle: &OracleSummary) -> Result<(), ChallengeRejection> {
    if oracle.is_defeated {
        return Err(ChallengeRejection::AlreadyDefeated);
    }
    Ok(())
}
