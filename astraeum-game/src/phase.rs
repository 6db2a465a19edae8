use std::fmt;

use crate::battle::BattleContext;
use crate::puzzle::PuzzleSession;

/// Top-level UI mode. Each variant carries the data that mode needs, so a
/// phase can never be entered without its payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Puzzle(PuzzleSession),
    Battle(BattleContext),
    Confrontation,
}

impl Phase {
    #[must_use]
    pub const fn tag(&self) -> PhaseTag {
        match self {
            Self::Menu => PhaseTag::Menu,
            Self::Puzzle(_) => PhaseTag::Puzzle,
            Self::Battle(_) => PhaseTag::Battle,
            Self::Confrontation => PhaseTag::Confrontation,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&PuzzleSession> {
        match self {
            Self::Puzzle(session) => Some(session),
            _ => None,
        }
    }

    pub fn puzzle_mut(&mut self) -> Option<&mut PuzzleSession> {
        match self {
            Self::Puzzle(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub const fn battle(&self) -> Option<&BattleContext> {
        match self {
            Self::Battle(ctx) => Some(ctx),
            _ => None,
        }
    }
}

/// Payload-free discriminant, used for display and route-style matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTag {
    Menu,
    Puzzle,
    Battle,
    Confrontation,
}

impl PhaseTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Puzzle => "puzzle",
            Self::Battle => "battle",
            Self::Confrontation => "confrontation",
        }
    }
}

impl fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::PuzzleData;

    fn puzzle_session() -> PuzzleSession {
        PuzzleSession::new(PuzzleData {
            puzzle_type: String::from("logic"),
            description: String::from("trial"),
            hints: Vec::new(),
            difficulty: 1,
            false_clues: None,
            time_limit: None,
        })
    }

    #[test]
    fn tags_cover_every_phase() {
        assert_eq!(Phase::Menu.tag(), PhaseTag::Menu);
        assert_eq!(Phase::Puzzle(puzzle_session()).tag(), PhaseTag::Puzzle);
        assert_eq!(
            Phase::Battle(BattleContext::preparing()).tag(),
            PhaseTag::Battle
        );
        assert_eq!(Phase::Confrontation.tag(), PhaseTag::Confrontation);
    }

    #[test]
    fn payload_accessors_only_match_their_variant() {
        let phase = Phase::Puzzle(puzzle_session());
        assert!(phase.puzzle().is_some());
        assert!(phase.battle().is_none());
        assert!(Phase::Menu.puzzle().is_none());
    }
}
