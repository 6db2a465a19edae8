//! Tab-wide client state and its typed reducer.
//!
//! Every mutation goes through [`Session::apply`], so a phase and the data
//! it depends on are always published together. Actions fired against a
//! phase they do not belong to leave the session unchanged, which makes a
//! straggling response or timer from a previous phase harmless.

use crate::battle::{BattleContext, BattleSnapshot};
use crate::game::GameSnapshot;
use crate::oracle::OracleSummary;
use crate::phase::Phase;
use crate::player::Player;
use crate::protocol::ChallengeGrant;
use crate::puzzle::PuzzleSession;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub player: Option<Player>,
    pub game: Option<GameSnapshot>,
    pub selected_oracle: Option<OracleSummary>,
    /// Server-side row the current puzzle is solved against.
    pub oracle_state_id: Option<i64>,
    pub phase: Phase,
    pub show_inventory: bool,
    pub notification: Option<String>,
}

/// Cross-field state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SignedIn(Player),
    /// Wholesale replacement of the progress record; no partial merge.
    GameLoaded(GameSnapshot),
    /// Challenge accepted on the map: selects the oracle and enters the
    /// puzzle phase with the server-provided content in one update.
    ChallengeAccepted {
        oracle: OracleSummary,
        grant: ChallengeGrant,
    },
    /// Networked submission left; counted whether or not it is accepted.
    SolutionAttempted,
    /// Next hidden hint exposed; starts the reveal cooldown.
    HintRevealed,
    HintCooldownElapsed,
    /// One second of puzzle countdown.
    CountdownTicked,
    /// Correct solution or countdown expiry; both advance identically.
    AdvancedToBattle,
    BattleSnapshotReplaced(BattleSnapshot),
    /// Terminal battle outcome displayed; back to the map. Clears the
    /// selected oracle so no stale encounter data survives the return.
    ReturnedToMenu,
    ConfrontationReached,
    InventoryShown(bool),
    Notified(String),
    NotificationCleared,
    SignedOut,
}

impl Session {
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SignedIn(player) => self.player = Some(player),
            SessionAction::GameLoaded(snapshot) => self.game = Some(snapshot),
            SessionAction::ChallengeAccepted { oracle, grant } => {
                self.selected_oracle = Some(oracle);
                self.oracle_state_id = Some(grant.oracle_state_id);
                self.phase = Phase::Puzzle(PuzzleSession::new(grant.puzzle));
            }
            SessionAction::SolutionAttempted => {
                if let Some(puzzle) = self.phase.puzzle_mut() {
                    puzzle.record_attempt();
                }
            }
            SessionAction::HintRevealed => {
                if let Some(puzzle) = self.phase.puzzle_mut() {
                    puzzle.reveal_next_hint();
                }
            }
            SessionAction::HintCooldownElapsed => {
                if let Some(puzzle) = self.phase.puzzle_mut() {
                    puzzle.end_hint_cooldown();
                }
            }
            SessionAction::CountdownTicked => {
                if let Some(puzzle) = self.phase.puzzle_mut() {
                    puzzle.tick();
                }
            }
            SessionAction::AdvancedToBattle => {
                if matches!(self.phase, Phase::Puzzle(_)) {
                    self.phase = Phase::Battle(BattleContext::preparing());
                }
            }
            SessionAction::BattleSnapshotReplaced(snapshot) => {
                if let Phase::Battle(ctx) = &mut self.phase {
                    ctx.snapshot = Some(snapshot);
                }
            }
            SessionAction::ReturnedToMenu => {
                self.phase = Phase::Menu;
                self.selected_oracle = None;
                self.oracle_state_id = None;
            }
            SessionAction::ConfrontationReached => {
                if matches!(self.phase, Phase::Puzzle(_) | Phase::Battle(_)) {
                    self.phase = Phase::Confrontation;
                }
            }
            SessionAction::InventoryShown(show) => self.show_inventory = show,
            SessionAction::Notified(message) => self.notification = Some(message),
            SessionAction::NotificationCleared => self.notification = None,
            SessionAction::SignedOut => *self = Self::default(),
        }
    }

    #[must_use]
    pub fn game_id(&self) -> Option<i64> {
        self.game.as_ref().map(|game| game.game_id)
    }

    /// Identity pair for the real-time channel, available once both the
    /// player and the game are known.
    #[must_use]
    pub fn channel_identity(&self) -> Option<(i64, i64)> {
        let game_id = self.game_id()?;
        let player_id = self.player.as_ref()?.id;
        Some((game_id, player_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleStatus;
    use crate::phase::PhaseTag;
    use crate::puzzle::PuzzleData;

    fn oracle() -> OracleSummary {
        OracleSummary {
            id: 7,
            name: String::from("Chronos"),
            domain: String::from("Time"),
            title: String::from("Keeper of the Hourglass"),
            description: String::new(),
            is_defeated: false,
            is_hostile: false,
        }
    }

    fn grant() -> ChallengeGrant {
        ChallengeGrant {
            oracle_state_id: 41,
            puzzle: PuzzleData {
                puzzle_type: String::from("time_sequence"),
                description: String::from("Solve the temporal paradox"),
                hints: vec![String::from("Consider the fundamental pattern")],
                difficulty: 5,
                false_clues: None,
                time_limit: Some(180),
            },
        }
    }

    fn battle_snapshot(status: BattleStatus) -> BattleSnapshot {
        BattleSnapshot {
            turn: 1,
            player_health: 900,
            enemy_health: 750,
            battle_log: Vec::new(),
            status,
        }
    }

    #[test]
    fn challenge_bundles_oracle_and_puzzle() {
        let mut session = Session::default();
        session.apply(SessionAction::ChallengeAccepted {
            oracle: oracle(),
            grant: grant(),
        });
        assert_eq!(session.phase.tag(), PhaseTag::Puzzle);
        assert_eq!(session.selected_oracle.as_ref().map(|o| o.id), Some(7));
        assert_eq!(session.oracle_state_id, Some(41));
        // Payload is present the moment the phase is.
        assert!(session.phase.puzzle().is_some());
    }

    #[test]
    fn advance_to_battle_only_fires_from_puzzle() {
        let mut session = Session::default();
        session.apply(SessionAction::AdvancedToBattle);
        assert_eq!(session.phase.tag(), PhaseTag::Menu);

        session.apply(SessionAction::ChallengeAccepted {
            oracle: oracle(),
            grant: grant(),
        });
        session.apply(SessionAction::AdvancedToBattle);
        assert_eq!(session.phase.tag(), PhaseTag::Battle);
        assert!(session.phase.battle().is_some_and(BattleContext::is_preparing));
    }

    #[test]
    fn stale_battle_snapshot_after_menu_return_is_dropped() {
        let mut session = Session::default();
        session.apply(SessionAction::ChallengeAccepted {
            oracle: oracle(),
            grant: grant(),
        });
        session.apply(SessionAction::AdvancedToBattle);
        session.apply(SessionAction::ReturnedToMenu);

        session.apply(SessionAction::BattleSnapshotReplaced(battle_snapshot(
            BattleStatus::InProgress,
        )));
        assert_eq!(session.phase.tag(), PhaseTag::Menu);
    }

    #[test]
    fn menu_return_clears_selected_oracle() {
        let mut session = Session::default();
        session.apply(SessionAction::ChallengeAccepted {
            oracle: oracle(),
            grant: grant(),
        });
        session.apply(SessionAction::ReturnedToMenu);
        assert!(session.selected_oracle.is_none());
        assert!(session.oracle_state_id.is_none());
        assert_eq!(session.phase, Phase::Menu);
    }

    #[test]
    fn confrontation_reachable_from_puzzle_and_battle_only() {
        let mut session = Session::default();
        session.apply(SessionAction::ConfrontationReached);
        assert_eq!(session.phase.tag(), PhaseTag::Menu);

        session.apply(SessionAction::ChallengeAccepted {
            oracle: oracle(),
            grant: grant(),
        });
        session.apply(SessionAction::ConfrontationReached);
        assert_eq!(session.phase.tag(), PhaseTag::Confrontation);
    }

    #[test]
    fn puzzle_events_route_into_the_active_session() {
        let mut session = Session::default();
        // No puzzle: all of these are inert.
        session.apply(SessionAction::SolutionAttempted);
        session.apply(SessionAction::CountdownTicked);
        assert_eq!(session, Session::default());

        session.apply(SessionAction::ChallengeAccepted {
            oracle: oracle(),
            grant: grant(),
        });
        session.apply(SessionAction::SolutionAttempted);
        session.apply(SessionAction::CountdownTicked);
        session.apply(SessionAction::HintRevealed);

        let puzzle = session.phase.puzzle().expect("puzzle phase");
        assert_eq!(puzzle.attempts(), 1);
        assert_eq!(puzzle.remaining_time(), Some(179));
        assert_eq!(puzzle.revealed_hints().len(), 1);
        assert!(!puzzle.can_reveal_hint());

        session.apply(SessionAction::HintCooldownElapsed);
        assert!(!session.phase.puzzle().expect("puzzle").can_reveal_hint());
    }

    #[test]
    fn notification_last_write_wins() {
        let mut session = Session::default();
        session.apply(SessionAction::Notified(String::from("first")));
        session.apply(SessionAction::Notified(String::from("second")));
        assert_eq!(session.notification.as_deref(), Some("second"));
        session.apply(SessionAction::NotificationCleared);
        assert!(session.notification.is_none());
    }

    #[test]
    fn sign_out_resets_everything() {
        let mut session = Session::default();
        session.apply(SessionAction::SignedIn(Player {
            id: 3,
            username: String::from("pythia"),
            email: String::new(),
            display_name: None,
            total_games: 0,
            games_won: 0,
            oracles_defeated: 0,
        }));
        session.apply(SessionAction::InventoryShown(true));
        session.apply(SessionAction::SignedOut);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn channel_identity_needs_player_and_game() {
        let mut session = Session::default();
        assert!(session.channel_identity().is_none());
        session.apply(SessionAction::SignedIn(Player {
            id: 3,
            username: String::from("pythia"),
            email: String::new(),
            display_name: None,
            total_games: 0,
            games_won: 0,
            oracles_defeated: 0,
        }));
        assert!(session.channel_identity().is_none());
        session.apply(SessionAction::GameLoaded(GameSnapshot {
            game_id: 11,
            current_stage: 1,
            oracles_defeated: 0,
            resources: crate::game::Resources::default(),
            oracles: vec![oracle()],
        }));
        assert_eq!(session.channel_identity(), Some((11, 3)));
    }
}
