//! Puzzle challenge payload and the local interaction session.
//!
//! Puzzle content comes from the challenge endpoint; the session tracks the
//! purely local side of the interaction: attempt count, staged hint reveals,
//! and the countdown when the oracle imposes a time limit. Running out of
//! time is a forced advance into battle, never a failure state.

use serde::{Deserialize, Serialize};

pub const SOLVED_NOTICE: &str = "Correct! The oracle acknowledges your wisdom.";
pub const TIMEOUT_NOTICE: &str = "Time expired! The oracle gains advantage.";
pub const EMPTY_SOLUTION_NOTICE: &str = "Please enter a solution";

const TIME_CRITICAL_SECS: u32 = 60;

/// Challenge content as produced by the oracle service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    #[serde(alias = "type")]
    pub puzzle_type: String,
    pub description: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub difficulty: u8,
    #[serde(default)]
    pub false_clues: Option<Vec<String>>,
    #[serde(default)]
    pub time_limit: Option<u32>,
}

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer decremented; seconds left.
    Running(u32),
    /// Timer just hit zero. Reported exactly once.
    Expired,
    /// No timer, or the timer already expired.
    Idle,
}

/// One revealed hint plus how many are still hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintReveal {
    pub hint: String,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSession {
    data: PuzzleData,
    attempts: u32,
    hints_revealed: usize,
    hint_locked: bool,
    remaining_time: Option<u32>,
    expired: bool,
}

impl PuzzleSession {
    #[must_use]
    pub fn new(data: PuzzleData) -> Self {
        let remaining_time = data.time_limit;
        Self {
            data,
            attempts: 0,
            hints_revealed: 0,
            hint_locked: false,
            remaining_time,
            expired: false,
        }
    }

    #[must_use]
    pub const fn data(&self) -> &PuzzleData {
        &self.data
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Counts a submission. Incremented for every networked attempt,
    /// accepted or not.
    pub fn record_attempt(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    #[must_use]
    pub fn revealed_hints(&self) -> &[String] {
        &self.data.hints[..self.hints_revealed]
    }

    #[must_use]
    pub fn hints_remaining(&self) -> usize {
        self.data.hints.len() - self.hints_revealed
    }

    #[must_use]
    pub fn can_reveal_hint(&self) -> bool {
        !self.hint_locked && self.hints_revealed < self.data.hints.len()
    }

    /// Reveals the next hidden hint and locks further reveals until
    /// [`Self::end_hint_cooldown`] is called.
    pub fn reveal_next_hint(&mut self) -> Option<HintReveal> {
        if !self.can_reveal_hint() {
            return None;
        }
        let hint = self.data.hints[self.hints_revealed].clone();
        self.hints_revealed += 1;
        self.hint_locked = true;
        Some(HintReveal {
            hint,
            remaining: self.hints_remaining(),
        })
    }

    pub fn end_hint_cooldown(&mut self) {
        self.hint_locked = false;
    }

    #[must_use]
    pub const fn remaining_time(&self) -> Option<u32> {
        self.remaining_time
    }

    #[must_use]
    pub const fn expired(&self) -> bool {
        self.expired
    }

    /// Whether the countdown display should switch to its urgent styling.
    #[must_use]
    pub fn time_critical(&self) -> bool {
        self.remaining_time
            .is_some_and(|secs| secs < TIME_CRITICAL_SECS)
    }

    /// One cooperative second of countdown. The expiry is reported exactly
    /// once; later ticks are idle so a straggling timer cannot re-trigger
    /// the advance.
    pub fn tick(&mut self) -> TickOutcome {
        if self.expired {
            return TickOutcome::Idle;
        }
        let Some(remaining) = self.remaining_time else {
            return TickOutcome::Idle;
        };
        let next = remaining.saturating_sub(1);
        self.remaining_time = Some(next);
        if next == 0 {
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(next)
        }
    }
}

/// `m:ss` rendering of the countdown.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
