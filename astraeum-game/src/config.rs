use serde::{Deserialize, Serialize};

const NOTIFICATION_MS: u32 = 3_000;
const SOLVE_ADVANCE_MS: u32 = 2_000;
const BATTLE_RETURN_MS: u32 = 3_000;
const HINT_COOLDOWN_MS: u32 = 5_000;
const PUZZLE_TICK_MS: u32 = 1_000;
const DEFEAT_BROADCAST_MS: u32 = 5_000;

/// Fixed delays used by the interaction flows. Loaded from a static asset by
/// the web crate; every field falls back to the stock value when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long a transient notification stays on screen.
    pub notification_ms: u32,
    /// Delay between a correct solution (or timeout) and the battle phase.
    pub solve_advance_ms: u32,
    /// Delay between a terminal battle outcome and the return to the map.
    pub battle_return_ms: u32,
    /// Lockout after revealing a hint before the next reveal is allowed.
    pub hint_cooldown_ms: u32,
    /// Puzzle countdown resolution.
    pub puzzle_tick_ms: u32,
    /// Display time for an oracle-defeated broadcast from another player.
    pub defeat_broadcast_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl TimingConfig {
    #[must_use]
    pub const fn default_config() -> Self {
        Self {
            notification_ms: NOTIFICATION_MS,
            solve_advance_ms: SOLVE_ADVANCE_MS,
            battle_return_ms: BATTLE_RETURN_MS,
            hint_cooldown_ms: HINT_COOLDOWN_MS,
            puzzle_tick_ms: PUZZLE_TICK_MS,
            defeat_broadcast_ms: DEFEAT_BROADCAST_MS,
        }
    }

    /// # Errors
    ///
    /// Returns the parse error when the JSON does not describe a timing
    /// config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_values_match_the_flows() {
        let timing = TimingConfig::default_config();
        assert_eq!(timing.solve_advance_ms, 2_000);
        assert_eq!(timing.battle_return_ms, 3_000);
        assert_eq!(timing.hint_cooldown_ms, 5_000);
        assert_eq!(timing.puzzle_tick_ms, 1_000);
    }

    #[test]
    fn partial_json_keeps_stock_fallbacks() {
        let timing = TimingConfig::from_json(r#"{"notification_ms": 1500}"#).expect("partial");
        assert_eq!(timing.notification_ms, 1_500);
        assert_eq!(timing.battle_return_ms, 3_000);
    }
}
