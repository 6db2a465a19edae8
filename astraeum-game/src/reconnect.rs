use serde::{Deserialize, Serialize};

const BASE_DELAY_MS: u32 = 1_000;
const MAX_ATTEMPTS: u32 = 5;

/// Backoff schedule for the real-time channel: the n-th reconnect waits
/// `n * base_delay_ms`, and after `max_attempts` failed attempts the client
/// gives up silently. A successful open resets the attempt counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconnectPolicy {
    pub base_delay_ms: u32,
    pub max_attempts: u32,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            base_delay_ms: BASE_DELAY_MS,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl ReconnectPolicy {
    /// Delay before the given 1-based attempt, or `None` once the budget is
    /// spent.
    #[must_use]
    pub const fn next_delay_ms(&self, attempt: u32) -> Option<u32> {
        if attempt == 0 || attempt > self.max_attempts {
            None
        } else {
            Some(self.base_delay_ms * attempt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_increase_strictly_then_stop() {
        let policy = ReconnectPolicy::default();
        let delays: Vec<u32> = (1..=policy.max_attempts)
            .map(|attempt| policy.next_delay_ms(attempt).expect("within budget"))
            .collect();
        assert_eq!(delays, vec![1_000, 2_000, 3_000, 4_000, 5_000]);
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(policy.next_delay_ms(policy.max_attempts + 1).is_none());
    }

    #[test]
    fn attempt_zero_is_not_a_reconnect() {
        assert!(ReconnectPolicy::default().next_delay_ms(0).is_none());
    }
}
