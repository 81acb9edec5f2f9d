//! Poll Policy
//!
//! Fixed-interval polling with a bounded attempt count.

use std::time::Duration;

/// How a submitted task is polled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of status requests
    pub max_attempts: u32,
    /// Wait before each status request
    pub interval: Duration,
    /// Longer wait used once `slow_after` attempts have been made
    pub slow_interval: Option<Duration>,
    /// Attempt count after which `slow_interval` applies
    pub slow_after: u32,
    /// Extra wait after a non-2xx status response
    pub error_backoff: Duration,
    /// Make one more status request when attempts run out
    pub final_check: bool,
}

impl PollPolicy {
    /// Chat replies: 10 attempts, one second apart
    pub fn chat() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_millis(1000),
            slow_interval: None,
            slow_after: 0,
            error_backoff: Duration::from_millis(2000),
            final_check: false,
        }
    }

    /// Code explanations: 40 attempts, slowing to two seconds after 10
    pub fn explainer() -> Self {
        Self {
            max_attempts: 40,
            interval: Duration::from_millis(1000),
            slow_interval: Some(Duration::from_millis(2000)),
            slow_after: 10,
            error_backoff: Duration::from_millis(2000),
            final_check: true,
        }
    }

    /// Wait before attempt number `attempt` (1-based)
    pub fn delay_before(&self, attempt: u32) -> Duration {
        match self.slow_interval {
            Some(slow) if attempt.saturating_sub(1) > self.slow_after => slow,
            _ => self.interval,
        }
    }

    /// Upper bound of time spent waiting when every poll returns pending
    pub fn max_wait(&self) -> Duration {
        (1..=self.max_attempts).map(|n| self.delay_before(n)).sum()
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::chat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_policy_is_flat() {
        let policy = PollPolicy::chat();
        assert_eq!(policy.delay_before(1), Duration::from_secs(1));
        assert_eq!(policy.delay_before(10), Duration::from_secs(1));
        assert_eq!(policy.max_wait(), Duration::from_secs(10));
    }

    #[test]
    fn test_explainer_policy_slows_down() {
        let policy = PollPolicy::explainer();
        assert_eq!(policy.delay_before(1), Duration::from_secs(1));
        assert_eq!(policy.delay_before(11), Duration::from_secs(1));
        assert_eq!(policy.delay_before(12), Duration::from_secs(2));
        assert_eq!(policy.delay_before(40), Duration::from_secs(2));
        // 11 fast waits, 29 slow ones
        assert_eq!(policy.max_wait(), Duration::from_secs(11 + 29 * 2));
    }
}
