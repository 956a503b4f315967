use std::time::Duration;

use rand::Rng;

/// Bounded exponential backoff for retriable completion failures.
///
/// `delay = min(initial * 2^attempt, max) + jitter`, where the jitter is up to a
/// tenth of the capped delay. The default performs no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(5),
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_delays(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_delay = initial;
        self.max_delay = max.max(initial);
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 1_u32.checked_shl(attempt).unwrap_or(u32::MAX);
        let capped = self
            .initial_delay
            .saturating_mul(factor)
            .min(self.max_delay);
        let jitter_ceiling = (capped.as_millis() / 10) as u64;
        let jitter = if jitter_ceiling == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_ceiling)
        };
        capped + Duration::from_millis(jitter)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_never_retries() {
        assert_eq!(RetryPolicy::default().max_retries(), 0);
    }

    #[test]
    fn delay_doubles_until_capped() {
        let policy = RetryPolicy::none()
            .with_max_retries(5)
            .with_delays(Duration::from_millis(100), Duration::from_millis(350));

        let first = policy.delay_for_attempt(0);
        assert!(first >= Duration::from_millis(100) && first <= Duration::from_millis(110));

        let second = policy.delay_for_attempt(1);
        assert!(second >= Duration::from_millis(200) && second <= Duration::from_millis(220));

        let capped = policy.delay_for_attempt(10);
        assert!(capped >= Duration::from_millis(350) && capped <= Duration::from_millis(385));
    }

    #[test]
    fn huge_attempt_numbers_do_not_overflow() {
        let policy = RetryPolicy::none().with_max_retries(1);
        assert!(policy.delay_for_attempt(64) <= Duration::from_millis(5500));
    }
}
