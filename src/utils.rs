use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Bounded exponential backoff for status polling.
///
/// The delay starts at `initial_delay`, doubles after every unsuccessful
/// check and never exceeds `max_delay`. At most `max_attempts` checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
            max_attempts: 30,
        }
    }
}

impl PollPolicy {
    /// Delay slept after the `attempt`-th check (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_delay
            .checked_mul(factor)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }
}

/// Runs `check` until it yields `Some`, an error, or the attempts run out.
///
/// `check` receives the 1-based attempt number. Returns `Ok(None)` when
/// every attempt came back not ready.
pub async fn poll_with_backoff<T, E, Fut, F>(
    mut check: F,
    policy: PollPolicy,
) -> Result<Option<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    for attempt in 1..=policy.max_attempts {
        if let Some(value) = check(attempt).await? {
            return Ok(Some(value));
        }
        if attempt < policy.max_attempts {
            let delay = policy.delay_after(attempt);
            debug!(
                "Not ready. Checking again in {:?} (attempt {}/{})",
                delay, attempt, policy.max_attempts
            );
            sleep(delay).await;
        }
    }
    Ok(None)
}
