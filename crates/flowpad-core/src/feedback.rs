//! Transient "Copied!" feedback.
//!
//! Every copy hands out a fresh [`Ticket`]. The timer started for a copy
//! carries its ticket and reports it back when it fires; only the most recent
//! ticket may clear the flag. A second copy inside the window therefore
//! restarts the delay instead of being cut short by the first timer.

use std::future::Future;
use std::time::Duration;

/// Identifies one copy activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// The copy feedback flag and its reset delay.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    delay: Duration,
    generation: u64,
    active: bool,
}

impl CopyFeedback {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            active: false,
        }
    }

    /// Sets the flag and invalidates any pending reset.
    pub fn activate(&mut self) -> Ticket {
        self.generation += 1;
        self.active = true;
        Ticket(self.generation)
    }

    /// Clears the flag if `ticket` is the latest one.
    ///
    /// Returns `true` if the flag was cleared.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if !self.active || ticket.0 != self.generation {
            tracing::trace!(?ticket, "ignoring stale copy feedback timer");
            return false;
        }
        self.active = false;
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sleeps for the configured delay, then yields `ticket`.
    ///
    /// Feed the result to [`expire`](Self::expire).
    pub fn reset_after(&self, ticket: Ticket) -> impl Future<Output = Ticket> + Send + use<> {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            ticket
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn test_activate_sets_flag_immediately() {
        let mut feedback = CopyFeedback::new(DELAY);
        assert!(!feedback.is_active());
        feedback.activate();
        assert!(feedback.is_active());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut feedback = CopyFeedback::new(DELAY);
        let first = feedback.activate();
        let second = feedback.activate();

        assert!(!feedback.expire(first));
        assert!(feedback.is_active());
        assert!(feedback.expire(second));
        assert!(!feedback.is_active());
        assert!(!feedback.expire(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resets_exactly_after_delay() {
        let mut feedback = CopyFeedback::new(DELAY);
        let ticket = feedback.activate();
        let started = Instant::now();

        let fired = feedback.reset_after(ticket).await;

        assert_eq!(started.elapsed(), DELAY);
        assert!(feedback.expire(fired));
        assert!(!feedback.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactivation_restarts_delay() {
        let mut feedback = CopyFeedback::new(DELAY);
        let started = Instant::now();

        let first = feedback.activate();
        let first_timer = tokio::spawn(feedback.reset_after(first));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        let second = feedback.activate();
        let second_timer = tokio::spawn(feedback.reset_after(second));

        let fired = first_timer.await.unwrap();
        assert_eq!(started.elapsed(), DELAY);
        assert!(!feedback.expire(fired));
        assert!(feedback.is_active());

        let fired = second_timer.await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(3500));
        assert!(feedback.expire(fired));
        assert!(!feedback.is_active());
    }
}
