use std::time::Duration;

use tokio::time::sleep;

/// The transition a feedback pause precedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    /// Highlighting the chosen category before the first question appears.
    CategorySelected,
    /// Showing right/wrong feedback on the chosen answer.
    AnswerRevealed,
    /// The gap before the next question replaces the feedback.
    Advance,
}

/// Feedback pauses the session driver awaits between state transitions.
///
/// The state machine itself never sleeps; the driver calls `pause` at its
/// scheduling points and resumes the same sequence afterwards. A pause that
/// has started runs to completion — there is no cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    category_select: Duration,
    answer_reveal: Duration,
    advance: Duration,
}

impl Pacing {
    #[must_use]
    pub fn new(category_select: Duration, answer_reveal: Duration, advance: Duration) -> Self {
        Self {
            category_select,
            answer_reveal,
            advance,
        }
    }

    /// Zero-length pauses for tests and headless drivers.
    #[must_use]
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    /// Wait out the pause configured for `pause`.
    pub async fn pause(&self, pause: Pause) {
        let duration = match pause {
            Pause::CategorySelected => self.category_select,
            Pause::AnswerRevealed => self.answer_reveal,
            Pause::Advance => self.advance,
        };
        if !duration.is_zero() {
            sleep(duration).await;
        }
    }
}

impl Default for Pacing {
    /// The rhythm keyboard play was tuned to: a short category highlight,
    /// half a second of answer feedback, then a longer beat before moving on.
    fn default() -> Self {
        Self::new(
            Duration::from_millis(300),
            Duration::from_millis(500),
            Duration::from_millis(1500),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn none_returns_immediately() {
        let started = std::time::Instant::now();
        let pacing = Pacing::none();
        pacing.pause(Pause::CategorySelected).await;
        pacing.pause(Pause::AnswerRevealed).await;
        pacing.pause(Pause::Advance).await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn default_pauses_run_to_completion() {
        let pacing = Pacing::default();
        let started = tokio::time::Instant::now();
        pacing.pause(Pause::AnswerRevealed).await;
        pacing.pause(Pause::Advance).await;
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
    }
}
