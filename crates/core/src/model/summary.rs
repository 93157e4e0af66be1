use chrono::Duration;

/// Result sheet for one play-through: score and wall-clock time.
///
/// Built from the two disjoint answered sets, so `correct <= total` holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    category_name: String,
    correct: u32,
    total: u32,
    elapsed: Duration,
}

impl QuizSummary {
    #[must_use]
    pub fn new(category_name: impl Into<String>, correct: u32, wrong: u32, elapsed: Duration) -> Self {
        Self {
            category_name: category_name.into(),
            correct,
            total: correct + wrong,
            elapsed,
        }
    }

    // Accessors
    #[must_use]
    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Total answered this session, correct and wrong combined.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Integer score percentage; 0 when nothing was answered.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.correct * 100 / self.total
        }
    }

    /// Elapsed time rendered as `mm:ss` for the results screen.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        let secs = self.elapsed.num_seconds().max(0);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_and_percentage() {
        let summary = QuizSummary::new("Science", 3, 1, Duration::seconds(42));
        assert_eq!(summary.category_name(), "Science");
        assert_eq!(summary.correct(), 3);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.percentage(), 75);
    }

    #[test]
    fn summary_percentage_guards_empty_session() {
        let summary = QuizSummary::new("Science", 0, 0, Duration::zero());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.percentage(), 0);
    }

    #[test]
    fn summary_elapsed_display() {
        let summary = QuizSummary::new("History", 1, 0, Duration::seconds(125));
        assert_eq!(summary.elapsed_display(), "02:05");

        let summary = QuizSummary::new("History", 1, 0, Duration::seconds(-3));
        assert_eq!(summary.elapsed_display(), "00:00");
    }
}
