use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::model::{Category, Question, QuizSummary};
use crate::time::Clock;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("category {name:?} has no questions")]
    EmptyCategory { name: String },
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a play-through.
///
/// `Answered` sits between recording an answer and drawing the next question:
/// while the driver shows feedback, further `answer` calls are ignored, so a
/// double keypress can never score a question twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Category chosen, nothing drawn yet.
    Ready,
    /// A question is on the table awaiting an answer.
    QuestionActive,
    /// The current question was answered; waiting for the driver to advance.
    Answered,
    /// The session is over; only `summary` remains useful.
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of a category.
///
/// Draws questions uniformly at random without replacement until either the
/// per-session bound is hit or the category runs dry. Restarting is not a
/// transition: drop the session and start a new one.
///
/// Not designed for concurrent use; the driver issues at most one call at a
/// time, yielding between them for its feedback pauses.
#[derive(Debug)]
pub struct QuizSession {
    category: Category,
    max_questions: u32,
    clock: Clock,
    rng: StdRng,
    phase: SessionPhase,
    current: Option<usize>,
    correctly_answered: HashSet<usize>,
    wrongly_answered: HashSet<usize>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Starts a session over `category`, with the elapsed clock at zero.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCategory` if the category holds no
    /// questions.
    pub fn start(
        category: Category,
        max_questions: u32,
        clock: Clock,
    ) -> Result<Self, SessionError> {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::start_with_rng(category, max_questions, clock, rng)
    }

    /// Starts a session with a caller-provided random source, so tests can
    /// replay the exact draw order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyCategory` if the category holds no
    /// questions.
    pub fn start_with_rng(
        category: Category,
        max_questions: u32,
        clock: Clock,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        if category.questions().is_empty() {
            return Err(SessionError::EmptyCategory {
                name: category.name().to_owned(),
            });
        }

        let started_at = clock.now();
        Ok(Self {
            category,
            max_questions,
            clock,
            rng,
            phase: SessionPhase::Ready,
            current: None,
            correctly_answered: HashSet::new(),
            wrongly_answered: HashSet::new(),
            started_at,
            finished_at: None,
        })
    }

    /// Draws the next question, or returns `None` once the session is done.
    ///
    /// Termination: the answered count reached the per-session bound, or no
    /// unanswered question remains. After termination every further call
    /// stays `None`; the driver is expected to call [`finish`](Self::finish).
    ///
    /// Calling this while a question is active and unanswered re-presents
    /// that question instead of drawing again, so a drawn question is never
    /// dropped unanswered.
    pub fn next_question(&mut self) -> Option<&Question> {
        match self.phase {
            SessionPhase::Finished => return None,
            SessionPhase::QuestionActive => {
                return self.current.map(|i| &self.category.questions()[i]);
            }
            SessionPhase::Ready | SessionPhase::Answered => {}
        }

        if self.answered_count() >= self.max_questions as usize {
            self.current = None;
            return None;
        }

        let pool: Vec<usize> = (0..self.category.questions().len())
            .filter(|i| !self.correctly_answered.contains(i) && !self.wrongly_answered.contains(i))
            .collect();
        if pool.is_empty() {
            self.current = None;
            return None;
        }

        let pick = pool[self.rng.random_range(0..pool.len())];
        self.current = Some(pick);
        self.phase = SessionPhase::QuestionActive;
        Some(&self.category.questions()[pick])
    }

    /// Scores the current question against `answer_index`.
    ///
    /// Returns `Some(true)` for a correct answer, `Some(false)` for a wrong
    /// one. The question lands in the matching answered set immediately and
    /// exactly once; advancing is a separate `next_question` call.
    ///
    /// Returns `None` without touching any state when no question is active
    /// (including while feedback for the previous answer is still showing)
    /// or when `answer_index` is not a valid position in the answer list.
    pub fn answer(&mut self, answer_index: usize) -> Option<bool> {
        if self.phase != SessionPhase::QuestionActive {
            return None;
        }
        let current = self.current?;
        let question = &self.category.questions()[current];
        if answer_index >= question.answers().len() {
            return None;
        }

        let correct = question.is_correct(answer_index);
        if correct {
            self.correctly_answered.insert(current);
        } else {
            self.wrongly_answered.insert(current);
        }
        self.phase = SessionPhase::Answered;
        Some(correct)
    }

    /// Stops the elapsed clock and enters `Finished`. Idempotent.
    pub fn finish(&mut self) {
        if self.finished_at.is_none() {
            self.finished_at = Some(self.clock.now());
        }
        self.phase = SessionPhase::Finished;
        self.current = None;
    }

    /// Score and timing for this session.
    ///
    /// Available in any phase; until `finish` is called the elapsed time
    /// keeps running.
    #[must_use]
    pub fn summary(&self) -> QuizSummary {
        QuizSummary::new(
            self.category.name(),
            self.correct_count() as u32,
            self.wrong_count() as u32,
            self.elapsed(),
        )
    }

    /// Wall-clock time since `start`, frozen once `finish` is called.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at.unwrap_or_else(|| self.clock.now()) - self.started_at
    }

    /// Advance a pinned session clock; no effect under the system clock.
    pub fn advance_clock(&mut self, delta: Duration) {
        self.clock.advance(delta);
    }

    // Accessors
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }

    /// The question currently presented. Stays set through the `Answered`
    /// phase so feedback can still render it.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current.map(|i| &self.category.questions()[i])
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correctly_answered.len()
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.wrongly_answered.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.correctly_answered.len() + self.wrongly_answered.len()
    }

    /// Questions of the category not yet answered this session.
    #[must_use]
    pub fn remaining_questions(&self) -> usize {
        self.category.questions().len() - self.answered_count()
    }

    /// 1-based position of the presented question ("question N of M"), or
    /// `None` when nothing is presented.
    #[must_use]
    pub fn question_number(&self) -> Option<usize> {
        self.current?;
        match self.phase {
            SessionPhase::QuestionActive => Some(self.answered_count() + 1),
            _ => Some(self.answered_count()),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
