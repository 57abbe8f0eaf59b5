//! Quiz session flow and progress tracking.
//!
//! # Responsibility
//! - Run one quiz attempt: answer selection, submission, skip, hints, stats.
//! - Track per-quiz completion progress across attempts.
//!
//! # Invariants
//! - Quiz state never touches atom builder state.
//! - A completed session ignores further submissions and skips.
//! - Progress `answered` never reports a quiz complete before `total_questions`.
//!
//! Timestamps are caller-supplied epoch milliseconds.

use crate::model::quiz::{quiz_questions, QuizQuestion, DEFAULT_QUIZ_ID, QUIZ_BANK};
use log::info;
use std::collections::BTreeMap;

/// One logged answer or skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    /// `None` when skipped.
    pub selected_answer: Option<usize>,
    pub is_correct: bool,
    pub skipped: bool,
    pub hint_used: bool,
}

/// Summary figures for the current attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizStats {
    pub total_questions: usize,
    pub questions_answered: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub skipped_questions: usize,
    /// Rounded percentage of logged answers that were correct.
    pub accuracy: u32,
    /// Rounded seconds.
    pub time_elapsed_secs: u64,
    pub average_secs_per_question: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceRating {
    Excellent,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl PerformanceRating {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Excellent,
            75..=89 => Self::GreatJob,
            60..=74 => Self::GoodEffort,
            _ => Self::KeepPracticing,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::GreatJob => "Great job!",
            Self::GoodEffort => "Good effort!",
            Self::KeepPracticing => "Keep practicing!",
        }
    }
}

/// What a submit or skip did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub record: AnswerRecord,
    /// Questions answered or skipped so far.
    pub answered_count: usize,
    pub completed: bool,
}

/// One attempt at a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz_id: &'static str,
    questions: &'static [QuizQuestion],
    current_index: usize,
    selected_answer: Option<usize>,
    score: usize,
    started: bool,
    completed: bool,
    started_at_ms: Option<i64>,
    completed_at_ms: Option<i64>,
    answers: Vec<AnswerRecord>,
    hint_used: bool,
}

impl QuizSession {
    /// Creates a session; unknown ids fall back to `DEFAULT_QUIZ_ID`.
    pub fn new(quiz_id: &str) -> Self {
        let (quiz_id, questions) = QUIZ_BANK
            .iter()
            .find(|quiz| quiz.id == quiz_id)
            .map(|quiz| (quiz.id, quiz.questions))
            .unwrap_or((DEFAULT_QUIZ_ID, quiz_questions(DEFAULT_QUIZ_ID).unwrap_or(&[])));
        Self {
            quiz_id,
            questions,
            current_index: 0,
            selected_answer: None,
            score: 0,
            started: false,
            completed: false,
            started_at_ms: None,
            completed_at_ms: None,
            answers: Vec::new(),
            hint_used: false,
        }
    }

    pub fn quiz_id(&self) -> &'static str {
        self.quiz_id
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    /// Resets all attempt state and starts the clock.
    pub fn start(&mut self, now_ms: i64) {
        let quiz_id = self.quiz_id;
        *self = Self::new(quiz_id);
        self.started = true;
        self.started_at_ms = Some(now_ms);
    }

    pub fn restart(&mut self, now_ms: i64) {
        self.start(now_ms);
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn select_answer(&mut self, answer_index: usize) {
        if !self.completed {
            self.selected_answer = Some(answer_index);
        }
    }

    /// Scores the selected answer and advances. No-op without a selection.
    pub fn submit_answer(&mut self, now_ms: i64) -> Option<StepOutcome> {
        if self.completed {
            return None;
        }
        let selected = self.selected_answer?;
        let question = self.current_question()?;
        let is_correct = selected == question.correct_answer;
        if is_correct {
            self.score += 1;
        }
        let record = AnswerRecord {
            question_index: self.current_index,
            selected_answer: Some(selected),
            is_correct,
            skipped: false,
            hint_used: self.hint_used,
        };
        Some(self.advance(record, now_ms))
    }

    /// Logs the current question as skipped and advances.
    pub fn skip_question(&mut self, now_ms: i64) -> Option<StepOutcome> {
        if self.completed {
            return None;
        }
        self.current_question()?;
        let record = AnswerRecord {
            question_index: self.current_index,
            selected_answer: None,
            is_correct: false,
            skipped: true,
            hint_used: self.hint_used,
        };
        Some(self.advance(record, now_ms))
    }

    /// Reveals the hint once per question. Returns the hint text when newly used.
    pub fn use_hint(&mut self) -> Option<&'static str> {
        if self.hint_used || self.completed {
            return None;
        }
        let hint = self.current_question()?.hint?;
        self.hint_used = true;
        Some(hint)
    }

    fn advance(&mut self, record: AnswerRecord, now_ms: i64) -> StepOutcome {
        self.answers.push(record);
        self.hint_used = false;
        let answered_count = self.current_index + 1;

        if self.has_next_question() {
            self.current_index += 1;
            self.selected_answer = None;
        } else {
            self.completed = true;
            self.completed_at_ms = Some(now_ms);
        }

        StepOutcome {
            record,
            answered_count,
            completed: self.completed,
        }
    }

    pub fn stats(&self, now_ms: i64) -> Option<QuizStats> {
        let started_at = self.started_at_ms?;
        let end = self.completed_at_ms.unwrap_or(now_ms);
        let elapsed_secs = (end - started_at).max(0) as f64 / 1000.0;

        let answered = self.answers.len();
        let correct = self.answers.iter().filter(|answer| answer.is_correct).count();
        let accuracy = if answered > 0 {
            (correct as f64 / answered as f64 * 100.0).round() as u32
        } else {
            0
        };

        Some(QuizStats {
            total_questions: self.questions.len(),
            questions_answered: answered,
            correct_answers: correct,
            incorrect_answers: answered - correct,
            skipped_questions: self.answers.iter().filter(|answer| answer.skipped).count(),
            accuracy,
            time_elapsed_secs: elapsed_secs.round() as u64,
            average_secs_per_question: if answered > 0 {
                elapsed_secs / answered as f64
            } else {
                0.0
            },
        })
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn score_percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }

    pub fn performance_rating(&self) -> PerformanceRating {
        PerformanceRating::from_percentage(self.score_percentage())
    }

    /// Percentage through the quiz, counting a pending selection as half a question.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let pending = if self.selected_answer.is_some() { 0.5 } else { 0.0 };
        (self.current_index as f64 + pending) / self.questions.len() as f64 * 100.0
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn has_next_question(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    pub fn has_previous_question(&self) -> bool {
        self.current_index > 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

/// Completion progress for one quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub quiz_id: &'static str,
    pub answered: usize,
    pub total_questions: usize,
    pub completed: bool,
}

/// Progress for every quiz in the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgressBoard {
    quizzes: BTreeMap<&'static str, QuizProgress>,
}

impl Default for QuizProgressBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressBoard {
    pub fn new() -> Self {
        let quizzes = QUIZ_BANK
            .iter()
            .map(|quiz| {
                (
                    quiz.id,
                    QuizProgress {
                        quiz_id: quiz.id,
                        answered: 0,
                        total_questions: quiz.questions.len(),
                        completed: false,
                    },
                )
            })
            .collect();
        Self { quizzes }
    }

    /// Records `answered_count`; unknown ids are ignored.
    pub fn update_progress(&mut self, quiz_id: &str, answered_count: usize) {
        if let Some(progress) = self.quizzes.get_mut(quiz_id) {
            progress.answered = answered_count;
            progress.completed = answered_count >= progress.total_questions;
            if progress.completed {
                info!(
                    "event=quiz_completed module=quiz status=ok quiz_id={} answered={}",
                    progress.quiz_id, progress.answered
                );
            }
        }
    }

    pub fn reset_quiz(&mut self, quiz_id: &str) {
        if let Some(progress) = self.quizzes.get_mut(quiz_id) {
            progress.answered = 0;
            progress.completed = false;
        }
    }

    pub fn is_completed(&self, quiz_id: &str) -> bool {
        self.quizzes
            .get(quiz_id)
            .is_some_and(|progress| progress.completed)
    }

    pub fn progress(&self, quiz_id: &str) -> Option<&QuizProgress> {
        self.quizzes.get(quiz_id)
    }

    pub fn all(&self) -> impl Iterator<Item = &QuizProgress> {
        self.quizzes.values()
    }
}

/// Wires a running session to the progress board.
#[derive(Debug, Clone, Default)]
pub struct QuizService {
    board: QuizProgressBoard,
    session: Option<QuizSession>,
}

impl QuizService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) a quiz and clears its board progress.
    pub fn start_quiz(&mut self, quiz_id: &str, now_ms: i64) -> &QuizSession {
        let mut session = QuizSession::new(quiz_id);
        session.start(now_ms);
        self.board.reset_quiz(session.quiz_id());
        info!(
            "event=quiz_start module=quiz status=ok quiz_id={} questions={}",
            session.quiz_id(),
            session.total_questions()
        );
        self.session.insert(session)
    }

    pub fn select_answer(&mut self, answer_index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.select_answer(answer_index);
        }
    }

    pub fn submit_answer(&mut self, now_ms: i64) -> Option<StepOutcome> {
        let session = self.session.as_mut()?;
        let outcome = session.submit_answer(now_ms)?;
        self.board
            .update_progress(session.quiz_id(), outcome.answered_count);
        Some(outcome)
    }

    pub fn skip_question(&mut self, now_ms: i64) -> Option<StepOutcome> {
        let session = self.session.as_mut()?;
        let outcome = session.skip_question(now_ms)?;
        self.board
            .update_progress(session.quiz_id(), outcome.answered_count);
        Some(outcome)
    }

    pub fn use_hint(&mut self) -> Option<&'static str> {
        self.session.as_mut()?.use_hint()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn board(&self) -> &QuizProgressBoard {
        &self.board
    }
}
