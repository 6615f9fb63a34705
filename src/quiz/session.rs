use std::collections::HashMap;

use serde::Serialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::McqQuestion;

/// Where a quiz walk currently stands.
///
/// `Answering` advances one question at a time; reaching past the last
/// question lands in `Finished`, from which the user may open `Reviewing` or
/// retake. A session is ephemeral per page visit and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    Answering,
    Finished,
    Reviewing,
}

/// Result of a successful advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    NextQuestion(usize),
    Finished,
}

/// One user's walk through a topic's embedded MCQ test. Selections and
/// feedback are keyed by question index; correctness compares the selected
/// option text with the stored correct answer.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<McqQuestion>,
    current: usize,
    selections: HashMap<usize, String>,
    feedback: HashMap<usize, bool>,
    phase: QuizPhase,
    certificate_name: Option<String>,
}

impl QuizSession {
    pub fn new(questions: Vec<McqQuestion>) -> Self {
        QuizSession {
            questions,
            current: 0,
            selections: HashMap::new(),
            feedback: HashMap::new(),
            phase: QuizPhase::Answering,
            certificate_name: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&McqQuestion> {
        self.questions.get(self.current)
    }

    pub fn selection(&self, index: usize) -> Option<&str> {
        self.selections.get(&index).map(String::as_str)
    }

    /// Feedback recorded for a question when it was advanced past.
    pub fn feedback(&self, index: usize) -> Option<bool> {
        self.feedback.get(&index).copied()
    }

    /// Record the selected option text for the current question. Selecting
    /// again before advancing replaces the previous choice.
    pub fn select(&mut self, option: &str) -> AppResult<()> {
        if self.phase != QuizPhase::Answering {
            return Err(AppError::BadRequest(
                "Cannot select an answer after the test is finished".to_string(),
            ));
        }
        if self.current >= self.questions.len() {
            return Err(AppError::BadRequest("No question to answer".to_string()));
        }
        self.selections.insert(self.current, option.to_string());
        Ok(())
    }

    /// Move to the next question, or finish after the last one. Requires a
    /// selection for the current question; otherwise nothing changes and a
    /// validation error is returned for inline display.
    pub fn advance(&mut self) -> AppResult<Advance> {
        if self.phase != QuizPhase::Answering {
            return Err(AppError::BadRequest("The test is already finished".to_string()));
        }

        let question = self
            .questions
            .get(self.current)
            .ok_or_else(|| AppError::BadRequest("No question to answer".to_string()))?;

        let selected = self.selections.get(&self.current).ok_or_else(|| {
            AppError::ValidationError(
                "Please select an answer before moving to the next question.".to_string(),
            )
        })?;

        let correct = selected == &question.correct_answer;
        self.feedback.insert(self.current, correct);

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            Ok(Advance::NextQuestion(self.current))
        } else {
            self.phase = QuizPhase::Finished;
            Ok(Advance::Finished)
        }
    }

    /// Name shown on the on-screen certificate; empty input becomes "Guest".
    /// Never persisted anywhere.
    pub fn set_certificate_name(&mut self, name: &str) {
        let name = name.trim();
        self.certificate_name = Some(if name.is_empty() {
            "Guest".to_string()
        } else {
            name.to_string()
        });
    }

    pub fn certificate_name(&self) -> Option<&str> {
        self.certificate_name.as_deref()
    }

    /// Open the answer review. Only reachable once the test is finished.
    pub fn review(&mut self) -> AppResult<()> {
        match self.phase {
            QuizPhase::Finished | QuizPhase::Reviewing => {
                self.phase = QuizPhase::Reviewing;
                Ok(())
            }
            QuizPhase::Answering => Err(AppError::BadRequest(
                "Finish the test before reviewing answers".to_string(),
            )),
        }
    }

    /// Reset everything back to the first question.
    pub fn retake(&mut self) {
        self.selections.clear();
        self.feedback.clear();
        self.current = 0;
        self.phase = QuizPhase::Answering;
    }

    /// Count of questions whose selected option text equals the stored
    /// correct answer. Unanswered questions count as incorrect.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.selections.get(i) == Some(&q.correct_answer))
            .count()
    }
}
