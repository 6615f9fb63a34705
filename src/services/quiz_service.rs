use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::McqQuestion,
    models::dto::request::GradeQuizRequest,
    models::dto::response::{GradeReport, QuestionResult},
    repositories::TopicRepository,
};

/// Stateless grading of a topic's embedded MCQ test. Attempts are ephemeral:
/// nothing here is ever written back to the store.
pub struct QuizService {
    repository: Arc<dyn TopicRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn TopicRepository>) -> Self {
        Self { repository }
    }

    pub async fn grade(&self, request: GradeQuizRequest) -> AppResult<GradeReport> {
        let topic = self
            .repository
            .find_by_id(&request.topic_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Topic with id '{}' not found", request.topic_id))
            })?;

        if topic.mcqs.is_empty() {
            return Err(AppError::BadRequest("Topic has no MCQ test".to_string()));
        }

        let mut selections: HashMap<usize, String> = HashMap::new();
        for answer in request.answers {
            if answer.question_index >= topic.mcqs.len() {
                return Err(AppError::BadRequest(format!(
                    "Question index {} is out of range",
                    answer.question_index
                )));
            }
            selections.insert(answer.question_index, answer.selected_option);
        }

        Ok(grade_questions(&topic.mcqs, &selections))
    }
}

/// Correctness is exact string equality between the selected option text and
/// the stored correct answer; the aggregate score counts matching questions.
pub fn grade_questions(
    questions: &[McqQuestion],
    selections: &HashMap<usize, String>,
) -> GradeReport {
    let results: Vec<QuestionResult> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected_option = selections.get(&index).cloned();
            let correct = selected_option.as_deref() == Some(question.correct_answer.as_str());
            QuestionResult {
                question_index: index,
                selected_option,
                correct_answer: question.correct_answer.clone(),
                correct,
            }
        })
        .collect();

    GradeReport {
        score: results.iter().filter(|r| r.correct).count(),
        total: questions.len(),
        results,
    }
}
