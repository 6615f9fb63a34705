use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A multiple-choice question embedded in a topic. Correctness is matched by
/// option text, so authoring validation requires the correct answer to be one
/// of the options and rejects duplicate option text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqQuestion {
    /// Rich-text question body.
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl McqQuestion {
    /// Authoring-time invariants for one question.
    pub fn validate(&self) -> AppResult<()> {
        if self.question.trim().is_empty() {
            return Err(AppError::ValidationError(
                "MCQ question text must not be empty".to_string(),
            ));
        }
        if self.options.len() < 2 {
            return Err(AppError::ValidationError(
                "MCQ must have at least two options".to_string(),
            ));
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::ValidationError(
                "MCQ options must not be empty".to_string(),
            ));
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[i + 1..].contains(option) {
                return Err(AppError::ValidationError(format!(
                    "MCQ options must be distinct, found duplicate '{}'",
                    option
                )));
            }
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(AppError::ValidationError(
                "MCQ correct answer must be one of the options".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> McqQuestion {
        McqQuestion {
            question: "Which word is a noun?".to_string(),
            options: vec!["run".to_string(), "table".to_string(), "quickly".to_string()],
            correct_answer: "table".to_string(),
            explanation: Some("A noun names a person, place or thing.".to_string()),
        }
    }

    #[test]
    fn valid_question_passes() {
        assert!(question().validate().is_ok());
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let mut q = question();
        q.correct_answer = "chair".to_string();
        assert!(q.validate().is_err());
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let mut q = question();
        q.options.push("table".to_string());
        assert!(q.validate().is_err());
    }

    #[test]
    fn too_few_options_are_rejected() {
        let mut q = question();
        q.options.truncate(1);
        assert!(q.validate().is_err());
    }
}
