use serde::Deserialize;
use validator::Validate;

use crate::models::domain::mcq::McqQuestion;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 200))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct McqInput {
    #[validate(length(min = 1, max = 5000))]
    pub question: String,

    #[validate(length(min = 2, max = 10))]
    pub options: Vec<String>,

    #[validate(length(min = 1, max = 1000))]
    pub correct_answer: String,

    pub explanation: Option<String>,
}

impl From<McqInput> for McqQuestion {
    fn from(input: McqInput) -> Self {
        McqQuestion {
            question: input.question,
            options: input.options,
            correct_answer: input.correct_answer,
            explanation: input.explanation,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    #[validate(length(min = 1, max = 100))]
    pub class: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(length(min = 1, max = 100))]
    pub sub_category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub file_urls: Vec<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub mcqs: Vec<McqInput>,
}

/// Partial update: only fields that are present are replaced.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTopicRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub class: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub sub_category: Option<String>,

    pub description: Option<String>,

    pub file_urls: Option<Vec<String>>,

    pub image_url: Option<String>,

    #[validate(nested)]
    pub mcqs: Option<Vec<McqInput>>,
}

impl UpdateTopicRequest {
    pub fn is_empty(&self) -> bool {
        self.topic.is_none()
            && self.class.is_none()
            && self.category.is_none()
            && self.sub_category.is_none()
            && self.description.is_none()
            && self.file_urls.is_none()
            && self.image_url.is_none()
            && self.mcqs.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 5000))]
    pub question: String,

    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 5000))]
    pub reply: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddClassRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub question_index: usize,
    pub selected_option: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GradeQuizRequest {
    #[validate(length(min = 1))]
    pub topic_id: String,

    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadQuery {
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn topic_request() -> CreateTopicRequest {
        CreateTopicRequest {
            topic: "Direct and Indirect Speech".to_string(),
            class: "Class 10".to_string(),
            category: "Grammar".to_string(),
            sub_category: "English Grammar".to_string(),
            description: "<p>Narration rules.</p>".to_string(),
            file_urls: vec![],
            image_url: None,
            mcqs: vec![],
        }
    }

    #[test]
    fn test_valid_create_topic_request() {
        assert!(topic_request().validate().is_ok());
    }

    #[test]
    fn test_empty_topic_name_is_rejected() {
        let mut request = topic_request();
        request.topic = String::new();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_forum_email() {
        let request = CreateQuestionRequest {
            name: "Ali".to_string(),
            email: "not-an-email".to_string(),
            question: "What is a gerund?".to_string(),
            image_url: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_mcq_input_needs_two_options() {
        let input = McqInput {
            question: "Pick one".to_string(),
            options: vec!["only".to_string()],
            correct_answer: "only".to_string(),
            explanation: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_request_emptiness() {
        assert!(UpdateTopicRequest::default().is_empty());

        let update = UpdateTopicRequest {
            description: Some("<p>Revised.</p>".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
