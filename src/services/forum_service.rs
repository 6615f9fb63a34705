use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ForumQuestion, ForumReply},
    models::dto::request::{CreateQuestionRequest, CreateReplyRequest},
    models::dto::response::QuestionWithReplies,
    repositories::ForumRepository,
};

pub struct ForumService {
    repository: Arc<dyn ForumRepository>,
}

impl ForumService {
    pub fn new(repository: Arc<dyn ForumRepository>) -> Self {
        Self { repository }
    }

    pub async fn post_question(
        &self,
        topic_id: &str,
        request: CreateQuestionRequest,
    ) -> AppResult<ForumQuestion> {
        request.validate()?;

        let question = ForumQuestion::new(
            topic_id,
            &request.name,
            &request.email,
            &request.question,
            request.image_url,
        );
        self.repository.insert_question(question).await
    }

    /// Questions for a topic with their replies, both oldest first.
    pub async fn questions_for_topic(&self, topic_id: &str) -> AppResult<Vec<QuestionWithReplies>> {
        let questions = self.repository.questions_for_topic(topic_id).await?;

        let mut threads = Vec::with_capacity(questions.len());
        for question in questions {
            let replies = self.repository.replies_for_question(&question.id).await?;
            threads.push(QuestionWithReplies { question, replies });
        }

        Ok(threads)
    }

    /// Append one reply under an existing question. The reply is its own
    /// document, so the append cannot lose a concurrent sibling.
    pub async fn post_reply(
        &self,
        question_id: &str,
        request: CreateReplyRequest,
    ) -> AppResult<ForumReply> {
        request.validate()?;

        self.repository
            .find_question(question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Question with id '{}' not found", question_id))
            })?;

        let reply = ForumReply::new(question_id, &request.name, &request.reply);
        self.repository.insert_reply(reply).await
    }
}
