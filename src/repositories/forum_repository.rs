use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::FindOptions, Collection};

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    models::domain::{ForumQuestion, ForumReply},
};

/// Forum questions and their replies. Replies are a child collection keyed by
/// `question_id`; appending one is an insert, so concurrent replies never
/// race on a shared array.
#[async_trait]
pub trait ForumRepository: Send + Sync {
    async fn insert_question(&self, question: ForumQuestion) -> AppResult<ForumQuestion>;
    async fn find_question(&self, id: &str) -> AppResult<Option<ForumQuestion>>;
    /// Questions for a topic, oldest first.
    async fn questions_for_topic(&self, topic_id: &str) -> AppResult<Vec<ForumQuestion>>;
    async fn insert_reply(&self, reply: ForumReply) -> AppResult<ForumReply>;
    /// Replies for a question, oldest first.
    async fn replies_for_question(&self, question_id: &str) -> AppResult<Vec<ForumReply>>;
}

pub struct MongoForumRepository {
    questions: Collection<ForumQuestion>,
    replies: Collection<ForumReply>,
}

impl MongoForumRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        Self {
            questions: db.get_collection(&config.forum_questions_collection),
            replies: db.get_collection(&config.forum_replies_collection),
        }
    }
}

#[async_trait]
impl ForumRepository for MongoForumRepository {
    async fn insert_question(&self, question: ForumQuestion) -> AppResult<ForumQuestion> {
        self.questions.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_question(&self, id: &str) -> AppResult<Option<ForumQuestion>> {
        let question = self.questions.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn questions_for_topic(&self, topic_id: &str) -> AppResult<Vec<ForumQuestion>> {
        let find_options = FindOptions::builder().sort(doc! { "timestamp": 1 }).build();

        let cursor = self
            .questions
            .find(doc! { "topic_id": topic_id })
            .with_options(find_options)
            .await?;
        let questions: Vec<ForumQuestion> = cursor.try_collect().await?;

        Ok(questions)
    }

    async fn insert_reply(&self, reply: ForumReply) -> AppResult<ForumReply> {
        self.replies.insert_one(&reply).await?;
        Ok(reply)
    }

    async fn replies_for_question(&self, question_id: &str) -> AppResult<Vec<ForumReply>> {
        let find_options = FindOptions::builder().sort(doc! { "timestamp": 1 }).build();

        let cursor = self
            .replies
            .find(doc! { "question_id": question_id })
            .with_options(find_options)
            .await?;
        let replies: Vec<ForumReply> = cursor.try_collect().await?;

        Ok(replies)
    }
}
