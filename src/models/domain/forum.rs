use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question posted in the discussion forum under a topic.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ForumQuestion {
    pub id: String,
    pub topic_id: String,
    pub name: String,
    pub email: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ForumQuestion {
    pub fn new(
        topic_id: &str,
        name: &str,
        email: &str,
        question: &str,
        image_url: Option<String>,
    ) -> Self {
        ForumQuestion {
            id: Uuid::new_v4().to_string(),
            topic_id: topic_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            question: question.to_string(),
            image_url,
            timestamp: Utc::now(),
        }
    }
}

/// A reply to a forum question. Replies live in their own collection keyed by
/// `question_id` so that appending one is a single atomic insert; two clients
/// replying at once can never overwrite each other.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ForumReply {
    pub id: String,
    pub question_id: String,
    pub name: String,
    pub reply: String,
    pub timestamp: DateTime<Utc>,
}

impl ForumReply {
    pub fn new(question_id: &str, name: &str, reply: &str) -> Self {
        ForumReply {
            id: Uuid::new_v4().to_string(),
            question_id: question_id.to_string(),
            name: name.to_string(),
            reply: reply.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_is_tied_to_its_topic() {
        let q = ForumQuestion::new("topic-1", "Ali", "ali@example.com", "What is a clause?", None);
        assert_eq!(q.topic_id, "topic-1");
        assert!(!q.id.is_empty());
    }

    #[test]
    fn new_reply_is_tied_to_its_question() {
        let r = ForumReply::new("q-1", "Sara", "A clause has a subject and a verb.");
        assert_eq!(r.question_id, "q-1");
        assert_eq!(r.reply, "A clause has a subject and a verb.");
    }
}
