use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{ForumQuestion, ForumReply, Topic};

/// Lightweight view of a topic used in menus, neighbor links and feeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSummary {
    pub id: String,
    pub topic: String,
    pub class: String,
    pub sub_category: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        TopicSummary {
            id: topic.id.clone(),
            topic: topic.topic.clone(),
            class: topic.class.clone(),
            sub_category: topic.sub_category.clone(),
            timestamp: topic.timestamp,
        }
    }
}

/// One sub-category of the catalog with its topics in timestamp order.
/// `category` is the free-text category of the sub-category's first topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSubCategory {
    pub sub_category: String,
    pub category: String,
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogClass {
    pub class: String,
    pub sub_categories: Vec<CatalogSubCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentPost {
    pub id: String,
    pub topic: String,
    pub sub_category: String,
    /// Calendar date resolved from the stored timestamp, e.g. "March 3, 2025".
    pub display_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Detail page payload. A missing topic is an empty detail, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct TopicDetail {
    pub topic: Option<Topic>,
    pub previous: Option<TopicSummary>,
    pub next: Option<TopicSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionWithReplies {
    #[serde(flatten)]
    pub question: ForumQuestion,
    pub replies: Vec<ForumReply>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    pub question_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in_hours: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_summary_from_topic() {
        let topic = Topic::new(
            "Essay Writing",
            "Class 12",
            "Composition",
            "Essays",
            "<p>Structure of an essay.</p>",
            vec![],
            None,
            vec![],
        );

        let summary = TopicSummary::from(&topic);
        assert_eq!(summary.id, topic.id);
        assert_eq!(summary.class, "Class 12");
        assert_eq!(summary.timestamp, topic.timestamp);
    }

    #[test]
    fn test_question_with_replies_flattens_question_fields() {
        let question = ForumQuestion::new("t-1", "Ali", "ali@example.com", "Why?", None);
        let payload = QuestionWithReplies {
            question: question.clone(),
            replies: vec![ForumReply::new(&question.id, "Sara", "Because.")],
        };

        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["name"], "Ali");
        assert_eq!(json["replies"].as_array().map(|r| r.len()), Some(1));
    }
}
