use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::mcq::McqQuestion;

/// A single unit of study material. Topics are the central entity of the
/// catalog: each belongs to exactly one class and one sub-category, carries a
/// rich-text body, and may embed an MCQ test. Ordering among topics in the
/// same sub-category is by `timestamp` ascending.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Topic {
    pub id: String,
    pub topic: String,
    pub class: String,
    pub category: String,
    pub sub_category: String,
    /// Rich-text body, stored as an HTML string.
    pub description: String,
    #[serde(default)]
    pub file_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub mcqs: Vec<McqQuestion>,
    pub timestamp: DateTime<Utc>,
}

impl Topic {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        topic: &str,
        class: &str,
        category: &str,
        sub_category: &str,
        description: &str,
        file_urls: Vec<String>,
        image_url: Option<String>,
        mcqs: Vec<McqQuestion>,
    ) -> Self {
        Topic {
            id: Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            class: class.to_string(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            description: description.to_string(),
            file_urls,
            image_url,
            mcqs,
            timestamp: Utc::now(),
        }
    }

    pub fn has_quiz(&self) -> bool {
        !self.mcqs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_topic_gets_id_and_timestamp() {
        let topic = Topic::new(
            "Parts of Speech",
            "Class 9",
            "Grammar",
            "English Grammar",
            "<p>Nouns, verbs, adjectives.</p>",
            vec![],
            None,
            vec![],
        );

        assert!(!topic.id.is_empty());
        assert!(!topic.has_quiz());
        assert_eq!(topic.sub_category, "English Grammar");
    }

    #[test]
    fn topic_round_trips_through_json() {
        let topic = Topic::new(
            "Tenses",
            "Class 10",
            "Grammar",
            "English Grammar",
            "<p>Past, present, future.</p>",
            vec!["https://example.com/notes.pdf".to_string()],
            Some("https://example.com/cover.jpg".to_string()),
            vec![],
        );

        let json = serde_json::to_string(&topic).expect("topic should serialize");
        let parsed: Topic = serde_json::from_str(&json).expect("topic should deserialize");
        assert_eq!(topic, parsed);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": "t-1",
            "topic": "Idioms",
            "class": "Class 11",
            "category": "Vocabulary",
            "sub_category": "Idioms & Phrases",
            "description": "<p>Common idioms.</p>",
            "timestamp": "2025-01-01T00:00:00Z"
        }"#;

        let topic: Topic = serde_json::from_str(json).expect("partial topic should deserialize");
        assert!(topic.file_urls.is_empty());
        assert!(topic.image_url.is_none());
        assert!(topic.mcqs.is_empty());
    }
}
