use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::mcq::McqQuestion;

/// A locally saved snapshot of an in-progress authoring form. Drafts are
/// written to a file on the admin's device, never to the document store.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
pub struct TopicDraft {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mcqs: Vec<McqQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}
