use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::Topic,
    models::dto::response::{TopicDetail, TopicSummary},
    repositories::TopicRepository,
};

/// The topic detail page: one topic plus previous/next links computed from
/// its siblings in the same sub-category.
pub struct TopicService {
    repository: Arc<dyn TopicRepository>,
}

impl TopicService {
    pub fn new(repository: Arc<dyn TopicRepository>) -> Self {
        Self { repository }
    }

    /// A missing topic yields an empty detail, not an error.
    pub async fn topic_detail(&self, sub_category: &str, topic_id: &str) -> AppResult<TopicDetail> {
        let topic = self
            .repository
            .find_by_sub_category_and_id(sub_category, topic_id)
            .await?;

        let topic = match topic {
            Some(topic) => topic,
            None => {
                return Ok(TopicDetail {
                    topic: None,
                    previous: None,
                    next: None,
                })
            }
        };

        let siblings = self.repository.list_by_sub_category(sub_category).await?;
        let (previous, next) = neighbors(&siblings, &topic.id, &topic.class);

        Ok(TopicDetail {
            topic: Some(topic),
            previous,
            next,
        })
    }
}

/// Previous/next summaries from a timestamp-ordered sibling list. A neighbor
/// is only offered when its class matches the current topic's class.
pub fn neighbors(
    siblings: &[Topic],
    topic_id: &str,
    class: &str,
) -> (Option<TopicSummary>, Option<TopicSummary>) {
    let position = match siblings.iter().position(|t| t.id == topic_id) {
        Some(position) => position,
        None => return (None, None),
    };

    let previous = position
        .checked_sub(1)
        .and_then(|i| siblings.get(i))
        .filter(|t| t.class == class)
        .map(TopicSummary::from);

    let next = siblings
        .get(position + 1)
        .filter(|t| t.class == class)
        .map(TopicSummary::from);

    (previous, next)
}
