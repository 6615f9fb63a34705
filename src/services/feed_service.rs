use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    errors::AppResult,
    models::domain::Topic,
    models::dto::response::RecentPost,
    repositories::TopicRepository,
    storage::ObjectStorage,
};

const MAX_FEED_LIMIT: i64 = 50;

/// The "recent posts" panel: newest topics first, each with a display date
/// and, when one can be resolved, an image.
pub struct FeedService {
    repository: Arc<dyn TopicRepository>,
    storage: Arc<dyn ObjectStorage>,
    default_limit: i64,
}

impl FeedService {
    pub fn new(
        repository: Arc<dyn TopicRepository>,
        storage: Arc<dyn ObjectStorage>,
        default_limit: i64,
    ) -> Self {
        Self {
            repository,
            storage,
            default_limit,
        }
    }

    /// Up to `limit` most recent topics, newest first. A store holding fewer
    /// topics than the limit yields a shorter list; empty is valid.
    pub async fn recent_posts(&self, limit: Option<i64>) -> AppResult<Vec<RecentPost>> {
        let limit = limit.unwrap_or(self.default_limit).clamp(1, MAX_FEED_LIMIT);
        let topics = self.repository.list_recent(limit).await?;

        let mut posts = Vec::with_capacity(topics.len());
        for topic in topics {
            let image_url = self.resolve_image(&topic).await;
            posts.push(RecentPost {
                id: topic.id,
                topic: topic.topic,
                sub_category: topic.sub_category,
                display_date: display_date(topic.timestamp),
                image_url,
            });
        }

        Ok(posts)
    }

    /// Inline image field first, then the first attachment stored under the
    /// topic's storage prefix. A post without an image is fine, so storage
    /// failures degrade to no image instead of failing the feed.
    async fn resolve_image(&self, topic: &Topic) -> Option<String> {
        if let Some(url) = &topic.image_url {
            return Some(url.clone());
        }

        let prefix = format!("topics/{}/", topic.id);
        match self.storage.list(&prefix).await {
            Ok(paths) => match paths.first() {
                Some(path) => self.storage.download_url(path).await.ok(),
                None => None,
            },
            Err(err) => {
                log::warn!("Could not list images for topic {}: {}", topic.id, err);
                None
            }
        }
    }
}

pub fn display_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_date_is_a_calendar_date() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 3, 14, 30, 0).unwrap();
        assert_eq!(display_date(ts), "March 3, 2025");
    }

    #[test]
    fn test_display_date_pads_nothing() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(display_date(ts), "December 25, 2024");
    }
}
