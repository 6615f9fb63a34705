use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Document},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Topic,
    models::dto::request::UpdateTopicRequest,
};

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// All topics, ordered by creation timestamp ascending.
    async fn list_all_ordered(&self) -> AppResult<Vec<Topic>>;
    /// Topics sharing a sub-category, ordered by creation timestamp ascending.
    async fn list_by_sub_category(&self, sub_category: &str) -> AppResult<Vec<Topic>>;
    /// The N most recently created topics, newest first.
    async fn list_recent(&self, limit: i64) -> AppResult<Vec<Topic>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Topic>>;
    async fn find_by_sub_category_and_id(
        &self,
        sub_category: &str,
        id: &str,
    ) -> AppResult<Option<Topic>>;
    async fn insert(&self, topic: Topic) -> AppResult<Topic>;
    /// Replace only the fields present in the update. Returns false when no
    /// topic matched the id.
    async fn update_fields(&self, id: &str, update: &UpdateTopicRequest) -> AppResult<bool>;
    /// Returns false when no topic matched the id.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

pub struct MongoTopicRepository {
    collection: Collection<Topic>,
}

impl MongoTopicRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.topics_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for topics collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let sub_category_index = IndexModel::builder()
            .keys(doc! { "sub_category": 1, "timestamp": 1 })
            .options(
                IndexOptions::builder()
                    .name("sub_category_timestamp".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(sub_category_index).await?;

        Ok(())
    }

    fn set_document(update: &UpdateTopicRequest) -> AppResult<Document> {
        let mut set = Document::new();
        if let Some(topic) = &update.topic {
            set.insert("topic", topic);
        }
        if let Some(class) = &update.class {
            set.insert("class", class);
        }
        if let Some(category) = &update.category {
            set.insert("category", category);
        }
        if let Some(sub_category) = &update.sub_category {
            set.insert("sub_category", sub_category);
        }
        if let Some(description) = &update.description {
            set.insert("description", description);
        }
        if let Some(file_urls) = &update.file_urls {
            set.insert("file_urls", to_bson(file_urls)?);
        }
        if let Some(image_url) = &update.image_url {
            set.insert("image_url", image_url);
        }
        if let Some(mcqs) = &update.mcqs {
            let mcqs: Vec<crate::models::domain::McqQuestion> =
                mcqs.iter().cloned().map(Into::into).collect();
            set.insert("mcqs", to_bson(&mcqs)?);
        }
        if set.is_empty() {
            return Err(AppError::BadRequest(
                "Update contains no fields to change".to_string(),
            ));
        }
        Ok(set)
    }
}

#[async_trait]
impl TopicRepository for MongoTopicRepository {
    async fn list_all_ordered(&self) -> AppResult<Vec<Topic>> {
        let find_options = FindOptions::builder().sort(doc! { "timestamp": 1 }).build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let topics: Vec<Topic> = cursor.try_collect().await?;

        Ok(topics)
    }

    async fn list_by_sub_category(&self, sub_category: &str) -> AppResult<Vec<Topic>> {
        let find_options = FindOptions::builder().sort(doc! { "timestamp": 1 }).build();

        let cursor = self
            .collection
            .find(doc! { "sub_category": sub_category })
            .with_options(find_options)
            .await?;
        let topics: Vec<Topic> = cursor.try_collect().await?;

        Ok(topics)
    }

    async fn list_recent(&self, limit: i64) -> AppResult<Vec<Topic>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "timestamp": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let topics: Vec<Topic> = cursor.try_collect().await?;

        Ok(topics)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Topic>> {
        let topic = self.collection.find_one(doc! { "id": id }).await?;
        Ok(topic)
    }

    async fn find_by_sub_category_and_id(
        &self,
        sub_category: &str,
        id: &str,
    ) -> AppResult<Option<Topic>> {
        let topic = self
            .collection
            .find_one(doc! { "sub_category": sub_category, "id": id })
            .await?;
        Ok(topic)
    }

    async fn insert(&self, topic: Topic) -> AppResult<Topic> {
        self.collection.insert_one(&topic).await?;
        Ok(topic)
    }

    async fn update_fields(&self, id: &str, update: &UpdateTopicRequest) -> AppResult<bool> {
        let set = Self::set_document(update)?;
        let result = self
            .collection
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
