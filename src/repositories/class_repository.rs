use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::ClassEntry};

#[async_trait]
pub trait ClassRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<ClassEntry>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<ClassEntry>>;
    async fn insert(&self, class: ClassEntry) -> AppResult<ClassEntry>;
}

pub struct MongoClassRepository {
    collection: Collection<ClassEntry>,
}

impl MongoClassRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.classes_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for classes collection");

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(name_index).await?;
        Ok(())
    }
}

#[async_trait]
impl ClassRepository for MongoClassRepository {
    async fn list(&self) -> AppResult<Vec<ClassEntry>> {
        let cursor = self.collection.find(doc! {}).await?;
        let classes: Vec<ClassEntry> = cursor.try_collect().await?;
        Ok(classes)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<ClassEntry>> {
        let class = self.collection.find_one(doc! { "name": name }).await?;
        Ok(class)
    }

    async fn insert(&self, class: ClassEntry) -> AppResult<ClassEntry> {
        self.collection.insert_one(&class).await?;
        Ok(class)
    }
}
