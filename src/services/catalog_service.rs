use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::Topic,
    models::dto::response::{CatalogClass, CatalogSubCategory, TopicSummary},
    repositories::TopicRepository,
};

/// Builds the navigable catalog tree: class, then sub-category, with topics
/// in creation order. Classes outside the allow-list are dropped.
pub struct CatalogService {
    repository: Arc<dyn TopicRepository>,
    class_allow_list: Vec<String>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn TopicRepository>, class_allow_list: Vec<String>) -> Self {
        Self {
            repository,
            class_allow_list,
        }
    }

    pub async fn load_catalog(&self) -> AppResult<Vec<CatalogClass>> {
        let topics = self.repository.list_all_ordered().await?;
        Ok(build_catalog(&topics, &self.class_allow_list))
    }
}

/// Group timestamp-ordered topics into class -> sub-category buckets.
/// First-seen order of classes and sub-categories follows the ordered scan,
/// so re-running this over an unchanged set yields an identical tree.
pub fn build_catalog(topics: &[Topic], class_allow_list: &[String]) -> Vec<CatalogClass> {
    let mut classes: Vec<CatalogClass> = Vec::new();

    for topic in topics {
        if !class_allow_list.iter().any(|c| c == &topic.class) {
            continue;
        }

        let class = match classes.iter_mut().find(|c| c.class == topic.class) {
            Some(class) => class,
            None => {
                classes.push(CatalogClass {
                    class: topic.class.clone(),
                    sub_categories: Vec::new(),
                });
                classes.last_mut().expect("just pushed")
            }
        };

        let sub_category = match class
            .sub_categories
            .iter_mut()
            .find(|s| s.sub_category == topic.sub_category)
        {
            Some(sub) => sub,
            None => {
                class.sub_categories.push(CatalogSubCategory {
                    sub_category: topic.sub_category.clone(),
                    category: topic.category.clone(),
                    topics: Vec::new(),
                });
                class.sub_categories.last_mut().expect("just pushed")
            }
        };

        sub_category.topics.push(TopicSummary::from(topic));
    }

    classes
}
