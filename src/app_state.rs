use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoClassRepository, MongoForumRepository, MongoTopicRepository},
    services::{
        AuthoringService, CatalogService, FeedService, ForumService, QuizService, TopicService,
    },
    storage::{HttpObjectStorage, ObjectStorage},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog_service: Arc<CatalogService>,
    pub feed_service: Arc<FeedService>,
    pub topic_service: Arc<TopicService>,
    pub quiz_service: Arc<QuizService>,
    pub forum_service: Arc<ForumService>,
    pub authoring_service: Arc<AuthoringService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let topic_repository = Arc::new(MongoTopicRepository::new(&db, &config));
        topic_repository.ensure_indexes().await?;

        let class_repository = Arc::new(MongoClassRepository::new(&db, &config));
        class_repository.ensure_indexes().await?;

        let forum_repository = Arc::new(MongoForumRepository::new(&db, &config));

        let storage: Arc<dyn ObjectStorage> =
            Arc::new(HttpObjectStorage::new(&config.storage_base_url));

        let catalog_service = Arc::new(CatalogService::new(
            topic_repository.clone(),
            config.class_allow_list.clone(),
        ));
        let feed_service = Arc::new(FeedService::new(
            topic_repository.clone(),
            storage.clone(),
            config.recent_posts_limit,
        ));
        let topic_service = Arc::new(TopicService::new(topic_repository.clone()));
        let quiz_service = Arc::new(QuizService::new(topic_repository.clone()));
        let forum_service = Arc::new(ForumService::new(forum_repository));
        let authoring_service = Arc::new(AuthoringService::new(
            topic_repository,
            class_repository,
            storage,
            config.draft_path.clone(),
        ));

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Ok(Self {
            db,
            catalog_service,
            feed_service,
            topic_service,
            quiz_service,
            forum_service,
            authoring_service,
            jwt_service,
            config: Arc::new(config),
        })
    }
}
