pub mod authoring_service;
pub mod catalog_service;
pub mod feed_service;
pub mod forum_service;
pub mod quiz_service;
pub mod topic_service;

pub use authoring_service::AuthoringService;
pub use catalog_service::CatalogService;
pub use feed_service::FeedService;
pub use forum_service::ForumService;
pub use quiz_service::QuizService;
pub use topic_service::TopicService;
