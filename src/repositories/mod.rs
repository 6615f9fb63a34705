pub mod class_repository;
pub mod forum_repository;
pub mod topic_repository;

pub use class_repository::{ClassRepository, MongoClassRepository};
pub use forum_repository::{ForumRepository, MongoForumRepository};
pub use topic_repository::{MongoTopicRepository, TopicRepository};
