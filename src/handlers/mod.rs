pub mod admin_handler;
pub mod auth_handler;
pub mod catalog_handler;
pub mod forum_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod topic_handler;

pub use admin_handler::{
    add_class, clear_draft, create_topic, delete_topic, get_draft, list_classes, save_draft,
    update_topic, upload_file,
};
pub use auth_handler::login;
pub use catalog_handler::{get_catalog, get_recent};
pub use forum_handler::{list_questions, post_question, post_reply};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::grade_quiz;
pub use topic_handler::get_topic_detail;
