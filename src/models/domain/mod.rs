pub mod class;
pub mod draft;
pub mod forum;
pub mod mcq;
pub mod topic;

pub use class::ClassEntry;
pub use draft::TopicDraft;
pub use forum::{ForumQuestion, ForumReply};
pub use mcq::McqQuestion;
pub use topic::Topic;
