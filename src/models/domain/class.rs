use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the class catalog, e.g. "Class 9". The authoring form offers
/// these as the topic's owning class.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassEntry {
    pub id: String,
    pub name: String,
}

impl ClassEntry {
    pub fn new(name: &str) -> Self {
        ClassEntry {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
        }
    }
}
