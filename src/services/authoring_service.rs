use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ClassEntry, McqQuestion, Topic, TopicDraft},
    models::dto::request::{AddClassRequest, CreateTopicRequest, UpdateTopicRequest},
    repositories::{ClassRepository, TopicRepository},
    storage::{attachment_path, ObjectStorage},
};

/// Admin-side content management: topic create/update/delete, the class
/// catalog, attachment uploads, and the locally saved form draft.
pub struct AuthoringService {
    topics: Arc<dyn TopicRepository>,
    classes: Arc<dyn ClassRepository>,
    storage: Arc<dyn ObjectStorage>,
    draft_path: PathBuf,
}

impl AuthoringService {
    pub fn new(
        topics: Arc<dyn TopicRepository>,
        classes: Arc<dyn ClassRepository>,
        storage: Arc<dyn ObjectStorage>,
        draft_path: PathBuf,
    ) -> Self {
        Self {
            topics,
            classes,
            storage,
            draft_path,
        }
    }

    /// Upload a batch of attachments and return their download URLs. Any
    /// failure aborts the whole batch before a topic document is written;
    /// blobs uploaded earlier in the batch are left behind, not cleaned up.
    pub async fn upload_attachments(&self, files: Vec<(String, Vec<u8>)>) -> AppResult<Vec<String>> {
        let mut urls = Vec::with_capacity(files.len());
        for (file_name, bytes) in files {
            let path = attachment_path(&file_name);
            let url = self.storage.upload(&path, bytes).await?;
            urls.push(url);
        }
        Ok(urls)
    }

    pub async fn upload_attachment(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<String> {
        let path = attachment_path(file_name);
        self.storage.upload(&path, bytes).await
    }

    pub async fn create_topic(&self, request: CreateTopicRequest) -> AppResult<Topic> {
        request.validate()?;
        self.require_known_class(&request.class).await?;

        let mcqs: Vec<McqQuestion> = request.mcqs.into_iter().map(Into::into).collect();
        validate_mcqs(&mcqs)?;

        let topic = Topic::new(
            &request.topic,
            &request.class,
            &request.category,
            &request.sub_category,
            &request.description,
            request.file_urls,
            request.image_url,
            mcqs,
        );

        let topic = self.topics.insert(topic).await?;
        log::info!("Created topic '{}' ({})", topic.topic, topic.id);
        Ok(topic)
    }

    pub async fn update_topic(&self, id: &str, request: UpdateTopicRequest) -> AppResult<Topic> {
        request.validate()?;
        if request.is_empty() {
            return Err(AppError::BadRequest(
                "Update contains no fields to change".to_string(),
            ));
        }
        if let Some(class) = &request.class {
            self.require_known_class(class).await?;
        }
        if let Some(mcqs) = &request.mcqs {
            let mcqs: Vec<McqQuestion> = mcqs.iter().cloned().map(Into::into).collect();
            validate_mcqs(&mcqs)?;
        }

        let matched = self.topics.update_fields(id, &request).await?;
        if !matched {
            return Err(AppError::NotFound(format!(
                "Topic with id '{}' not found",
                id
            )));
        }

        self.topics
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic with id '{}' not found", id)))
    }

    pub async fn delete_topic(&self, id: &str) -> AppResult<()> {
        let deleted = self.topics.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "Topic with id '{}' not found",
                id
            )));
        }
        log::info!("Deleted topic {}", id);
        Ok(())
    }

    pub async fn list_classes(&self) -> AppResult<Vec<ClassEntry>> {
        self.classes.list().await
    }

    pub async fn add_class(&self, request: AddClassRequest) -> AppResult<ClassEntry> {
        request.validate()?;

        if self.classes.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Class '{}' already exists",
                request.name
            )));
        }

        self.classes.insert(ClassEntry::new(&request.name)).await
    }

    /// Save the in-progress form to the local draft file, never to the store.
    pub fn save_draft(&self, mut draft: TopicDraft) -> AppResult<TopicDraft> {
        draft.saved_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&draft)?;
        std::fs::write(&self.draft_path, json)
            .map_err(|e| AppError::InternalError(format!("Could not write draft: {}", e)))?;
        Ok(draft)
    }

    pub fn load_draft(&self) -> AppResult<Option<TopicDraft>> {
        match std::fs::read_to_string(&self.draft_path) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::InternalError(format!(
                "Could not read draft: {}",
                e
            ))),
        }
    }

    pub fn clear_draft(&self) -> AppResult<()> {
        match std::fs::remove_file(&self.draft_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::InternalError(format!(
                "Could not clear draft: {}",
                e
            ))),
        }
    }

    async fn require_known_class(&self, class: &str) -> AppResult<()> {
        if self.classes.find_by_name(class).await?.is_none() {
            return Err(AppError::ValidationError(format!(
                "Unknown class '{}'",
                class
            )));
        }
        Ok(())
    }
}

fn validate_mcqs(mcqs: &[McqQuestion]) -> AppResult<()> {
    for mcq in mcqs {
        mcq.validate()?;
    }
    Ok(())
}
