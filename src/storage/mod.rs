use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

static UNSAFE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("file name pattern is a valid regex"));

/// Minimal contract against the hosted object store: upload a named blob,
/// resolve a public download URL, list blobs under a prefix.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> AppResult<String>;
    async fn download_url(&self, path: &str) -> AppResult<String>;
    async fn list(&self, prefix: &str) -> AppResult<Vec<String>>;
}

/// Object storage over a plain HTTP blob gateway. Blobs are uploaded with a
/// PUT to `{base}/{path}` and are publicly readable at the same URL; listing
/// is a GET on the base URL with a `prefix` query returning a JSON array of
/// paths.
pub struct HttpObjectStorage {
    client: reqwest::Client,
    base_url: String,
}

impl HttpObjectStorage {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> AppResult<String> {
        let url = self.object_url(path);
        let response = self.client.put(&url).body(bytes).send().await?;

        if !response.status().is_success() {
            return Err(AppError::StorageError(format!(
                "upload of '{}' failed with status {}",
                path,
                response.status()
            )));
        }

        Ok(url)
    }

    async fn download_url(&self, path: &str) -> AppResult<String> {
        Ok(self.object_url(path))
    }

    async fn list(&self, prefix: &str) -> AppResult<Vec<String>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("prefix", prefix)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::StorageError(format!(
                "listing '{}' failed with status {}",
                prefix,
                response.status()
            )));
        }

        let paths: Vec<String> = response.json().await?;
        Ok(paths)
    }
}

/// Storage path for an uploaded attachment, unique per submission. Mirrors
/// the `uploads/{millis}-{name}` layout the content already uses.
pub fn attachment_path(file_name: &str) -> String {
    format!(
        "uploads/{}-{}",
        chrono::Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

pub fn sanitize_file_name(file_name: &str) -> String {
    let cleaned = UNSAFE_NAME_CHARS.replace_all(file_name.trim(), "-");
    let cleaned = cleaned.trim_matches('-');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}
