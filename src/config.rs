use secrecy::SecretString;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub topics_collection: String,
    pub classes_collection: String,
    pub forum_questions_collection: String,
    pub forum_replies_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub admin_email: String,
    pub admin_password_sha256: SecretString,
    pub storage_base_url: String,
    pub site_base_url: String,
    pub class_allow_list: Vec<String>,
    pub recent_posts_limit: i64,
    pub draft_path: PathBuf,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "gramture-local".to_string()),
            topics_collection: env::var("TOPICS_COLLECTION")
                .unwrap_or_else(|_| "topics".to_string()),
            classes_collection: env::var("CLASSES_COLLECTION")
                .unwrap_or_else(|_| "classes".to_string()),
            forum_questions_collection: env::var("FORUM_QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "forum_questions".to_string()),
            forum_replies_collection: env::var("FORUM_REPLIES_COLLECTION")
                .unwrap_or_else(|_| "forum_replies".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@gramture.com".to_string()),
            admin_password_sha256: SecretString::from(
                env::var("ADMIN_PASSWORD_SHA256").unwrap_or_else(|_| "dev_admin_hash".to_string()),
            ),
            storage_base_url: env::var("STORAGE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:9000/gramture".to_string()),
            site_base_url: env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "https://gramture.com".to_string()),
            class_allow_list: env::var("CLASS_ALLOW_LIST")
                .map(|v| {
                    v.split(',')
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    vec![
                        "Class 9".to_string(),
                        "Class 10".to_string(),
                        "Class 11".to_string(),
                        "Class 12".to_string(),
                    ]
                }),
            recent_posts_limit: env::var("RECENT_POSTS_LIMIT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(9),
            draft_path: env::var("DRAFT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("draft.json")),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        }
    }

    /// Validate that production-critical configuration is set.
    /// Panics if required secrets are using default values.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();
        let admin_hash = self.admin_password_sha256.expose_secret();

        if jwt_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }

        if admin_hash == "dev_admin_hash" {
            panic!(
                "FATAL: ADMIN_PASSWORD_SHA256 is using default value! Set ADMIN_PASSWORD_SHA256 environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "gramture-test".to_string(),
            topics_collection: "topics".to_string(),
            classes_collection: "classes".to_string(),
            forum_questions_collection: "forum_questions".to_string(),
            forum_replies_collection: "forum_replies".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            admin_email: "admin@gramture.test".to_string(),
            // sha256 of "password"
            admin_password_sha256: SecretString::from(
                "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8".to_string(),
            ),
            storage_base_url: "http://localhost:9000/gramture-test".to_string(),
            site_base_url: "https://gramture.test".to_string(),
            class_allow_list: vec![
                "Class 9".to_string(),
                "Class 10".to_string(),
                "Class 11".to_string(),
                "Class 12".to_string(),
            ],
            recent_posts_limit: 9,
            draft_path: std::env::temp_dir().join("gramture-test-draft.json"),
            cors_allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert_eq!(config.topics_collection, "topics");
        assert!(config.recent_posts_limit > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_conn_string, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db_name, "gramture-test");
        assert_eq!(config.class_allow_list.len(), 4);
        assert!(config.class_allow_list.contains(&"Class 12".to_string()));
    }
}
