//! Offline sitemap generator. Reads every topic from the store and writes
//! `public/sitemap.xml` and `public/sitemap.txt` for search-engine
//! consumption. Run as a batch job, not part of the serving path.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use gramture_server::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoTopicRepository, TopicRepository},
    sitemap,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let db = Database::connect(&config).await?;
    let repository: Arc<dyn TopicRepository> = Arc::new(MongoTopicRepository::new(&db, &config));

    let topics = repository.list_all_ordered().await?;
    let routes = sitemap::routes(&topics);

    let public_dir = Path::new("public");
    if !public_dir.exists() {
        fs::create_dir_all(public_dir).expect("public directory should be creatable");
    }

    fs::write(
        public_dir.join("sitemap.xml"),
        sitemap::render_xml(&routes, &config.site_base_url),
    )
    .expect("sitemap.xml should be writable");

    fs::write(
        public_dir.join("sitemap.txt"),
        sitemap::render_txt(&routes, &config.site_base_url),
    )
    .expect("sitemap.txt should be writable");

    log::info!(
        "Sitemap generated with {} URLs ({} static + {} topics)",
        routes.len(),
        sitemap::STATIC_ROUTES.len(),
        topics.len()
    );

    Ok(())
}
