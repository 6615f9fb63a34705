use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::RecentQuery};

#[get("/api/catalog")]
async fn get_catalog(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = state.catalog_service.load_catalog().await?;
    Ok(HttpResponse::Ok().json(catalog))
}

#[get("/api/recent")]
async fn get_recent(
    state: web::Data<AppState>,
    query: web::Query<RecentQuery>,
) -> Result<HttpResponse, AppError> {
    let posts = state.feed_service.recent_posts(query.limit).await?;
    Ok(HttpResponse::Ok().json(posts))
}
