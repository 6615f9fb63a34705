use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/description/{sub_category}/{topic_id}")]
async fn get_topic_detail(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (sub_category, topic_id) = path.into_inner();
    let detail = state
        .topic_service
        .topic_detail(&sub_category, &topic_id)
        .await?;
    Ok(HttpResponse::Ok().json(detail))
}
