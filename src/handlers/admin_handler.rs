use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::domain::TopicDraft,
    models::dto::request::{AddClassRequest, CreateTopicRequest, UpdateTopicRequest, UploadQuery},
    models::dto::response::{MessageResponse, UploadResponse},
};

#[post("/topics")]
async fn create_topic(
    state: web::Data<AppState>,
    request: web::Json<CreateTopicRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let topic = state
        .authoring_service
        .create_topic(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(topic))
}

#[put("/topics/{id}")]
async fn update_topic(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateTopicRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let topic = state
        .authoring_service
        .update_topic(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(topic))
}

#[delete("/topics/{id}")]
async fn delete_topic(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.authoring_service.delete_topic(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Topic {} deleted", id),
    }))
}

#[get("/classes")]
async fn list_classes(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let classes = state.authoring_service.list_classes().await?;
    Ok(HttpResponse::Ok().json(classes))
}

#[post("/classes")]
async fn add_class(
    state: web::Data<AppState>,
    request: web::Json<AddClassRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let class = state
        .authoring_service
        .add_class(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(class))
}

#[post("/uploads")]
async fn upload_file(
    state: web::Data<AppState>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    if body.is_empty() {
        return Err(AppError::BadRequest("Upload body is empty".to_string()));
    }

    let url = state
        .authoring_service
        .upload_attachment(&query.file_name, body.to_vec())
        .await?;
    Ok(HttpResponse::Created().json(UploadResponse { url }))
}

#[put("/draft")]
async fn save_draft(
    state: web::Data<AppState>,
    draft: web::Json<TopicDraft>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let draft = state.authoring_service.save_draft(draft.into_inner())?;
    Ok(HttpResponse::Ok().json(draft))
}

#[get("/draft")]
async fn get_draft(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    match state.authoring_service.load_draft()? {
        Some(draft) => Ok(HttpResponse::Ok().json(draft)),
        None => Err(AppError::NotFound("No draft saved".to_string())),
    }
}

#[delete("/draft")]
async fn clear_draft(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    state.authoring_service.clear_draft()?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Draft cleared".to_string(),
    }))
}
