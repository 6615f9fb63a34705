use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateQuestionRequest, CreateReplyRequest},
};

#[get("/api/forum/{topic_id}/questions")]
async fn list_questions(
    state: web::Data<AppState>,
    topic_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let threads = state.forum_service.questions_for_topic(&topic_id).await?;
    Ok(HttpResponse::Ok().json(threads))
}

#[post("/api/forum/{topic_id}/questions")]
async fn post_question(
    state: web::Data<AppState>,
    topic_id: web::Path<String>,
    request: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .forum_service
        .post_question(&topic_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(question))
}

#[post("/api/forum/questions/{question_id}/replies")]
async fn post_reply(
    state: web::Data<AppState>,
    question_id: web::Path<String>,
    request: web::Json<CreateReplyRequest>,
) -> Result<HttpResponse, AppError> {
    let reply = state
        .forum_service
        .post_reply(&question_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(reply))
}
