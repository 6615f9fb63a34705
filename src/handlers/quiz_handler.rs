use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::GradeQuizRequest};

#[post("/api/quiz/grade")]
async fn grade_quiz(
    state: web::Data<AppState>,
    request: web::Json<GradeQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let report = state.quiz_service.grade(request).await?;
    Ok(HttpResponse::Ok().json(report))
}
