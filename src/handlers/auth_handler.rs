use actix_web::{post, web, HttpResponse};
use secrecy::ExposeSecret;
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::utils::sha256_hex,
    errors::AppError,
    models::dto::request::LoginRequest,
    models::dto::response::LoginResponse,
};

#[post("/api/auth/login")]
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let config = &state.config;
    let password_hash = sha256_hex(&request.password);

    if request.email != config.admin_email
        || password_hash != config.admin_password_sha256.expose_secret()
    {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.jwt_service.create_admin_token(&request.email)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        expires_in_hours: state.jwt_service.expiration_hours(),
    }))
}
