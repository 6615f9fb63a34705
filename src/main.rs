use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use gramture_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config)
        .await
        .expect("application state should initialize");
    let jwt_service = state.jwt_service.as_ref().clone();

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = match &allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
            .service(handlers::get_catalog)
            .service(handlers::get_recent)
            .service(handlers::get_topic_detail)
            .service(handlers::list_questions)
            .service(handlers::post_question)
            .service(handlers::post_reply)
            .service(handlers::grade_quiz)
            .service(handlers::login)
            .service(
                web::scope("/api/admin")
                    .wrap(AuthMiddleware)
                    .service(handlers::create_topic)
                    .service(handlers::update_topic)
                    .service(handlers::delete_topic)
                    .service(handlers::list_classes)
                    .service(handlers::add_class)
                    .service(handlers::upload_file)
                    .service(handlers::save_draft)
                    .service(handlers::get_draft)
                    .service(handlers::clear_draft),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
