use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use aula_server::{app_state::AppState, auth::AuthMiddleware, config::Config, handlers};

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
    let cors_origin = config.cors_allowed_origin.clone();

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_live)
            .service(handlers::health_check_ready)
            .service(handlers::register)
            .service(handlers::login)
            .service(handlers::refresh_token)
            // Everything else requires a valid bearer token.
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(handlers::create_lesson_plan)
                    .service(handlers::list_lesson_plans)
                    .service(handlers::get_lesson_plan)
                    .service(handlers::update_lesson_plan)
                    .service(handlers::submit_quiz)
                    .service(handlers::get_quiz_result)
                    .service(handlers::get_lesson_plan_results)
                    .service(handlers::get_user_results)
                    .service(handlers::attach_feedback)
                    .service(handlers::create_user)
                    .service(handlers::get_all_users)
                    .service(handlers::get_user),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
