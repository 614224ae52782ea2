use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use trivia_cafe_server::{
    app_state::AppState, auth::AuthGate, config::Config, handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if let Err(err) = config.validate_for_production() {
        log::warn!("{}", err);
    }

    let auth_gate = AuthGate::from_config(&config).map_err(std::io::Error::other)?;
    let state = AppState::new(config.clone())
        .await
        .map_err(std::io::Error::other)?;

    let state = web::Data::new(state);
    let auth_gate = web::Data::new(auth_gate);

    log::info!(
        "Starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!("Verifying tokens issued by {} for '{}'", config.issuer(), config.api_audience);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "PUT", "POST", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .app_data(auth_gate.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
            .default_service(web::to(handlers::unmatched_route))
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
