use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use guardian_quiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::warn!("{err}; every generation call will fail until a key is set");
    }

    let state = AppState::new(config.clone())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    log::info!(
        "starting Digital Guardian Quiz API on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(handlers::generate_quiz)
            .service(handlers::service_info)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
