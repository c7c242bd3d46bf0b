use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;

use itinerary_planner::{
    config::ServerConfig, routes, services::normalizer_service::ItineraryNormalizer,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();
    info!(
        "Starting itinerary planner ({}) on {}:{}",
        config.environment, config.host, config.port
    );

    let normalizer = web::Data::new(ItineraryNormalizer::new());
    let server_config = web::Data::new(config.clone());
    let max_payload_bytes = config.max_payload_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(normalizer.clone())
            .app_data(server_config.clone())
            .app_data(routes::json_config(max_payload_bytes))
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
