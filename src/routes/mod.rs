use actix_web::{error::InternalError, web, HttpResponse};
use serde_json::json;

pub mod catalog;
pub mod health;
pub mod itinerary;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/destinations", web::get().to(catalog::get_destinations))
                .route("/interests", web::get().to(catalog::get_interests))
                .service(
                    web::scope("/itineraries")
                        .route("/normalize", web::post().to(itinerary::normalize))
                        .route("/export", web::post().to(itinerary::export))
                        .route("/reorder", web::post().to(itinerary::reorder)),
                ),
        );
}

/// JSON extractor settings: body size limit and `{"error": ...}` bodies for
/// unreadable payloads.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
            InternalError::from_response(err, response).into()
        })
}
