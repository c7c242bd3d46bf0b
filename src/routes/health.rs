use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use crate::config::ServerConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    timestamp: String,
}

/*
    /health
*/
pub async fn health_check(config: web::Data<ServerConfig>) -> impl Responder {
    let health = HealthStatus {
        status: "ok".to_string(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(health)
}
