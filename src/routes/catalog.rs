use actix_web::{HttpResponse, Responder};

use crate::services::catalog_service;

/*
    /api/destinations
*/
pub async fn get_destinations() -> impl Responder {
    HttpResponse::Ok().json(catalog_service::popular_destinations())
}

/*
    /api/interests
*/
pub async fn get_interests() -> impl Responder {
    HttpResponse::Ok().json(catalog_service::interest_categories())
}
