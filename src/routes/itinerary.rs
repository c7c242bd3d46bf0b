use crate::{
    models::{
        itinerary::{Itinerary, SlotName},
        payload::RawItineraryPayload,
    },
    services::{
        export_service::{self, ExportFormat},
        itinerary_service,
        normalizer_service::ItineraryNormalizer,
    },
};
use actix_web::{http::header, web, HttpResponse, Responder};
use log::{error, warn};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub itinerary: Itinerary,
    pub day_index: usize,
    pub slot: String,
    pub target_day_index: usize,
    pub target_position: usize,
}

/*
    /api/itineraries/normalize
*/
pub async fn normalize(
    normalizer: web::Data<ItineraryNormalizer>,
    input: web::Json<RawItineraryPayload>,
) -> impl Responder {
    match normalizer.normalize(input.into_inner()) {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(err) => {
            warn!("Rejected itinerary payload: {}", err);
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
    }
}

/*
    /api/itineraries/export?format=json|text
*/
pub async fn export(query: web::Query<ExportQuery>, input: web::Json<Itinerary>) -> impl Responder {
    let format = match query.format.as_deref().map(|f| f.parse::<ExportFormat>()) {
        None => ExportFormat::default(),
        Some(Ok(format)) => format,
        Some(Err(err)) => {
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
    };

    let itinerary = input.into_inner();
    match export_service::export(&itinerary, format) {
        Ok(body) => HttpResponse::Ok()
            .content_type(format.content_type())
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    export_service::file_name(&itinerary, format)
                ),
            ))
            .body(body),
        Err(err) => {
            error!("Failed to export itinerary: {:?}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to export itinerary" }))
        }
    }
}

/*
    /api/itineraries/reorder
*/
pub async fn reorder(input: web::Json<ReorderRequest>) -> impl Responder {
    let request = input.into_inner();

    let slot: SlotName = match request.slot.parse() {
        Ok(slot) => slot,
        Err(err) => return HttpResponse::BadRequest().json(json!({ "error": err.to_string() })),
    };

    let mut itinerary = request.itinerary;
    match itinerary_service::reorder(
        &mut itinerary,
        request.day_index,
        slot,
        request.target_day_index,
        request.target_position,
    ) {
        Ok(()) => HttpResponse::Ok().json(itinerary),
        Err(err) => HttpResponse::BadRequest().json(json!({ "error": err.to_string() })),
    }
}
