#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App};
use serde_json::{json, Value};

use itinerary_planner::{
    config::ServerConfig, routes, services::normalizer_service::ItineraryNormalizer,
};

pub struct TestApp {
    pub config: ServerConfig,
    pub normalizer: ItineraryNormalizer,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            normalizer: ItineraryNormalizer::new(),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.normalizer.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(routes::json_config(self.config.max_payload_bytes))
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn sample_text() -> &'static str {
    "Day 1: Arrival\n\
     Morning: Check into hotel\n\
     Afternoon: Walk around downtown\n\
     Evening: Dinner at a local restaurant\n\
     Day 2: Exploration\n\
     Morning: Museum visit"
}

pub fn text_payload(text: &str) -> Value {
    json!({
        "city": "Paris",
        "days": 2,
        "format": "text",
        "text": text,
        "insights": { "transportation": "Use the metro" }
    })
}

pub fn structured_itinerary() -> Value {
    json!({
        "overview": {
            "destination": "Rome",
            "durationDays": 2,
            "estimatedTotalCost": "$700"
        },
        "dailyItinerary": [
            {
                "dayNumber": 1,
                "theme": "Ancient Rome",
                "morning": { "timeWindow": "9:00 AM - 12:00 PM", "description": "Colosseum", "cost": "18 EUR" },
                "afternoon": { "timeWindow": "1:00 PM - 5:00 PM", "description": "Roman Forum" },
                "evening": { "timeWindow": "6:00 PM - 10:00 PM", "description": "Trastevere dinner" }
            },
            {
                "dayNumber": 2,
                "theme": "Vatican",
                "morning": { "timeWindow": "9:00 AM - 12:00 PM", "description": "Vatican Museums" },
                "afternoon": { "timeWindow": "1:00 PM - 5:00 PM", "description": "St. Peter's Basilica" },
                "evening": { "timeWindow": "6:00 PM - 10:00 PM", "description": "Gelato walk" }
            }
        ],
        "travelInsights": { "money_tips": "Carry some cash" },
        "alternativeActivities": ["Ostia Antica"]
    })
}
