pub mod catalog_service;
pub mod export_service;
pub mod itinerary_service;
pub mod normalizer_service;
