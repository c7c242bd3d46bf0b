pub mod catalog;
pub mod itinerary;
pub mod payload;
pub mod view_state;
