mod common;

use itinerary_planner::models::itinerary::{Itinerary, SlotName};
use itinerary_planner::models::payload::RawItineraryPayload;
use itinerary_planner::models::view_state::ViewState;
use itinerary_planner::services::export_service::{from_json, to_json};
use itinerary_planner::services::normalizer_service::{normalize, InvalidPayloadError};

use common::{sample_text, structured_itinerary};

fn assert_invariants(itinerary: &Itinerary) {
    assert!(!itinerary.daily_itinerary.is_empty());
    assert!(itinerary.has_contiguous_numbering());
    assert_eq!(
        itinerary.overview.duration_days as usize,
        itinerary.daily_itinerary.len()
    );

    // Every day serializes with exactly the three slot keys
    for day in &itinerary.daily_itinerary {
        let value = serde_json::to_value(day).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .filter(|k| k.parse::<SlotName>().is_ok())
            .collect();
        assert_eq!(keys.len(), 3);
    }
}

#[test]
fn test_segment_extraction_example() {
    let itinerary = normalize(RawItineraryPayload::text("Paris", sample_text())).unwrap();
    assert_invariants(&itinerary);
    assert_eq!(itinerary.daily_itinerary.len(), 2);

    let first = &itinerary.daily_itinerary[0];
    assert!(first.morning.description.contains("Check into hotel"));
    assert!(first.afternoon.description.contains("Walk around downtown"));
    assert!(first.evening.description.contains("Dinner at a local restaurant"));

    let second = &itinerary.daily_itinerary[1];
    assert!(second.morning.description.contains("Museum visit"));
    assert!(second.afternoon.description.is_empty());
    assert!(second.evening.description.is_empty());
    assert!(second.afternoon.location.is_none());
}

#[test]
fn test_fallback_for_unrecognized_text() {
    for text in ["   ", "", "Just have fun in Paris!\nMorning: croissants"] {
        let itinerary = normalize(RawItineraryPayload::text("Paris", text)).unwrap();
        assert_invariants(&itinerary);
        assert_eq!(itinerary.daily_itinerary.len(), 1);

        let day = &itinerary.daily_itinerary[0];
        assert_eq!(day.day_number, 1);
        for (_, slot) in day.slots() {
            assert!(!slot.description.is_empty());
        }
    }
}

#[test]
fn test_garbled_text_never_fails() {
    let inputs = [
        "Day",
        "Day 1:",
        "Day 1: Morning:\nDay 2: Evening:\nDay 3:",
        "day 9: ::: --- ***\nafternoon\n🌙\nDay: x",
        "Morning: Afternoon: Evening:",
        "Day 1: (unclosed\nMorning (9:00 AM: bad window",
    ];

    for text in inputs {
        let itinerary = normalize(RawItineraryPayload::text("Nowhere", text)).unwrap();
        assert_invariants(&itinerary);
    }
}

#[test]
fn test_structured_passthrough() {
    let data: Itinerary = serde_json::from_value(structured_itinerary()).unwrap();
    let itinerary = normalize(RawItineraryPayload::structured("Rome", data.clone())).unwrap();
    assert_eq!(itinerary, data);

    let mut inconsistent = data.clone();
    inconsistent.overview.duration_days = 7;
    let itinerary = normalize(RawItineraryPayload::structured("Rome", inconsistent)).unwrap();
    assert_eq!(itinerary.overview.duration_days, 2);
    assert_eq!(itinerary.daily_itinerary, data.daily_itinerary);
}

#[test]
fn test_structured_renumbering_and_empty_days() {
    let mut data: Itinerary = serde_json::from_value(structured_itinerary()).unwrap();
    data.daily_itinerary[0].day_number = 4;
    data.daily_itinerary[1].day_number = 4;
    let itinerary = normalize(RawItineraryPayload::structured("Rome", data)).unwrap();
    assert_invariants(&itinerary);

    let empty = Itinerary::default();
    let itinerary = normalize(RawItineraryPayload::structured("Rome", empty)).unwrap();
    assert_invariants(&itinerary);
    assert_eq!(itinerary.daily_itinerary[0].theme, "Explore Rome");
}

#[test]
fn test_structured_passthrough_keeps_blank_fields() {
    let mut data: Itinerary = serde_json::from_value(structured_itinerary()).unwrap();
    data.overview.destination = String::new();
    data.overview.estimated_total_cost = String::new();
    data.travel_insights.clear();
    data.alternative_activities.clear();

    let mut payload = RawItineraryPayload::structured("Rome", data.clone());
    payload.insights = Some([("k".to_string(), "v".to_string())].into_iter().collect());
    payload.alternative_activities = Some(vec!["Ostia Antica".to_string()]);

    assert_eq!(normalize(payload).unwrap(), data);
}

#[test]
fn test_format_inferred_when_absent() {
    let mut payload = RawItineraryPayload::text("Paris", sample_text());
    payload.format = None;
    let itinerary = normalize(payload).unwrap();
    assert_invariants(&itinerary);
    assert_eq!(itinerary.daily_itinerary.len(), 2);

    let data: Itinerary = serde_json::from_value(structured_itinerary()).unwrap();
    let mut payload = RawItineraryPayload::structured("Rome", data.clone());
    payload.format = None;
    payload.text = Some("Day 1: ignored".to_string());
    assert_eq!(normalize(payload).unwrap(), data);
}

#[test]
fn test_non_numeric_day_markers() {
    let text = "Day One: Arrival\nMorning: Louvre\nDay Two: Museums\nMorning: Orsay";
    let itinerary = normalize(RawItineraryPayload::text("Paris", text)).unwrap();
    assert_invariants(&itinerary);
    assert_eq!(itinerary.daily_itinerary.len(), 2);
    assert_eq!(itinerary.daily_itinerary[1].morning.description, "Orsay");

    let text = "Itinerary - Day 1st: Arrival\nEvening: Bistro";
    let itinerary = normalize(RawItineraryPayload::text("Paris", text)).unwrap();
    assert_eq!(itinerary.daily_itinerary[0].theme, "Arrival");
    assert_eq!(itinerary.daily_itinerary[0].evening.description, "Bistro");
}

#[test]
fn test_invalid_payloads() {
    let mut payload = RawItineraryPayload::text("Paris", "Day 1:");
    payload.destination = None;
    assert_eq!(normalize(payload), Err(InvalidPayloadError::MissingDestination));

    let payload = RawItineraryPayload::text("  ", "Day 1:");
    assert_eq!(normalize(payload), Err(InvalidPayloadError::MissingDestination));

    let mut payload = RawItineraryPayload::text("Paris", "Day 1:");
    payload.format = None;
    payload.text = None;
    assert_eq!(normalize(payload), Err(InvalidPayloadError::MissingContent));

    let mut payload = RawItineraryPayload::text("Paris", "Day 1:");
    payload.format = Some("yaml".to_string());
    assert_eq!(
        normalize(payload),
        Err(InvalidPayloadError::UnknownFormat("yaml".to_string()))
    );

    let mut payload = RawItineraryPayload::text("Paris", "Day 1:");
    payload.text = None;
    assert_eq!(normalize(payload), Err(InvalidPayloadError::MissingText));

    let mut payload = RawItineraryPayload::structured("Paris", Itinerary::default());
    payload.structured_data = None;
    assert_eq!(
        normalize(payload),
        Err(InvalidPayloadError::MissingStructuredData)
    );
}

#[test]
fn test_export_round_trip_of_normalized_text() {
    let mut payload = RawItineraryPayload::text("Paris", sample_text());
    payload.alternative_activities = Some(vec!["Versailles".to_string()]);
    let itinerary = normalize(payload).unwrap();

    let json = to_json(&itinerary).unwrap();
    assert_eq!(from_json(&json).unwrap(), itinerary);
}

#[test]
fn test_view_state_for_normalized_itinerary() {
    let itinerary = normalize(RawItineraryPayload::text("Paris", sample_text())).unwrap();
    let mut state = ViewState::new(&itinerary);
    let initial = state.clone();

    assert!(state.is_expanded(0));
    state.toggle_expand(1).unwrap();
    state.toggle_expand(1).unwrap();
    state.toggle_favorite(0, "afternoon").unwrap();
    state.toggle_favorite(0, "afternoon").unwrap();
    assert_eq!(state, initial);

    assert!(state.toggle_expand(2).is_err());
}
