use crate::models::itinerary::{Itinerary, SlotName};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    DayOutOfRange { index: usize, day_count: usize },
    PositionOutOfRange(usize),
}

impl fmt::Display for ReorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderError::DayOutOfRange { index, day_count } => write!(
                f,
                "Day index {} out of range for itinerary with {} day(s)",
                index, day_count
            ),
            ReorderError::PositionOutOfRange(position) => write!(
                f,
                "Slot position {} out of range, expected 0 (morning) to 2 (evening)",
                position
            ),
        }
    }
}

impl std::error::Error for ReorderError {}

/// Moves the activity in `slot` of day `day_index` to position
/// `target_position` of day `target_day_index`; the activity found there
/// takes its place.
///
/// Time windows belong to the slot position and do not move. Day count,
/// day numbers and slot keys are left untouched.
pub fn reorder(
    itinerary: &mut Itinerary,
    day_index: usize,
    slot: SlotName,
    target_day_index: usize,
    target_position: usize,
) -> Result<(), ReorderError> {
    let day_count = itinerary.day_count();
    for index in [day_index, target_day_index] {
        if index >= day_count {
            return Err(ReorderError::DayOutOfRange { index, day_count });
        }
    }
    let target_slot = SlotName::from_position(target_position)
        .ok_or(ReorderError::PositionOutOfRange(target_position))?;

    if day_index == target_day_index && slot == target_slot {
        return Ok(());
    }

    let source = itinerary.daily_itinerary[day_index].slot(slot).clone();
    let target = itinerary.daily_itinerary[target_day_index]
        .slot(target_slot)
        .clone();

    itinerary.daily_itinerary[target_day_index]
        .slot_mut(target_slot)
        .replace_activity(&source);
    itinerary.daily_itinerary[day_index]
        .slot_mut(slot)
        .replace_activity(&target);

    debug!(
        "Moved day {} {} to day {} {}",
        day_index + 1,
        slot,
        target_day_index + 1,
        target_slot
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::itinerary::DayPlan;

    fn sample() -> Itinerary {
        let mut first = DayPlan::new(1, "Arrival");
        first.morning.description = "Check in".to_string();
        first.evening.description = "Dinner".to_string();
        first.evening.cost = Some("$40".to_string());

        let mut second = DayPlan::new(2, "Museums");
        second.morning.description = "Louvre".to_string();
        second.afternoon.description = "Orsay".to_string();

        Itinerary {
            daily_itinerary: vec![first, second],
            ..Default::default()
        }
    }

    #[test]
    fn test_swap_within_day() {
        let mut itinerary = sample();
        reorder(&mut itinerary, 0, SlotName::Morning, 0, 2).unwrap();

        let day = &itinerary.daily_itinerary[0];
        assert_eq!(day.morning.description, "Dinner");
        assert_eq!(day.morning.cost.as_deref(), Some("$40"));
        assert_eq!(day.morning.time_window, "9:00 AM - 12:00 PM");
        assert_eq!(day.evening.description, "Check in");
        assert!(day.evening.cost.is_none());
    }

    #[test]
    fn test_move_across_days() {
        let mut itinerary = sample();
        reorder(&mut itinerary, 1, SlotName::Afternoon, 0, 1).unwrap();

        assert_eq!(itinerary.daily_itinerary[0].afternoon.description, "Orsay");
        assert_eq!(itinerary.daily_itinerary[1].afternoon.description, "");
        assert!(itinerary.has_contiguous_numbering());
        assert_eq!(itinerary.day_count(), 2);
    }

    #[test]
    fn test_same_slot_is_noop() {
        let mut itinerary = sample();
        reorder(&mut itinerary, 1, SlotName::Morning, 1, 0).unwrap();
        assert_eq!(itinerary, sample());
    }

    #[test]
    fn test_out_of_range() {
        let mut itinerary = sample();
        assert_eq!(
            reorder(&mut itinerary, 0, SlotName::Morning, 2, 0),
            Err(ReorderError::DayOutOfRange { index: 2, day_count: 2 })
        );
        assert_eq!(
            reorder(&mut itinerary, 0, SlotName::Morning, 1, 3),
            Err(ReorderError::PositionOutOfRange(3))
        );
        assert_eq!(itinerary, sample());
    }
}
