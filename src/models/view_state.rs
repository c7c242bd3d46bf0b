use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::itinerary::{Itinerary, SlotName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Timeline,
    List,
    Map,
}

impl FromStr for ViewMode {
    type Err = ViewStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timeline" => Ok(ViewMode::Timeline),
            "list" => Ok(ViewMode::List),
            "map" => Ok(ViewMode::Map),
            _ => Err(ViewStateError::UnknownView(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStateError {
    DayOutOfRange { index: usize, day_count: usize },
    UnknownSlot(String),
    UnknownView(String),
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStateError::DayOutOfRange { index, day_count } => write!(
                f,
                "Day index {} out of range for itinerary with {} day(s)",
                index, day_count
            ),
            ViewStateError::UnknownSlot(slot) => write!(f, "Unknown slot: {}", slot),
            ViewStateError::UnknownView(view) => write!(f, "Unknown view: {}", view),
        }
    }
}

impl std::error::Error for ViewStateError {}

/// Per-display UI state for one itinerary: expanded days, favorite slots
/// and the selected view. Created fresh for every displayed itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    day_count: usize,
    expanded_days: BTreeSet<usize>,
    favorites: BTreeSet<(usize, SlotName)>,
    selected_view: ViewMode,
}

impl ViewState {
    pub fn new(itinerary: &Itinerary) -> Self {
        Self::with_day_count(itinerary.day_count())
    }

    pub fn with_day_count(day_count: usize) -> Self {
        let mut expanded_days = BTreeSet::new();
        if day_count > 0 {
            expanded_days.insert(0);
        }

        Self {
            day_count,
            expanded_days,
            favorites: BTreeSet::new(),
            selected_view: ViewMode::default(),
        }
    }

    /// Flips the expansion of a day and returns whether it is now expanded.
    pub fn toggle_expand(&mut self, day_index: usize) -> Result<bool, ViewStateError> {
        self.check_day(day_index)?;

        if self.expanded_days.remove(&day_index) {
            Ok(false)
        } else {
            self.expanded_days.insert(day_index);
            Ok(true)
        }
    }

    /// Flips the favorite mark of a slot and returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, day_index: usize, slot: &str) -> Result<bool, ViewStateError> {
        let slot: SlotName = slot
            .parse()
            .map_err(|_| ViewStateError::UnknownSlot(slot.to_string()))?;
        self.check_day(day_index)?;

        let key = (day_index, slot);
        if self.favorites.remove(&key) {
            Ok(false)
        } else {
            self.favorites.insert(key);
            Ok(true)
        }
    }

    pub fn select_view(&mut self, view: ViewMode) {
        self.selected_view = view;
    }

    pub fn is_expanded(&self, day_index: usize) -> bool {
        self.expanded_days.contains(&day_index)
    }

    pub fn is_favorite(&self, day_index: usize, slot: SlotName) -> bool {
        self.favorites.contains(&(day_index, slot))
    }

    pub fn expanded_days(&self) -> &BTreeSet<usize> {
        &self.expanded_days
    }

    pub fn favorites(&self) -> &BTreeSet<(usize, SlotName)> {
        &self.favorites
    }

    pub fn selected_view(&self) -> ViewMode {
        self.selected_view
    }

    fn check_day(&self, day_index: usize) -> Result<(), ViewStateError> {
        if day_index < self.day_count {
            Ok(())
        } else {
            Err(ViewStateError::DayOutOfRange {
                index: day_index,
                day_count: self.day_count,
            })
        }
    }
}
