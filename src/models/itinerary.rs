use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the three fixed time-of-day slots every day exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotName {
    Morning,
    Afternoon,
    Evening,
}

impl SlotName {
    pub const ALL: [SlotName; 3] = [SlotName::Morning, SlotName::Afternoon, SlotName::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::Morning => "morning",
            SlotName::Afternoon => "afternoon",
            SlotName::Evening => "evening",
        }
    }

    /// Position of the slot within a day (morning first).
    pub fn position(&self) -> usize {
        match self {
            SlotName::Morning => 0,
            SlotName::Afternoon => 1,
            SlotName::Evening => 2,
        }
    }

    pub fn from_position(position: usize) -> Option<SlotName> {
        SlotName::ALL.get(position).copied()
    }

    /// Display range used when the source gives no time window.
    pub fn default_time_window(&self) -> &'static str {
        match self {
            SlotName::Morning => "9:00 AM - 12:00 PM",
            SlotName::Afternoon => "1:00 PM - 5:00 PM",
            SlotName::Evening => "6:00 PM - 10:00 PM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotName::Morning => "Morning",
            SlotName::Afternoon => "Afternoon",
            SlotName::Evening => "Evening",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlotName(pub String);

impl fmt::Display for UnknownSlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown slot '{}', expected morning, afternoon or evening",
            self.0
        )
    }
}

impl std::error::Error for UnknownSlotName {}

impl FromStr for SlotName {
    type Err = UnknownSlotName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(SlotName::Morning),
            "afternoon" => Ok(SlotName::Afternoon),
            "evening" => Ok(SlotName::Evening),
            _ => Err(UnknownSlotName(s.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySlot {
    #[serde(default, alias = "time", alias = "time_window")]
    pub time_window: String,
    #[serde(default, alias = "activity")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl ActivitySlot {
    /// An empty slot carrying only the default time window for `slot`.
    pub fn empty(slot: SlotName) -> Self {
        Self {
            time_window: slot.default_time_window().to_string(),
            ..Default::default()
        }
    }

    fn empty_morning() -> Self {
        Self::empty(SlotName::Morning)
    }

    fn empty_afternoon() -> Self {
        Self::empty(SlotName::Afternoon)
    }

    fn empty_evening() -> Self {
        Self::empty(SlotName::Evening)
    }

    /// Copies the activity content of `other`, keeping this slot's time window.
    pub fn replace_activity(&mut self, other: &ActivitySlot) {
        self.description = other.description.clone();
        self.location = other.location.clone();
        self.cost = other.cost.clone();
        self.tips = other.tips.clone();
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    #[serde(default, alias = "day", alias = "day_number")]
    pub day_number: u32,
    #[serde(default)]
    pub theme: String,
    #[serde(default = "ActivitySlot::empty_morning")]
    pub morning: ActivitySlot,
    #[serde(default = "ActivitySlot::empty_afternoon")]
    pub afternoon: ActivitySlot,
    #[serde(default = "ActivitySlot::empty_evening")]
    pub evening: ActivitySlot,
}

impl DayPlan {
    pub fn new(day_number: u32, theme: impl Into<String>) -> Self {
        Self {
            day_number,
            theme: theme.into(),
            morning: ActivitySlot::empty(SlotName::Morning),
            afternoon: ActivitySlot::empty(SlotName::Afternoon),
            evening: ActivitySlot::empty(SlotName::Evening),
        }
    }

    pub fn slot(&self, slot: SlotName) -> &ActivitySlot {
        match slot {
            SlotName::Morning => &self.morning,
            SlotName::Afternoon => &self.afternoon,
            SlotName::Evening => &self.evening,
        }
    }

    pub fn slot_mut(&mut self, slot: SlotName) -> &mut ActivitySlot {
        match slot {
            SlotName::Morning => &mut self.morning,
            SlotName::Afternoon => &mut self.afternoon,
            SlotName::Evening => &mut self.evening,
        }
    }

    /// The three slots in chronological order.
    pub fn slots(&self) -> [(SlotName, &ActivitySlot); 3] {
        [
            (SlotName::Morning, &self.morning),
            (SlotName::Afternoon, &self.afternoon),
            (SlotName::Evening, &self.evening),
        ]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub destination: String,
    #[serde(default, alias = "duration", alias = "duration_days")]
    pub duration_days: u32,
    #[serde(default, alias = "total_estimated_cost", alias = "estimated_total_cost")]
    pub estimated_total_cost: String,
    #[serde(
        default,
        alias = "best_time_to_visit",
        skip_serializing_if = "Option::is_none"
    )]
    pub best_time_to_visit: Option<String>,
    #[serde(
        default,
        alias = "weather_overview",
        skip_serializing_if = "Option::is_none"
    )]
    pub weather_overview: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(default)]
    pub overview: Overview,
    #[serde(default, alias = "daily_itinerary")]
    pub daily_itinerary: Vec<DayPlan>,
    #[serde(default, alias = "travel_insights")]
    pub travel_insights: BTreeMap<String, String>,
    #[serde(default, alias = "alternative_activities")]
    pub alternative_activities: Vec<String>,
}

impl Itinerary {
    pub fn day_count(&self) -> usize {
        self.daily_itinerary.len()
    }

    /// Whether day numbers run 1..=n in order with no gaps or duplicates.
    pub fn has_contiguous_numbering(&self) -> bool {
        self.daily_itinerary
            .iter()
            .enumerate()
            .all(|(i, day)| day.day_number as usize == i + 1)
    }
}
