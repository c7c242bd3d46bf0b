//! Itinerary Normalizer
//!
//! Turns whatever the generation backend returned into a canonical
//! [`Itinerary`]: an ordered list of days, each with exactly a morning,
//! afternoon and evening slot.
//!
//! ## Structured payloads
//! Passed through as-is. Day numbers are re-derived from position and the
//! overview duration always equals the number of days. Nothing else is
//! touched.
//!
//! ## Text payloads
//! Freeform text is read line by line with a small state machine:
//! - document: `BeforeFirstDay` -> `InDay` -> (`Trailer`) -> `InDay` ...
//! - inside a day: `NoSlotYet` -> `InSlot(slot)` / `Ignoring`
//!
//! A day starts at a line like `Day 1: Arrival`, `**Day 2 - Museums**`,
//! `Day One: Arrival` or `Itinerary - Day 3: Departure`.
//! Slot labels (`Morning:`, `🌙 Evening`, `Afternoon (1-5 PM):`) open a slot;
//! only the first label of each kind in a day counts. Lines that are
//! neither extend the open slot. Text before the first day is dropped and
//! day numbers written in the text are ignored.
//!
//! Malformed text never fails: when no day is found a single placeholder
//! day is produced instead.

use log::{debug, warn};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::models::itinerary::{ActivitySlot, DayPlan, Itinerary, Overview, SlotName};
use crate::models::payload::{PayloadFormat, RawItineraryPayload};

const COST_PLACEHOLDER: &str = "Varies by preferences";
const FALLBACK_MORNING: &str = "Explore the city";
const FALLBACK_AFTERNOON: &str = "Visit local attractions";
const FALLBACK_EVENING: &str = "Enjoy dinner";
const FALLBACK_TIP: &str = "Start your adventure!";

// 9:00, 9 AM, 9:30 p.m.
const CLOCK: &str = r"(?:\d{1,2}(?::\d{2})?\s*[ap]\.?m\b\.?|\d{1,2}:\d{2})";

// "day" followed by a number (digits, ordinal or word) or directly by a colon
static DAY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bday[\s*_]*(?:#\s*)?(?:(?:\d+(?:st|nd|rd|th)?|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|thirteen|fourteen|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\b|:)[\s*_#:.)\-–—]*(?P<rest>.*)$",
    )
    .expect("day marker pattern")
});

static SLOT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)(?:(?P<emoji>🌅|🌞|☀\x{{FE0F}}?|🌙)[\s*_]*(?:(?P<eword>morning|afternoon|evening)\b)?|\b(?P<word>morning|afternoon|evening)\b)[\s*_]*(?:\((?P<window>[^)]*)\)[\s*_]*|(?P<bare>{clock}(?:\s*(?:-|–|—|to)\s*{clock})?)[\s*_]*)?(?P<delim>[:\-–—]+)?[\s*_]*",
        clock = CLOCK
    );
    Regex::new(&pattern).expect("slot label pattern")
});

static DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\p{L}\p{N}]*(?P<field>location|where|cost|price|tips?|time)[\s*_]*:[\s*_]*(?P<value>.*)$")
        .expect("detail pattern")
});

static TOTAL_COST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\p{L}\p{N}]*(?:total\s+estimated\s+cost|estimated\s+total\s+cost|total\s+cost|total\s+budget)[\s*_]*:[\s*_]*(?P<value>.+)$")
        .expect("total cost pattern")
});

static SECTION_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\p{L}\p{N}]*(?:travel\s+insights|alternative\s+activities|general\s+tips|packing\s+(?:list|suggestions))[\s*_#:]*$")
        .expect("section break pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPayloadError {
    MissingDestination,
    /// Neither `structuredData` nor `text` was supplied.
    MissingContent,
    UnknownFormat(String),
    MissingStructuredData,
    MissingText,
}

impl fmt::Display for InvalidPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPayloadError::MissingDestination => write!(f, "Destination is required"),
            InvalidPayloadError::MissingContent => {
                write!(f, "Payload needs either structuredData or text")
            }
            InvalidPayloadError::UnknownFormat(format) => write!(
                f,
                "Unknown payload format '{}', expected 'structured' or 'text'",
                format
            ),
            InvalidPayloadError::MissingStructuredData => {
                write!(f, "Structured payload is missing structuredData")
            }
            InvalidPayloadError::MissingText => write!(f, "Text payload is missing text"),
        }
    }
}

impl std::error::Error for InvalidPayloadError {}

#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    pub cost_placeholder: String,
    pub fallback_morning: String,
    pub fallback_afternoon: String,
    pub fallback_evening: String,
    pub fallback_tip: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            cost_placeholder: COST_PLACEHOLDER.to_string(),
            fallback_morning: FALLBACK_MORNING.to_string(),
            fallback_afternoon: FALLBACK_AFTERNOON.to_string(),
            fallback_evening: FALLBACK_EVENING.to_string(),
            fallback_tip: FALLBACK_TIP.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItineraryNormalizer {
    config: NormalizerConfig,
}

/// Normalizes a payload with the default configuration.
pub fn normalize(payload: RawItineraryPayload) -> Result<Itinerary, InvalidPayloadError> {
    ItineraryNormalizer::new().normalize(payload)
}

impl ItineraryNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Converts a raw payload into a canonical itinerary.
    ///
    /// Only payloads breaking the minimal contract are rejected; any text,
    /// however garbled, yields a valid itinerary.
    pub fn normalize(&self, payload: RawItineraryPayload) -> Result<Itinerary, InvalidPayloadError> {
        let destination = payload
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or(InvalidPayloadError::MissingDestination)?
            .to_string();

        let format = match payload.format.as_deref() {
            Some(format) => format
                .parse::<PayloadFormat>()
                .map_err(InvalidPayloadError::UnknownFormat)?,
            // The backend response carries no format; go by what is present
            None if payload.structured_data.is_some() => PayloadFormat::Structured,
            None if payload.text.is_some() => PayloadFormat::Text,
            None => return Err(InvalidPayloadError::MissingContent),
        };

        match format {
            PayloadFormat::Structured => {
                let itinerary = payload
                    .structured_data
                    .ok_or(InvalidPayloadError::MissingStructuredData)?;
                Ok(self.normalize_structured(&destination, itinerary))
            }
            PayloadFormat::Text => {
                let text = payload.text.ok_or(InvalidPayloadError::MissingText)?;
                if let Some(declared) = payload.duration_days {
                    debug!("Text itinerary for {} declares {} day(s)", destination, declared);
                }
                Ok(self.normalize_text(
                    &destination,
                    &text,
                    payload.insights.unwrap_or_default(),
                    payload.alternative_activities.unwrap_or_default(),
                ))
            }
        }
    }

    fn normalize_structured(&self, destination: &str, mut itinerary: Itinerary) -> Itinerary {
        if itinerary.daily_itinerary.is_empty() {
            warn!(
                "Structured itinerary for {} has no days, using placeholder day",
                destination
            );
            itinerary.daily_itinerary.push(self.fallback_day(destination));
        }

        for (index, day) in itinerary.daily_itinerary.iter_mut().enumerate() {
            let expected = index as u32 + 1;
            if day.day_number != expected {
                debug!("Renumbering day {} to {}", day.day_number, expected);
                day.day_number = expected;
            }
        }

        let day_count = itinerary.daily_itinerary.len() as u32;
        if itinerary.overview.duration_days != day_count {
            debug!(
                "Declared duration {} does not match {} day(s), using day count",
                itinerary.overview.duration_days, day_count
            );
            itinerary.overview.duration_days = day_count;
        }

        itinerary
    }

    fn normalize_text(
        &self,
        destination: &str,
        text: &str,
        insights: BTreeMap<String, String>,
        alternatives: Vec<String>,
    ) -> Itinerary {
        let mut parser = TextParser::new();
        for line in text.lines() {
            parser.feed_line(line);
        }
        let (mut days, total_cost) = parser.finish();

        if days.is_empty() {
            warn!(
                "No day markers found in text itinerary for {}, using placeholder day",
                destination
            );
            days.push(self.fallback_day(destination));
        } else {
            debug!(
                "Parsed {} day(s) from text itinerary for {}",
                days.len(),
                destination
            );
        }

        Itinerary {
            overview: Overview {
                destination: destination.to_string(),
                duration_days: days.len() as u32,
                estimated_total_cost: total_cost
                    .unwrap_or_else(|| self.config.cost_placeholder.clone()),
                best_time_to_visit: None,
                weather_overview: None,
            },
            daily_itinerary: days,
            travel_insights: insights,
            alternative_activities: alternatives,
        }
    }

    /// Placeholder day used when nothing usable was found.
    pub fn fallback_day(&self, destination: &str) -> DayPlan {
        let mut day = DayPlan::new(1, format!("Explore {}", destination));
        day.morning.description = self.config.fallback_morning.clone();
        day.morning.tips = Some(self.config.fallback_tip.clone());
        day.afternoon.description = self.config.fallback_afternoon.clone();
        day.evening.description = self.config.fallback_evening.clone();
        day
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotCursor {
    NoSlotYet,
    InSlot(SlotName),
    /// Repeated label; its text is dropped.
    Ignoring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailField {
    Location,
    Cost,
    Tips,
    Time,
}

impl DetailField {
    fn parse(field: &str) -> Option<DetailField> {
        match field.to_ascii_lowercase().as_str() {
            "location" | "where" => Some(DetailField::Location),
            "cost" | "price" => Some(DetailField::Cost),
            "tip" | "tips" => Some(DetailField::Tips),
            "time" => Some(DetailField::Time),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct DayDraft {
    theme: String,
    slots: [Option<ActivitySlot>; 3],
    /// Set once a slot's window came from its label or a `Time:` line.
    explicit_window: [bool; 3],
    cursor: SlotCursor,
}

impl DayDraft {
    fn new() -> Self {
        Self {
            theme: String::new(),
            slots: [None, None, None],
            explicit_window: [false; 3],
            cursor: SlotCursor::NoSlotYet,
        }
    }

    /// Splits `text` at slot labels; the part before the first label
    /// belongs to whatever is currently open.
    fn push_clauses(&mut self, text: &str) {
        let mut pending: Option<(SlotName, Option<&str>)> = None;
        let mut cursor = 0;

        for caps in SLOT_LABEL.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            let Some(slot) = label_slot(&caps) else { continue };
            if !is_label(&caps, text, whole.start(), whole.end()) {
                continue;
            }

            self.push_clause(pending, &text[cursor..whole.start()]);
            let window = caps
                .name("window")
                .or_else(|| caps.name("bare"))
                .map(|m| m.as_str());
            pending = Some((slot, window));
            cursor = whole.end();
        }

        self.push_clause(pending, &text[cursor..]);
    }

    fn push_clause(&mut self, label: Option<(SlotName, Option<&str>)>, fragment: &str) {
        match label {
            Some((slot, window)) => self.open_slot(slot, window, fragment),
            None => self.push_text(fragment),
        }
    }

    fn open_slot(&mut self, slot: SlotName, window: Option<&str>, text: &str) {
        let position = slot.position();
        if self.slots[position].is_some() {
            self.cursor = SlotCursor::Ignoring;
            return;
        }

        let mut activity = ActivitySlot::empty(slot);
        if let Some(window) = window.map(clean).filter(|w| !w.is_empty()) {
            activity.time_window = window.to_string();
            self.explicit_window[position] = true;
        }
        activity.description = clean(text).to_string();

        self.slots[position] = Some(activity);
        self.cursor = SlotCursor::InSlot(slot);
    }

    fn push_text(&mut self, text: &str) {
        let text = clean(text);
        if text.is_empty() {
            return;
        }

        match self.cursor {
            SlotCursor::InSlot(slot) => {
                if let Some(activity) = self.slots[slot.position()].as_mut() {
                    append(&mut activity.description, text);
                }
            }
            SlotCursor::NoSlotYet => {
                if self.theme.is_empty() {
                    self.theme = text.to_string();
                }
            }
            SlotCursor::Ignoring => {}
        }
    }

    /// Returns false when no slot is open to receive the detail.
    fn push_detail(&mut self, field: DetailField, value: &str) -> bool {
        let SlotCursor::InSlot(slot) = self.cursor else {
            return self.cursor == SlotCursor::Ignoring;
        };
        let Some(activity) = self.slots[slot.position()].as_mut() else {
            return false;
        };

        let value = clean(value);
        if value.is_empty() {
            return true;
        }

        let target = match field {
            DetailField::Location => &mut activity.location,
            DetailField::Cost => &mut activity.cost,
            DetailField::Tips => &mut activity.tips,
            DetailField::Time => {
                if !self.explicit_window[slot.position()] {
                    activity.time_window = value.to_string();
                    self.explicit_window[slot.position()] = true;
                }
                return true;
            }
        };
        if target.is_none() {
            *target = Some(value.to_string());
        }
        true
    }

    fn finish(self, day_number: u32) -> DayPlan {
        let [morning, afternoon, evening] = self.slots;
        DayPlan {
            day_number,
            theme: self.theme,
            morning: morning.unwrap_or_else(|| ActivitySlot::empty(SlotName::Morning)),
            afternoon: afternoon.unwrap_or_else(|| ActivitySlot::empty(SlotName::Afternoon)),
            evening: evening.unwrap_or_else(|| ActivitySlot::empty(SlotName::Evening)),
        }
    }
}

#[derive(Debug)]
enum DocumentState {
    BeforeFirstDay,
    InDay(DayDraft),
    /// After a closing section heading; lines are ignored until the next day.
    Trailer,
}

struct TextParser {
    state: DocumentState,
    days: Vec<DayPlan>,
    total_cost: Option<String>,
}

impl TextParser {
    fn new() -> Self {
        Self {
            state: DocumentState::BeforeFirstDay,
            days: Vec::new(),
            total_cost: None,
        }
    }

    fn feed_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if let Some(rest) = day_marker(line) {
            self.close_day();
            let mut draft = DayDraft::new();
            draft.push_clauses(rest);
            self.state = DocumentState::InDay(draft);
            return;
        }

        if SECTION_BREAK.is_match(line) {
            self.close_day();
            self.state = DocumentState::Trailer;
            return;
        }

        if let Some(caps) = TOTAL_COST.captures(line) {
            if self.total_cost.is_none() {
                let value = clean(caps.name("value").map_or("", |m| m.as_str()));
                if !value.is_empty() {
                    self.total_cost = Some(value.to_string());
                }
            }
            return;
        }

        let DocumentState::InDay(draft) = &mut self.state else {
            return;
        };

        if let Some(caps) = DETAIL.captures(line) {
            let field = caps.name("field").and_then(|m| DetailField::parse(m.as_str()));
            let value = caps.name("value").map_or("", |m| m.as_str());
            if let Some(field) = field {
                if draft.push_detail(field, value) {
                    return;
                }
            }
        }

        draft.push_clauses(line);
    }

    fn close_day(&mut self) {
        if let DocumentState::InDay(draft) =
            std::mem::replace(&mut self.state, DocumentState::BeforeFirstDay)
        {
            let day_number = self.days.len() as u32 + 1;
            self.days.push(draft.finish(day_number));
        }
    }

    fn finish(mut self) -> (Vec<DayPlan>, Option<String>) {
        self.close_day();
        (self.days, self.total_cost)
    }
}

/// Returns the text after the marker when `line` starts a new day.
///
/// The marker may follow a heading prefix ending in a separator
/// (`Itinerary - Day 1: Arrival`), but lines led by a slot label or a
/// detail field (`Morning: Day 2 recap`) never start a day.
fn day_marker(line: &str) -> Option<&str> {
    let caps = DAY_MARKER.captures(line)?;
    let start = caps.get(0)?.start();
    let rest = caps.name("rest").map_or("", |m| m.as_str());

    let prefix = &line[..start];
    if prefix.chars().all(|c| !c.is_alphanumeric()) {
        return Some(rest);
    }

    let heading = prefix.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '_' | '#'));
    if !heading.ends_with(['-', '–', '—', ':', '|']) {
        return None;
    }
    if DETAIL.is_match(line) || leads_with_label(line) {
        return None;
    }
    Some(rest)
}

fn leads_with_label(line: &str) -> bool {
    SLOT_LABEL.captures_iter(line).next().is_some_and(|caps| {
        let Some(whole) = caps.get(0) else { return false };
        line[..whole.start()].chars().all(|c| !c.is_alphanumeric())
            && label_slot(&caps).is_some()
            && is_label(&caps, line, whole.start(), whole.end())
    })
}

fn label_slot(caps: &Captures<'_>) -> Option<SlotName> {
    if let Some(word) = caps.name("word").or_else(|| caps.name("eword")) {
        return word.as_str().parse().ok();
    }

    match caps.name("emoji")?.as_str() {
        "🌅" => Some(SlotName::Morning),
        "🌙" => Some(SlotName::Evening),
        _ => Some(SlotName::Afternoon),
    }
}

/// A bare word like "afternoon" is only a label when it reads like one:
/// followed by a colon, or at line start with a dash, a time window or
/// nothing after it. Emoji markers always count.
fn is_label(caps: &Captures<'_>, text: &str, start: usize, end: usize) -> bool {
    if caps.name("emoji").is_some() {
        return true;
    }

    let leading = text[..start].chars().all(|c| !c.is_alphanumeric());
    match caps.name("delim") {
        Some(delim) => leading || delim.as_str().starts_with(':'),
        None => {
            let has_window = caps.name("window").is_some() || caps.name("bare").is_some();
            leading && (has_window || text[end..].trim().is_empty())
        }
    }
}

fn clean(text: &str) -> &str {
    text.trim()
        .trim_start_matches(|c: char| matches!(c, '-' | '•' | '*' | '_' | '#' | '`') || c.is_whitespace())
        .trim_end_matches(|c: char| matches!(c, '*' | '_' | '#' | '`') || c.is_whitespace())
}

fn append(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}
