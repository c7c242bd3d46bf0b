use crate::models::itinerary::{ActivitySlot, Itinerary, SlotName};
use std::fmt::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExportFormat(pub String);

impl fmt::Display for UnknownExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown export format '{}', expected 'json' or 'text'",
            self.0
        )
    }
}

impl std::error::Error for UnknownExportFormat {}

impl FromStr for ExportFormat {
    type Err = UnknownExportFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(UnknownExportFormat(s.to_string())),
        }
    }
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain; charset=utf-8",
        }
    }

    fn file_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Json => "plan.json",
            ExportFormat::Text => "itinerary.txt",
        }
    }
}

/// Renders the itinerary for download.
pub fn export(itinerary: &Itinerary, format: ExportFormat) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Json => to_json(itinerary),
        ExportFormat::Text => Ok(to_text(itinerary)),
    }
}

pub fn to_json(itinerary: &Itinerary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(itinerary)
}

pub fn from_json(data: &str) -> Result<Itinerary, serde_json::Error> {
    serde_json::from_str(data)
}

/// Plain text layout; the normalizer reads it back as a text payload.
pub fn to_text(itinerary: &Itinerary) -> String {
    let overview = &itinerary.overview;
    let mut out = String::new();

    // Writing to a String never fails
    let _ = writeln!(
        out,
        "{} - {}-Day Itinerary",
        overview.destination, overview.duration_days
    );
    let _ = writeln!(out, "Total estimated cost: {}", overview.estimated_total_cost);
    if let Some(best_time) = &overview.best_time_to_visit {
        let _ = writeln!(out, "Best time to visit: {}", best_time);
    }
    if let Some(weather) = &overview.weather_overview {
        let _ = writeln!(out, "Weather: {}", weather);
    }

    for day in &itinerary.daily_itinerary {
        out.push('\n');
        if day.theme.is_empty() {
            let _ = writeln!(out, "Day {}", day.day_number);
        } else {
            let _ = writeln!(out, "Day {}: {}", day.day_number, day.theme);
        }
        for (slot, activity) in day.slots() {
            write_slot(&mut out, slot, activity);
        }
    }

    if !itinerary.travel_insights.is_empty() {
        out.push_str("\nTravel Insights\n");
        for (key, value) in &itinerary.travel_insights {
            let _ = writeln!(out, "- {}: {}", key.replace('_', " "), value);
        }
    }

    if !itinerary.alternative_activities.is_empty() {
        out.push_str("\nAlternative Activities\n");
        for activity in &itinerary.alternative_activities {
            let _ = writeln!(out, "- {}", activity);
        }
    }

    out
}

fn write_slot(out: &mut String, slot: SlotName, activity: &ActivitySlot) {
    if activity.time_window.is_empty() {
        let _ = writeln!(out, "{}: {}", slot.label(), activity.description);
    } else {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            slot.label(),
            activity.time_window,
            activity.description
        );
    }
    if let Some(location) = &activity.location {
        let _ = writeln!(out, "  Location: {}", location);
    }
    if let Some(cost) = &activity.cost {
        let _ = writeln!(out, "  Cost: {}", cost);
    }
    if let Some(tips) = &activity.tips {
        let _ = writeln!(out, "  Tips: {}", tips);
    }
}

/// Download file name, e.g. `new-york-plan.json`.
pub fn file_name(itinerary: &Itinerary, format: ExportFormat) -> String {
    let mut slug = String::new();
    for c in itinerary.overview.destination.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("itinerary-{}", format.file_suffix())
    } else {
        format!("{}-{}", slug, format.file_suffix())
    }
}
