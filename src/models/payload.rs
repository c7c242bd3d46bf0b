use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::itinerary::Itinerary;

/// Itinerary payload as received from the generation backend.
///
/// Every field is optional at the wire level; the normalizer decides what
/// is missing. Keys are accepted in camelCase and in the snake_case form
/// the backend emits.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawItineraryPayload {
    #[serde(default, alias = "city", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(
        default,
        alias = "duration_days",
        alias = "days",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(
        default,
        alias = "structured_data",
        skip_serializing_if = "Option::is_none"
    )]
    pub structured_data: Option<Itinerary>,
    #[serde(
        default,
        alias = "itinerary",
        alias = "raw_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<BTreeMap<String, String>>,
    #[serde(
        default,
        alias = "alternative_activities",
        skip_serializing_if = "Option::is_none"
    )]
    pub alternative_activities: Option<Vec<String>>,
}

impl RawItineraryPayload {
    pub fn text(destination: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
            format: Some(PayloadFormat::Text.as_str().to_string()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn structured(destination: impl Into<String>, itinerary: Itinerary) -> Self {
        Self {
            destination: Some(destination.into()),
            format: Some(PayloadFormat::Structured.as_str().to_string()),
            structured_data: Some(itinerary),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Structured,
    Text,
}

impl PayloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadFormat::Structured => "structured",
            PayloadFormat::Text => "text",
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("structured") {
            Ok(PayloadFormat::Structured)
        } else if value.eq_ignore_ascii_case("text") {
            Ok(PayloadFormat::Text)
        } else {
            Err(s.to_string())
        }
    }
}
