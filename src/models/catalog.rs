use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub name: String,
    pub category: String,
    pub image: String,
    pub highlights: Vec<String>,
    pub best_season: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InterestCategory {
    pub name: String,
    pub interests: Vec<String>,
}
