use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TravelPreferences {
    #[serde(default, rename = "travelStyles")]
    pub travel_styles: Vec<String>,
    #[serde(default, rename = "seasonalPreferences")]
    pub seasonal_preferences: Vec<String>,
    #[serde(default, rename = "budgetRange")]
    pub budget_range: Option<CostIndexRange>,
}

/// Bounds on a destination's 0-10 cost index.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CostIndexRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelHistoryEntry {
    pub destination: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub preferences: TravelPreferences,
    #[serde(default, rename = "travelHistory")]
    pub travel_history: Vec<TravelHistoryEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Recommendation {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub description: String,
    pub similarity_score: f64,
    pub cost_index: u32,
    pub image_url: String,
}
