use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::activity::{deserialize_hhmm, serialize_hhmm, Activity, Coordinates};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScoredActivity {
    #[serde(flatten)]
    pub activity: Activity,
    pub preference_score: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScheduledVisit {
    #[serde(flatten)]
    pub scored: ScoredActivity,
    /// Minutes spent getting here from the previous stop
    pub travel_time: f64,
    #[serde(serialize_with = "serialize_hhmm", deserialize_with = "deserialize_hhmm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm", deserialize_with = "deserialize_hhmm")]
    pub end_time: NaiveTime,
}

impl ScheduledVisit {
    pub fn activity(&self) -> &Activity {
        &self.scored.activity
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DailyItinerary {
    pub date: String,
    pub day_of_week: String,
    pub activities: Vec<ScheduledVisit>,
}

impl DailyItinerary {
    pub fn cost(&self) -> f64 {
        self.activities.iter().map(|v| v.activity().cost).sum()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DestinationPlan {
    pub destination: String,
    pub daily_itineraries: Vec<DailyItinerary>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TripSummary {
    pub total_destinations: usize,
    pub total_days: usize,
    pub estimated_cost: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TripPlan {
    pub itinerary: Vec<DestinationPlan>,
    pub summary: TripSummary,
    /// Requested locations with no catalog entry
    #[serde(default)]
    pub skipped_locations: Vec<String>,
}

impl TripPlan {
    pub fn from_destinations(
        itinerary: Vec<DestinationPlan>,
        skipped_locations: Vec<String>,
    ) -> Self {
        let summary = TripSummary {
            total_destinations: itinerary.len(),
            total_days: itinerary.iter().map(|d| d.daily_itineraries.len()).sum(),
            estimated_cost: itinerary
                .iter()
                .flat_map(|d| d.daily_itineraries.iter())
                .map(DailyItinerary::cost)
                .sum(),
        };

        Self {
            itinerary,
            summary,
            skipped_locations,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationRequest {
    pub location: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Where each day starts, e.g. the hotel. Defaults to the top-ranked activity.
    #[serde(default)]
    pub start_location: Option<Coordinates>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Preferences {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, rename = "budgetRange", alias = "budget_range")]
    pub budget_range: Option<BudgetRange>,
}

impl Preferences {
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            budget_range: None,
        }
    }

    pub fn prefers(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Constraints {
    pub daily_start_time: Option<String>,
    pub daily_end_time: Option<String>,
    pub transport_mode: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub destinations: Vec<DestinationRequest>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub constraints: Constraints,
}
