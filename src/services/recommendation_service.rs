use crate::models::recommendation::{Recommendation, RecommendationRequest, TravelPreferences};

const FEATURE_COUNT: usize = 11;
const MAX_RECOMMENDATIONS: usize = 5;
const EXPLICIT_PREFERENCE_WEIGHT: f64 = 0.7;
const HISTORY_WEIGHT: f64 = 0.3;

/// Feature order: adventure, beach, cultural, eco_friendly, family, luxury,
/// budget, spring, summer, fall, winter
const TRAVEL_STYLES: [&str; 7] = [
    "adventure",
    "beach",
    "cultural",
    "eco-friendly",
    "family",
    "luxury",
    "budget",
];
const SEASONS: [&str; 4] = ["spring", "summer", "fall", "winter"];

#[derive(Debug, Clone)]
pub struct DestinationProfile {
    pub id: u32,
    pub name: &'static str,
    pub country: &'static str,
    pub description: &'static str,
    pub features: [f64; FEATURE_COUNT],
    pub cost_index: u32,
    pub image_url: &'static str,
}

pub struct RecommendationService {
    destinations: Vec<DestinationProfile>,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new(sample_destinations())
    }
}

impl RecommendationService {
    pub fn new(destinations: Vec<DestinationProfile>) -> Self {
        Self { destinations }
    }

    /// Rank destinations by cosine similarity to the traveller's preferences,
    /// within the requested cost-index range.
    pub fn recommend(&self, request: &RecommendationRequest) -> Vec<Recommendation> {
        let mut user_vector = user_vector(&request.preferences);

        let visited: Vec<&DestinationProfile> = self
            .destinations
            .iter()
            .filter(|d| request.travel_history.iter().any(|h| h.destination == d.name))
            .collect();
        if !visited.is_empty() {
            let history = mean_features(&visited);
            for (value, past) in user_vector.iter_mut().zip(history) {
                *value = EXPLICIT_PREFERENCE_WEIGHT * *value + HISTORY_WEIGHT * past;
            }
        }

        let (min_budget, max_budget) = request
            .preferences
            .budget_range
            .as_ref()
            .map(|b| (b.min.unwrap_or(0.0), b.max.unwrap_or(10.0)))
            .unwrap_or((0.0, 10.0));

        let mut ranked: Vec<Recommendation> = self
            .destinations
            .iter()
            .filter(|d| {
                let cost = d.cost_index as f64;
                cost >= min_budget && cost <= max_budget
            })
            .map(|d| Recommendation {
                id: d.id,
                name: d.name.to_string(),
                country: d.country.to_string(),
                description: d.description.to_string(),
                similarity_score: cosine_similarity(&user_vector, &d.features),
                cost_index: d.cost_index,
                image_url: d.image_url.to_string(),
            })
            .collect();

        ranked.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        ranked.truncate(MAX_RECOMMENDATIONS);
        ranked
    }
}

fn user_vector(preferences: &TravelPreferences) -> [f64; FEATURE_COUNT] {
    let mut vector = [0.0; FEATURE_COUNT];

    for style in &preferences.travel_styles {
        if let Some(i) = TRAVEL_STYLES.iter().position(|s| s == style) {
            vector[i] = 1.0;
        }
    }
    for season in &preferences.seasonal_preferences {
        if let Some(i) = SEASONS.iter().position(|s| s == season) {
            vector[TRAVEL_STYLES.len() + i] = 1.0;
        }
    }

    vector
}

fn mean_features(destinations: &[&DestinationProfile]) -> [f64; FEATURE_COUNT] {
    let mut mean = [0.0; FEATURE_COUNT];
    for d in destinations {
        for (acc, value) in mean.iter_mut().zip(d.features) {
            *acc += value;
        }
    }
    let n = destinations.len() as f64;
    mean.iter_mut().for_each(|v| *v /= n);
    mean
}

/// Zero when either vector has no magnitude
fn cosine_similarity(a: &[f64; FEATURE_COUNT], b: &[f64; FEATURE_COUNT]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

pub fn sample_destinations() -> Vec<DestinationProfile> {
    vec![
        DestinationProfile {
            id: 1,
            name: "Paris",
            country: "France",
            description: "The City of Light",
            features: [0.3, 0.0, 0.9, 0.4, 0.6, 0.8, 0.3, 0.8, 0.7, 0.8, 0.5],
            cost_index: 8,
            image_url: "https://example.com/paris.jpg",
        },
        DestinationProfile {
            id: 2,
            name: "Bali",
            country: "Indonesia",
            description: "Island of the Gods",
            features: [0.7, 0.9, 0.7, 0.6, 0.7, 0.7, 0.6, 0.6, 0.9, 0.7, 0.8],
            cost_index: 5,
            image_url: "https://example.com/bali.jpg",
        },
        DestinationProfile {
            id: 3,
            name: "New York City",
            country: "USA",
            description: "The Big Apple",
            features: [0.5, 0.2, 0.9, 0.3, 0.6, 0.9, 0.2, 0.7, 0.8, 0.9, 0.6],
            cost_index: 9,
            image_url: "https://example.com/nyc.jpg",
        },
        DestinationProfile {
            id: 4,
            name: "Tokyo",
            country: "Japan",
            description: "Where tradition meets future",
            features: [0.6, 0.1, 0.9, 0.5, 0.7, 0.8, 0.4, 0.9, 0.6, 0.8, 0.5],
            cost_index: 8,
            image_url: "https://example.com/tokyo.jpg",
        },
        DestinationProfile {
            id: 5,
            name: "Santorini",
            country: "Greece",
            description: "Stunning island with white architecture",
            features: [0.4, 0.9, 0.7, 0.6, 0.5, 0.9, 0.3, 0.7, 0.9, 0.7, 0.3],
            cost_index: 7,
            image_url: "https://example.com/santorini.jpg",
        },
    ]
}
