use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StayDates {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricePredictionRequest {
    pub destination: Option<String>,
    #[serde(default)]
    pub dates: StayDates,
    #[serde(default = "default_accommodation_type", rename = "accommodationType")]
    pub accommodation_type: String,
}

fn default_accommodation_type() -> String {
    "hotel".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DailyPrice {
    pub date: String,
    pub price: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PricePrediction {
    pub destination: String,
    pub accommodation_type: String,
    pub check_in: String,
    pub check_out: String,
    pub num_nights: i64,
    pub daily_prices: Vec<DailyPrice>,
    pub total_price: f64,
    pub average_price: f64,
    pub currency: String,
}
