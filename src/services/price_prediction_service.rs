use crate::error::PricePredictionError;
use crate::models::price::{DailyPrice, PricePrediction, PricePredictionRequest};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use std::collections::HashMap;

const DEFAULT_NOISE_PERCENT: f64 = 5.0;
const MAX_STAY_NIGHTS: i64 = 365;
const HOLIDAYS: [(u32, u32); 3] = [(1, 1), (7, 4), (12, 25)];

#[derive(Debug, Clone)]
pub struct PriceProfile {
    pub hotel: f64,
    pub hostel: f64,
    pub apartment: f64,
    /// spring, summer, fall, winter
    pub seasonal: [f64; 4],
    pub weekend_multiplier: f64,
    pub holiday_multiplier: f64,
}

impl PriceProfile {
    fn base_price(&self, accommodation_type: &str) -> f64 {
        match accommodation_type {
            "hostel" => self.hostel,
            "apartment" => self.apartment,
            _ => self.hotel,
        }
    }
}

/// Rule-based nightly accommodation price estimates.
pub struct PricePredictionService {
    profiles: HashMap<String, PriceProfile>,
    noise_percent: f64,
}

impl Default for PricePredictionService {
    fn default() -> Self {
        Self::new(sample_profiles())
    }
}

impl PricePredictionService {
    pub fn new(profiles: HashMap<String, PriceProfile>) -> Self {
        Self {
            profiles,
            noise_percent: DEFAULT_NOISE_PERCENT,
        }
    }

    /// Random variation applied to each night, in percent either way
    pub fn with_noise_percent(mut self, noise_percent: f64) -> Self {
        self.noise_percent = noise_percent;
        self
    }

    pub fn predict(
        &self,
        request: &PricePredictionRequest,
    ) -> Result<PricePrediction, PricePredictionError> {
        let today = chrono::Local::now().date_naive();
        self.predict_with(request, today, &mut rand::thread_rng())
    }

    pub fn predict_with<R: Rng>(
        &self,
        request: &PricePredictionRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<PricePrediction, PricePredictionError> {
        let destination = request.destination.clone().unwrap_or_default();
        let profile = self
            .profiles
            .get(&destination)
            .ok_or_else(|| PricePredictionError::UnknownDestination(destination.clone()))?;

        let check_in = parse_date(request.dates.check_in.as_deref())?;
        let check_out = parse_date(request.dates.check_out.as_deref())?;
        if check_out <= check_in {
            return Err(PricePredictionError::InvalidRange);
        }

        let num_nights = (check_out - check_in).num_days();
        if num_nights > MAX_STAY_NIGHTS {
            return Err(PricePredictionError::StayTooLong {
                nights: num_nights,
                max: MAX_STAY_NIGHTS,
            });
        }
        let base_price = profile.base_price(&request.accommodation_type);

        let daily_prices: Vec<DailyPrice> = check_in
            .iter_days()
            .take_while(|date| *date < check_out)
            .map(|date| {
                let mut price = base_price * profile.seasonal[season_index(date)];
                if is_weekend(date) {
                    price *= profile.weekend_multiplier;
                }
                if is_holiday(date) {
                    price *= profile.holiday_multiplier;
                }
                price *= booking_trend(today, date);
                price *= 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * (self.noise_percent / 100.0);

                DailyPrice {
                    date: date.format("%Y-%m-%d").to_string(),
                    price: round_cents(price),
                }
            })
            .collect();

        let total_price: f64 = daily_prices.iter().map(|d| d.price).sum();
        log::debug!(
            "Predicted {} night(s) in {} at {:.2} total",
            num_nights,
            destination,
            total_price
        );

        Ok(PricePrediction {
            destination,
            accommodation_type: request.accommodation_type.clone(),
            check_in: check_in.format("%Y-%m-%d").to_string(),
            check_out: check_out.format("%Y-%m-%d").to_string(),
            num_nights,
            daily_prices,
            total_price: round_cents(total_price),
            average_price: round_cents(total_price / num_nights as f64),
            currency: "USD".to_string(),
        })
    }
}

fn parse_date(value: Option<&str>) -> Result<NaiveDate, PricePredictionError> {
    value
        .and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
        .ok_or(PricePredictionError::InvalidDate)
}

fn season_index(date: NaiveDate) -> usize {
    match date.month() {
        3..=5 => 0,
        6..=8 => 1,
        9..=11 => 2,
        _ => 3,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn is_holiday(date: NaiveDate) -> bool {
    HOLIDAYS.contains(&(date.month(), date.day()))
}

/// Prices rise as the stay gets closer
fn booking_trend(today: NaiveDate, date: NaiveDate) -> f64 {
    let days_ahead = (date - today).num_days();
    if days_ahead <= 7 {
        1.2
    } else if days_ahead <= 30 {
        1.1
    } else if days_ahead <= 90 {
        0.9
    } else {
        1.0
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn sample_profiles() -> HashMap<String, PriceProfile> {
    let profiles = [
        ("Paris", 200.0, 50.0, 150.0, [1.2, 1.5, 1.0, 0.8], 1.3, 1.7),
        ("Bali", 100.0, 20.0, 80.0, [1.0, 1.2, 0.8, 1.3], 1.2, 1.5),
        ("New York City", 300.0, 80.0, 250.0, [1.2, 1.0, 1.4, 0.9], 1.1, 1.6),
        ("Tokyo", 180.0, 40.0, 120.0, [1.5, 1.0, 1.3, 0.8], 1.1, 1.4),
        ("Santorini", 220.0, 60.0, 180.0, [1.0, 1.8, 1.0, 0.6], 1.2, 1.5),
    ];

    profiles
        .into_iter()
        .map(|(name, hotel, hostel, apartment, seasonal, weekend, holiday)| {
            (
                name.to_string(),
                PriceProfile {
                    hotel,
                    hostel,
                    apartment,
                    seasonal,
                    weekend_multiplier: weekend,
                    holiday_multiplier: holiday,
                },
            )
        })
        .collect()
}
