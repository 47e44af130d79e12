use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::api_response::ApiResponse;

const DEFAULT_DESTINATION: &str = "Paris";

#[derive(Deserialize)]
pub struct WeatherRequest {
    destination: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub temperature: TemperatureRange,
    pub precipitation: u32,
    pub weather_condition: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub destination: String,
    pub forecast: Vec<DailyForecast>,
}

/*
    /api/weather-forecast

    No weather provider is wired in yet; every destination gets the same two days.
*/
pub async fn get_weather_forecast(input: web::Json<WeatherRequest>) -> impl Responder {
    let destination = input
        .into_inner()
        .destination
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DESTINATION.to_string());

    let forecast = WeatherForecast {
        destination,
        forecast: vec![
            DailyForecast {
                date: "2023-06-01".to_string(),
                temperature: TemperatureRange { min: 20, max: 28 },
                precipitation: 10,
                weather_condition: "sunny".to_string(),
            },
            DailyForecast {
                date: "2023-06-02".to_string(),
                temperature: TemperatureRange { min: 18, max: 25 },
                precipitation: 30,
                weather_condition: "partly_cloudy".to_string(),
            },
        ],
    };

    HttpResponse::Ok().json(ApiResponse::success(forecast))
}
