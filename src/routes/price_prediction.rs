use actix_web::{web, HttpResponse, Responder};

use crate::models::{api_response::ApiResponse, price::PricePredictionRequest};
use crate::services::price_prediction_service::PricePredictionService;

/*
    /api/price-prediction
*/
pub async fn predict_prices(input: web::Json<PricePredictionRequest>) -> impl Responder {
    match PricePredictionService::default().predict(&input) {
        Ok(prediction) => HttpResponse::Ok().json(ApiResponse::success(prediction)),
        Err(err) => {
            log::warn!("Price prediction rejected: {}", err);
            HttpResponse::BadRequest().json(ApiResponse::error(err.to_string()))
        }
    }
}
