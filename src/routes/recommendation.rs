use actix_web::{web, HttpResponse, Responder};

use crate::models::{api_response::ApiResponse, recommendation::RecommendationRequest};
use crate::services::recommendation_service::RecommendationService;

/*
    /api/recommendations
*/
pub async fn get_recommendations(input: web::Json<RecommendationRequest>) -> impl Responder {
    let recommendations = RecommendationService::default().recommend(&input);
    log::debug!("Returning {} recommendations", recommendations.len());
    HttpResponse::Ok().json(ApiResponse::success(recommendations))
}
