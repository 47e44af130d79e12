use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::catalog::ActivityCatalog;
use crate::models::{api_response::ApiResponse, itinerary::OptimizeRequest};
use crate::services::itinerary_optimizer_service::ItineraryOptimizer;
use crate::services::scheduler_service::SchedulerConfig;

/*
    /api/optimize-itinerary
*/
pub async fn optimize_itinerary(
    catalog: web::Data<Arc<ActivityCatalog>>,
    config: web::Data<SchedulerConfig>,
    input: web::Json<OptimizeRequest>,
) -> impl Responder {
    let request = input.into_inner();
    log::debug!("Optimize request: {:?}", request);

    let optimizer =
        ItineraryOptimizer::with_config(catalog.get_ref().clone(), config.get_ref().clone());

    match optimizer.optimize(
        &request.destinations,
        &request.preferences,
        &request.constraints,
    ) {
        Ok(plan) => HttpResponse::Ok().json(ApiResponse::success(plan)),
        Err(err) => {
            log::warn!("Failed to optimize itinerary: {}", err);
            HttpResponse::BadRequest().json(ApiResponse::error(err.to_string()))
        }
    }
}
