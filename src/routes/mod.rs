use actix_web::{error, web, HttpResponse};

use crate::models::api_response::ApiResponse;

pub mod health;
pub mod itinerary;
pub mod price_prediction;
pub mod recommendation;
pub mod weather;

/// Register every route. The caller provides the catalog and scheduler config as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route(
                    "/optimize-itinerary",
                    web::post().to(itinerary::optimize_itinerary),
                )
                .route(
                    "/recommendations",
                    web::post().to(recommendation::get_recommendations),
                )
                .route(
                    "/price-prediction",
                    web::post().to(price_prediction::predict_prices),
                )
                .route(
                    "/weather-forecast",
                    web::post().to(weather::get_weather_forecast),
                ),
        );
}

/// Malformed JSON bodies get the same error envelope as every other failure
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {}", err);
        log::warn!("{}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ApiResponse::error(message)),
        )
        .into()
    })
}
