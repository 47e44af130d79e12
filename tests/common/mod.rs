use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use trip_planner_api::db::catalog::ActivityCatalog;
use trip_planner_api::routes;
use trip_planner_api::services::scheduler_service::SchedulerConfig;

pub struct TestApp {
    pub catalog: Arc<ActivityCatalog>,
    pub scheduler: SchedulerConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_catalog(ActivityCatalog::sample())
    }

    pub fn with_catalog(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            scheduler: SchedulerConfig::default(),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.scheduler.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn paris_trip(start: &str, end: &str) -> serde_json::Value {
    serde_json::json!({
        "destinations": [
            {"location": "Paris", "startDate": start, "endDate": end}
        ],
        "preferences": {},
        "constraints": {"daily_start_time": "09:00", "daily_end_time": "20:00"}
    })
}
