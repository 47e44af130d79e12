use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::catalog::ActivityCatalog;
use crate::models::api_response::ApiResponse;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::message("Trip Planner API is running"))
}

pub async fn health_check(catalog: web::Data<Arc<ActivityCatalog>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let catalog_result = check_catalog(&catalog);
    health
        .services
        .insert("activity_catalog".to_string(), catalog_result.clone());

    // An empty catalog still serves requests, every destination is just skipped
    if catalog_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_catalog(catalog: &ActivityCatalog) -> ServiceStatus {
    let locations = catalog.locations();
    if locations.is_empty() {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("Activity catalog has no locations".to_string()),
        }
    } else {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Locations: {}", locations.join(", "))),
        }
    }
}
