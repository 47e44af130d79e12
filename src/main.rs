use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_planner_api::{config::AppConfig, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!("Scheduler settings: {:?}", config.scheduler);

    let catalog = Arc::new(config.load_catalog()?);
    log::info!("Serving activities for: {}", catalog.locations().join(", "));

    let scheduler_config = config.scheduler.clone();
    log::info!("Starting HTTP server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(scheduler_config.clone()))
            .configure(routes::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
