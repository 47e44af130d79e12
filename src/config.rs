use crate::db::catalog::ActivityCatalog;
use crate::error::CatalogError;
use crate::services::scheduler_service::SchedulerConfig;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON activity catalog; the built-in sample catalog is used when unset
    pub catalog_path: Option<String>,
    pub scheduler: SchedulerConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);
        let catalog_path = std::env::var("ACTIVITY_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        Self {
            host,
            port,
            catalog_path,
            scheduler: SchedulerConfig::from_env(),
        }
    }

    pub fn load_catalog(&self) -> Result<ActivityCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => ActivityCatalog::from_path(path),
            None => {
                log::info!("ACTIVITY_CATALOG_PATH not set, using the built-in sample catalog");
                Ok(ActivityCatalog::sample())
            }
        }
    }
}
