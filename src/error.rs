use thiserror::Error;

/// Failures that abort a whole optimize call. Unknown locations are not errors.
#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("Invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Trip to {location} spans {days} days, at most {max} are planned")]
    RangeTooLong {
        location: String,
        days: i64,
        max: i64,
    },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read activity catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse activity catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug, PartialEq)]
pub enum PricePredictionError {
    #[error("Destination '{0}' not found in the database.")]
    UnknownDestination(String),

    #[error("Invalid date format. Please use YYYY-MM-DD.")]
    InvalidDate,

    #[error("Check-out date must be after check-in date.")]
    InvalidRange,

    #[error("Stays are limited to {max} nights, got {nights}.")]
    StayTooLong { nights: i64, max: i64 },
}

impl From<CatalogError> for std::io::Error {
    fn from(err: CatalogError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string())
    }
}
