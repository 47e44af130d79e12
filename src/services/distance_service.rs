//! Distance Service
//!
//! Closed-form travel estimates between two points of interest. Distances are
//! great-circle (haversine) distances and travel times assume a fixed average
//! speed per transport mode, so results are deterministic and need no network.

use crate::models::activity::Coordinates;
use std::str::FromStr;

const EARTH_RADIUS_KM: f64 = 6371.0;

const WALKING_SPEED_KMH: f64 = 5.0;
const PUBLIC_TRANSIT_SPEED_KMH: f64 = 20.0;
const CAR_SPEED_KMH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    #[default]
    Walking,
    PublicTransit,
    Car,
}

impl TravelMode {
    pub fn as_str(&self) -> &str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::PublicTransit => "public_transit",
            TravelMode::Car => "car",
        }
    }

    pub fn speed_kmh(&self) -> f64 {
        match self {
            TravelMode::Walking => WALKING_SPEED_KMH,
            TravelMode::PublicTransit => PUBLIC_TRANSIT_SPEED_KMH,
            TravelMode::Car => CAR_SPEED_KMH,
        }
    }

    /// Unrecognized modes travel at walking speed.
    pub fn from_str_or_walking(mode: &str) -> Self {
        mode.parse().unwrap_or_default()
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walking" => Ok(TravelMode::Walking),
            "public_transit" => Ok(TravelMode::PublicTransit),
            "car" => Ok(TravelMode::Car),
            other => Err(format!("Unknown travel mode: {}", other)),
        }
    }
}

/// Calculate distance between two points in kilometers using the Haversine formula
pub fn distance_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Estimated travel time in minutes
pub fn travel_time_minutes(from: Coordinates, to: Coordinates, mode: TravelMode) -> f64 {
    distance_km(from, to) / mode.speed_kmh() * 60.0
}
