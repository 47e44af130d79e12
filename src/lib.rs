//! Trip planning backend: destination recommendations, accommodation price
//! estimates and greedy day-by-day itinerary optimization over an activity catalog.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
