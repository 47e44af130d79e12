use crate::db::catalog::ActivityCatalog;
use crate::error::OptimizerError;
use crate::models::{
    activity::parse_hhmm,
    itinerary::{
        Constraints, DailyItinerary, DestinationPlan, DestinationRequest, Preferences, TripPlan,
    },
};
use crate::services::distance_service::TravelMode;
use crate::services::preference_service::filter_and_score;
use crate::services::scheduler_service::{DailyScheduler, SchedulerConfig};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

const DEFAULT_DAILY_START_TIME: &str = "09:00";
const DEFAULT_DAILY_END_TIME: &str = "20:00";
const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_TRIP_DAYS: i64 = 366;

/// Builds multi-destination trip plans from the injected activity catalog.
///
/// Holds no mutable state, so one optimizer can serve concurrent requests.
#[derive(Clone)]
pub struct ItineraryOptimizer {
    catalog: Arc<ActivityCatalog>,
    config: SchedulerConfig,
}

impl ItineraryOptimizer {
    pub fn new(catalog: Arc<ActivityCatalog>) -> Self {
        Self {
            catalog,
            config: SchedulerConfig::default(),
        }
    }

    pub fn with_config(catalog: Arc<ActivityCatalog>, config: SchedulerConfig) -> Self {
        Self { catalog, config }
    }

    /// Plan every requested destination day by day.
    ///
    /// Locations missing from the catalog are skipped and reported in
    /// `skipped_locations`. A malformed date or time, or a destination longer
    /// than a year, fails the whole call.
    pub fn optimize(
        &self,
        destinations: &[DestinationRequest],
        preferences: &Preferences,
        constraints: &Constraints,
    ) -> Result<TripPlan, OptimizerError> {
        let day_start = parse_time(
            "daily_start_time",
            constraints.daily_start_time.as_deref().unwrap_or(DEFAULT_DAILY_START_TIME),
        )?;
        let day_end = parse_time(
            "daily_end_time",
            constraints.daily_end_time.as_deref().unwrap_or(DEFAULT_DAILY_END_TIME),
        )?;
        let travel_mode = constraints
            .transport_mode
            .as_deref()
            .map(TravelMode::from_str_or_walking)
            .unwrap_or_default();
        let scheduler = DailyScheduler::new(self.config.clone()).with_travel_mode(travel_mode);

        let mut itinerary = Vec::new();
        let mut skipped_locations = Vec::new();

        for destination in destinations {
            let Some(activities) = self.catalog.activities_for(&destination.location) else {
                log::warn!(
                    "No activity catalog for '{}', skipping destination",
                    destination.location
                );
                skipped_locations.push(destination.location.clone());
                continue;
            };

            let scored = filter_and_score(activities, preferences);
            let start_date = parse_date("startDate", &destination.start_date)?;
            let end_date = parse_date("endDate", &destination.end_date)?;
            let days = (end_date - start_date).num_days();
            if days > MAX_TRIP_DAYS {
                return Err(OptimizerError::RangeTooLong {
                    location: destination.location.clone(),
                    days,
                    max: MAX_TRIP_DAYS,
                });
            }

            // the pool starts fresh every day, so an activity may repeat across days
            let daily_itineraries: Vec<DailyItinerary> = start_date
                .iter_days()
                .take_while(|date| *date < end_date)
                .map(|date| DailyItinerary {
                    date: date.format(DATE_FORMAT).to_string(),
                    day_of_week: date.format("%A").to_string(),
                    activities: scheduler.build_day(
                        &scored,
                        day_start,
                        day_end,
                        destination.start_location,
                    ),
                })
                .collect();

            log::info!(
                "Planned {} day(s) in {} from {} candidate activities, travelling by {}",
                daily_itineraries.len(),
                destination.location,
                scored.len(),
                travel_mode.as_str()
            );

            itinerary.push(DestinationPlan {
                destination: destination.location.clone(),
                daily_itineraries,
            });
        }

        Ok(TripPlan::from_destinations(itinerary, skipped_locations))
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, OptimizerError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| OptimizerError::InvalidDate {
        field,
        value: value.to_string(),
        source,
    })
}

fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, OptimizerError> {
    parse_hhmm(value).map_err(|source| OptimizerError::InvalidTime {
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimizer() -> ItineraryOptimizer {
        ItineraryOptimizer::new(Arc::new(ActivityCatalog::sample()))
    }

    fn destination(location: &str, start: &str, end: &str) -> DestinationRequest {
        DestinationRequest {
            location: location.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            start_location: None,
        }
    }

    #[test]
    fn test_unknown_location_is_skipped() {
        let plan = optimizer()
            .optimize(
                &[destination("Atlantis", "2023-06-01", "2023-06-03")],
                &Preferences::default(),
                &Constraints::default(),
            )
            .unwrap();

        assert!(plan.itinerary.is_empty());
        assert_eq!(plan.summary.total_destinations, 0);
        assert_eq!(plan.summary.total_days, 0);
        assert_eq!(plan.summary.estimated_cost, 0.0);
        assert_eq!(plan.skipped_locations, vec!["Atlantis".to_string()]);
    }

    #[test]
    fn test_unknown_location_dates_are_not_parsed() {
        let plan = optimizer()
            .optimize(
                &[destination("Atlantis", "soon", "later")],
                &Preferences::default(),
                &Constraints::default(),
            )
            .unwrap();
        assert_eq!(plan.skipped_locations.len(), 1);
    }

    #[test]
    fn test_one_itinerary_per_day() {
        let plan = optimizer()
            .optimize(
                &[destination("Paris", "2023-06-01", "2023-06-04")],
                &Preferences::default(),
                &Constraints::default(),
            )
            .unwrap();

        let days = &plan.itinerary[0].daily_itineraries;
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, "2023-06-01");
        assert_eq!(days[0].day_of_week, "Thursday");
        assert_eq!(days[2].date, "2023-06-03");
        assert_eq!(days[2].day_of_week, "Saturday");
        assert_eq!(plan.summary.total_days, 3);
        // every day starts from the full pool
        assert_eq!(days[0].activities, days[1].activities);
    }

    #[test]
    fn test_summary_cost_sums_visits() {
        let plan = optimizer()
            .optimize(
                &[
                    destination("Paris", "2023-06-01", "2023-06-03"),
                    destination("Bali", "2023-06-03", "2023-06-04"),
                ],
                &Preferences::default(),
                &Constraints::default(),
            )
            .unwrap();

        let expected: f64 = plan
            .itinerary
            .iter()
            .flat_map(|d| d.daily_itineraries.iter())
            .flat_map(|day| day.activities.iter())
            .map(|v| v.activity().cost)
            .sum();
        assert_eq!(plan.summary.total_destinations, 2);
        assert_eq!(plan.summary.total_days, 3);
        assert_eq!(plan.summary.estimated_cost, expected);
        assert!(expected > 0.0);
    }

    #[test]
    fn test_reversed_range_has_no_days() {
        let plan = optimizer()
            .optimize(
                &[destination("Paris", "2023-06-05", "2023-06-01")],
                &Preferences::default(),
                &Constraints::default(),
            )
            .unwrap();
        assert_eq!(plan.summary.total_destinations, 1);
        assert_eq!(plan.summary.total_days, 0);
    }

    #[test]
    fn test_malformed_date_fails_the_call() {
        let result = optimizer().optimize(
            &[
                destination("Bali", "2023-06-01", "2023-06-02"),
                destination("Paris", "2023/06/01", "2023-06-02"),
            ],
            &Preferences::default(),
            &Constraints::default(),
        );
        assert!(matches!(
            result,
            Err(OptimizerError::InvalidDate { field: "startDate", .. })
        ));
    }

    #[test]
    fn test_overlong_range_fails_the_call() {
        let result = optimizer().optimize(
            &[destination("Paris", "0001-01-01", "9999-12-31")],
            &Preferences::default(),
            &Constraints::default(),
        );
        assert!(matches!(
            result,
            Err(OptimizerError::RangeTooLong { max: MAX_TRIP_DAYS, .. })
        ));

        // a full leap year is still planned
        let plan = optimizer()
            .optimize(
                &[destination("Bali", "2024-01-01", "2025-01-01")],
                &Preferences::default(),
                &Constraints::default(),
            )
            .unwrap();
        assert_eq!(plan.summary.total_days, 366);
    }

    #[test]
    fn test_malformed_time_fails_the_call() {
        let constraints = Constraints {
            daily_end_time: Some("8pm".to_string()),
            ..Constraints::default()
        };
        let result = optimizer().optimize(
            &[destination("Paris", "2023-06-01", "2023-06-02")],
            &Preferences::default(),
            &constraints,
        );
        assert!(matches!(
            result,
            Err(OptimizerError::InvalidTime { field: "daily_end_time", .. })
        ));
    }

    #[test]
    fn test_category_preferences_restrict_visits() {
        let plan = optimizer()
            .optimize(
                &[destination("Bali", "2023-06-01", "2023-06-03")],
                &Preferences::with_categories(["nature"]),
                &Constraints::default(),
            )
            .unwrap();

        let visits: Vec<_> = plan.itinerary[0]
            .daily_itineraries
            .iter()
            .flat_map(|d| d.activities.iter())
            .collect();
        assert!(!visits.is_empty());
        assert!(visits.iter().all(|v| v.activity().category == "nature"));
    }

    #[test]
    fn test_tight_window_gives_empty_days() {
        let constraints = Constraints {
            daily_start_time: Some("09:00".to_string()),
            daily_end_time: Some("10:00".to_string()),
            transport_mode: None,
        };
        let plan = optimizer()
            .optimize(
                &[destination("Paris", "2023-06-01", "2023-06-02")],
                &Preferences::default(),
                &constraints,
            )
            .unwrap();

        assert_eq!(plan.summary.total_days, 1);
        assert!(plan.itinerary[0].daily_itineraries[0].activities.is_empty());
        assert_eq!(plan.summary.estimated_cost, 0.0);
    }

    #[test]
    fn test_optimize_is_deterministic() {
        let destinations = [
            destination("Paris", "2023-06-01", "2023-06-03"),
            destination("Bali", "2023-06-03", "2023-06-05"),
        ];
        let first = optimizer()
            .optimize(&destinations, &Preferences::default(), &Constraints::default())
            .unwrap();
        let second = optimizer()
            .optimize(&destinations, &Preferences::default(), &Constraints::default())
            .unwrap();
        assert_eq!(first, second);
    }
}
