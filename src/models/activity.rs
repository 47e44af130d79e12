use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Coarse time-of-day bucket used for best-time and crowd lookups.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    /// morning before 12:00, afternoon until 17:00, evening after
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            DayPeriod::Morning
        } else if hour < 17 {
            DayPeriod::Afternoon
        } else {
            DayPeriod::Evening
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BestTimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Sunset,
}

impl BestTimeOfDay {
    /// Sunset is not a schedulable period, so it never matches.
    pub fn matches(&self, period: DayPeriod) -> bool {
        matches!(
            (self, period),
            (BestTimeOfDay::Morning, DayPeriod::Morning)
                | (BestTimeOfDay::Afternoon, DayPeriod::Afternoon)
                | (BestTimeOfDay::Evening, DayPeriod::Evening)
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

pub(crate) fn serialize_hhmm<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
}

pub(crate) fn deserialize_hhmm<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_hhmm(&value).map_err(serde::de::Error::custom)
}

pub fn parse_hhmm(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
}

pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// A point of interest from the activity catalog. Never mutated after load.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub popularity: f64,
    /// Visit length in minutes
    pub duration: u32,
    pub cost: f64,
    pub coordinates: Coordinates,
    #[serde(serialize_with = "serialize_hhmm", deserialize_with = "deserialize_hhmm")]
    pub open_time: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm", deserialize_with = "deserialize_hhmm")]
    pub close_time: NaiveTime,
    pub best_time_of_day: BestTimeOfDay,
    #[serde(default)]
    pub crowd_level: HashMap<DayPeriod, CrowdLevel>,
}

impl Activity {
    /// Closed-interval check; a window with `close_time < open_time` wraps midnight.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.wraps_midnight() {
            time >= self.open_time || time <= self.close_time
        } else {
            self.open_time <= time && time <= self.close_time
        }
    }

    pub fn wraps_midnight(&self) -> bool {
        self.close_time < self.open_time
    }

    pub fn crowd_at(&self, period: DayPeriod) -> Option<CrowdLevel> {
        self.crowd_level.get(&period).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(open: &str, close: &str) -> Activity {
        Activity {
            id: "a1".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            category: "cultural".to_string(),
            popularity: 5.0,
            duration: 60,
            cost: 0.0,
            coordinates: Coordinates::new(0.0, 0.0),
            open_time: parse_hhmm(open).unwrap(),
            close_time: parse_hhmm(close).unwrap(),
            best_time_of_day: BestTimeOfDay::Morning,
            crowd_level: HashMap::new(),
        }
    }

    #[test]
    fn test_day_period_boundaries() {
        assert_eq!(DayPeriod::from_hour(11), DayPeriod::Morning);
        assert_eq!(DayPeriod::from_hour(12), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(16), DayPeriod::Afternoon);
        assert_eq!(DayPeriod::from_hour(17), DayPeriod::Evening);
    }

    #[test]
    fn test_sunset_never_matches() {
        for period in [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening] {
            assert!(!BestTimeOfDay::Sunset.matches(period));
        }
        assert!(BestTimeOfDay::Evening.matches(DayPeriod::Evening));
    }

    #[test]
    fn test_opening_window_is_closed_interval() {
        let a = activity("09:00", "18:00");
        assert!(a.is_open_at(parse_hhmm("09:00").unwrap()));
        assert!(a.is_open_at(parse_hhmm("18:00").unwrap()));
        assert!(!a.is_open_at(parse_hhmm("08:59").unwrap()));
        assert!(!a.is_open_at(parse_hhmm("18:01").unwrap()));
    }

    #[test]
    fn test_wrapping_window() {
        let a = activity("20:00", "02:00");
        assert!(a.wraps_midnight());
        assert!(a.is_open_at(parse_hhmm("23:00").unwrap()));
        assert!(a.is_open_at(parse_hhmm("01:30").unwrap()));
        assert!(!a.is_open_at(parse_hhmm("12:00").unwrap()));
    }

    #[test]
    fn test_activity_json_shape() {
        let json = serde_json::json!({
            "id": "p3",
            "name": "Notre-Dame Cathedral",
            "category": "cultural",
            "popularity": 8.5,
            "duration": 120,
            "cost": 0.0,
            "coordinates": {"lat": 48.8530, "lng": 2.3499},
            "open_time": "08:00",
            "close_time": "19:00",
            "best_time_of_day": "morning",
            "crowd_level": {"morning": "low", "afternoon": "medium"}
        });
        let parsed: Activity = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.crowd_at(DayPeriod::Morning), Some(CrowdLevel::Low));
        assert_eq!(parsed.crowd_at(DayPeriod::Evening), None);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["open_time"], "08:00");
        assert_eq!(back["best_time_of_day"], "morning");
    }

    #[test]
    fn test_bad_time_is_rejected() {
        let json = serde_json::json!({
            "id": "x", "name": "x", "category": "nature", "popularity": 1.0,
            "duration": 10, "cost": 0.0, "coordinates": {"lat": 0.0, "lng": 0.0},
            "open_time": "9am", "close_time": "18:00", "best_time_of_day": "morning"
        });
        assert!(serde_json::from_value::<Activity>(json).is_err());
    }
}
