use crate::error::CatalogError;
use crate::models::activity::{
    parse_hhmm, Activity, BestTimeOfDay, Coordinates, CrowdLevel, DayPeriod,
};
use std::collections::HashMap;
use std::path::Path;

/// Read-only mapping from location name to its points of interest, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    locations: HashMap<String, Vec<Activity>>,
}

impl ActivityCatalog {
    pub fn new(locations: HashMap<String, Vec<Activity>>) -> Self {
        Self { locations }
    }

    /// Load a JSON object of `{ "<location>": [activity, ...] }`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        log::info!("Loading activity catalog from {}", display);

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: display.clone(),
            source,
        })?;
        let catalog = Self::from_json(&raw).map_err(|source| CatalogError::Parse {
            path: display,
            source,
        })?;

        log::info!(
            "Activity catalog loaded: {} locations, {} activities",
            catalog.locations.len(),
            catalog.locations.values().map(Vec::len).sum::<usize>()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let locations: HashMap<String, Vec<Activity>> = serde_json::from_str(raw)?;
        Ok(Self { locations })
    }

    pub fn activities_for(&self, location: &str) -> Option<&[Activity]> {
        self.locations.get(location).map(Vec::as_slice)
    }

    /// Location names, sorted
    pub fn locations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Built-in demo catalog for Paris and Bali
    pub fn sample() -> Self {
        let mut locations = HashMap::new();

        locations.insert(
            "Paris".to_string(),
            vec![
                poi(
                    ("p1", "Eiffel Tower", "Iconic iron lattice tower", "sightseeing"),
                    (9.5, 180, 25.0),
                    (48.8584, 2.2945),
                    ("09:00", "23:00"),
                    BestTimeOfDay::Sunset,
                    [CrowdLevel::Medium, CrowdLevel::High, CrowdLevel::High],
                ),
                poi(
                    ("p2", "Louvre Museum", "World's largest art museum", "cultural"),
                    (9.0, 240, 15.0),
                    (48.8606, 2.3376),
                    ("09:00", "18:00"),
                    BestTimeOfDay::Morning,
                    [CrowdLevel::Medium, CrowdLevel::High, CrowdLevel::Low],
                ),
                poi(
                    ("p3", "Notre-Dame Cathedral", "Medieval Catholic cathedral", "cultural"),
                    (8.5, 120, 0.0),
                    (48.8530, 2.3499),
                    ("08:00", "19:00"),
                    BestTimeOfDay::Morning,
                    [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::Low],
                ),
                poi(
                    (
                        "p4",
                        "Montmartre",
                        "Bohemian district with Sacré-Cœur Basilica",
                        "cultural",
                    ),
                    (8.0, 180, 0.0),
                    (48.8867, 2.3431),
                    ("00:00", "23:59"),
                    BestTimeOfDay::Evening,
                    [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::Medium],
                ),
                poi(
                    ("p5", "Seine River Cruise", "Boat tour along the Seine River", "relaxation"),
                    (7.5, 120, 15.0),
                    (48.8599, 2.3408),
                    ("10:00", "22:00"),
                    BestTimeOfDay::Evening,
                    [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High],
                ),
            ],
        );

        locations.insert(
            "Bali".to_string(),
            vec![
                poi(
                    ("b1", "Uluwatu Temple", "Ancient sea temple perched on a cliff", "cultural"),
                    (8.5, 120, 5.0),
                    (-8.8291, 115.0849),
                    ("09:00", "19:00"),
                    BestTimeOfDay::Sunset,
                    [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High],
                ),
                poi(
                    ("b2", "Ubud Monkey Forest", "Natural sanctuary with macaques", "nature"),
                    (8.0, 120, 8.0),
                    (-8.5188, 115.2582),
                    ("08:30", "18:00"),
                    BestTimeOfDay::Morning,
                    [CrowdLevel::Medium, CrowdLevel::High, CrowdLevel::Low],
                ),
                poi(
                    ("b3", "Tegallalang Rice Terraces", "Stunning rice paddies", "nature"),
                    (7.5, 120, 2.0),
                    (-8.4310, 115.2772),
                    ("07:00", "18:00"),
                    BestTimeOfDay::Morning,
                    [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::Low],
                ),
            ],
        );

        Self { locations }
    }
}

// crowd levels are morning, afternoon, evening
fn poi(
    (id, name, description, category): (&str, &str, &str, &str),
    (popularity, duration, cost): (f64, u32, f64),
    (lat, lng): (f64, f64),
    (open, close): (&str, &str),
    best_time_of_day: BestTimeOfDay,
    crowd: [CrowdLevel; 3],
) -> Activity {
    let crowd_level = [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening]
        .into_iter()
        .zip(crowd)
        .collect();

    Activity {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        popularity,
        duration,
        cost,
        coordinates: Coordinates::new(lat, lng),
        open_time: parse_hhmm(open).unwrap_or_default(),
        close_time: parse_hhmm(close).unwrap_or_default(),
        best_time_of_day,
        crowd_level,
    }
}
