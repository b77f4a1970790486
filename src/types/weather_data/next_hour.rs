use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Minute-resolution precipitation outlook for the next hour (`forecastNextHour`).
///
/// The scalar fields come from the first entry of the source's `summary` list and
/// are all `None` when that list is empty. `minutes` is independent of the summary.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct NextHourForecast {
    pub start_datetime: Option<DateTime<FixedOffset>>, // summary[0].startTime
    pub precip_type: Option<String>,                   // summary[0].condition
    pub conditions: Option<String>,
    pub precip_chance: Option<f64>,
    pub precip_intensity: Option<f64>,
    pub minutes: Vec<MinuteForecast>,
}

/// A single minute of a [`NextHourForecast`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MinuteForecast {
    pub start_datetime: DateTime<FixedOffset>,     // startTime
    pub precip_chance: Option<f64>,
    pub precip_intensity: Option<f64>,
}
