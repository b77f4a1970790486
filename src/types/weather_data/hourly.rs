use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One hour-wide interval of the hourly forecast (`forecastHourly.hours[]`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub start_datetime: DateTime<FixedOffset>,     // forecastStart
    pub end_datetime: DateTime<FixedOffset>,       // forecastStart + 1h
    pub cloud_cover: Option<f64>,
    pub condition_code: Option<String>,
    pub conditions: Option<String>,
    pub icon: String,
    pub is_daylight: Option<bool>,
    pub humidity: Option<f64>,
    pub precip_amount_mm: Option<f64>,             // precipitationAmount
    pub precip_amount_inches: Option<f64>,
    pub precip_intensity: Option<f64>,
    pub precip_chance: Option<f64>,                // precipitationChance (0..1)
    pub precip_type: Option<String>,               // precipitationType
    pub pressure_mb: Option<f64>,
    pub pressure_trend: Option<String>,
    pub snowfall_intensity: Option<f64>,           // snowfallIntensity
    pub snowfall_amount_mm: Option<f64>,           // snowfallAmount
    pub snowfall_amount_inches: Option<f64>,
    pub temperature_c: Option<f64>,
    pub temperature_f: Option<f64>,
    pub temperature_feels_like_c: Option<f64>,
    pub temperature_feels_like_f: Option<f64>,
    pub temperature_dew_point_c: Option<f64>,
    pub temperature_dew_point_f: Option<f64>,
    pub uv_index: Option<f64>,
    pub visibility_meters: Option<f64>,
    pub visibility_miles: Option<f64>,
    pub wind_degrees: Option<f64>,
    pub wind_direction: Option<String>,
    pub wind_gust_kmh: Option<f64>,
    pub wind_gust_mph: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_speed_mph: Option<f64>,
}
