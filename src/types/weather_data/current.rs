use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The weather observed at the time of the request (`currentWeather`).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub current_datetime: DateTime<FixedOffset>,   // asOf
    pub cloud_cover: Option<f64>,                  // cloudCover (0..1)
    pub condition_code: Option<String>,            // conditionCode
    pub conditions: Option<String>,
    pub icon: String,
    pub is_daylight: Option<bool>,                 // daylight
    pub humidity: Option<f64>,                     // humidity (0..1)
    pub precip_intensity: Option<f64>,             // precipitationIntensity (mm/h)
    pub pressure_mb: Option<f64>,                  // pressure
    pub pressure_trend: Option<String>,            // pressureTrend
    pub temperature_c: Option<f64>,                // temperature
    pub temperature_f: Option<f64>,
    pub temperature_feels_like_c: Option<f64>,     // temperatureApparent
    pub temperature_feels_like_f: Option<f64>,
    pub temperature_dew_point_c: Option<f64>,      // temperatureDewPoint
    pub temperature_dew_point_f: Option<f64>,
    pub uv_index: Option<f64>,                     // uvIndex
    pub visibility_meters: Option<f64>,            // visibility
    pub visibility_miles: Option<f64>,
    pub wind_degrees: Option<f64>,                 // windDirection
    pub wind_direction: Option<String>,
    pub wind_gust_kmh: Option<f64>,                // windGust
    pub wind_gust_mph: Option<f64>,
    pub wind_speed_kmh: Option<f64>,               // windSpeed
    pub wind_speed_mph: Option<f64>,
}
