use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One calendar day of the daily forecast (`forecastDaily.days[]`).
///
/// Besides the whole-day aggregates, WeatherKit splits each day into three
/// overlapping parts, kept here as [`DayPartForecast`]s. A part is `None` when
/// the source omitted it entirely.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub start_datetime: DateTime<FixedOffset>,     // forecastStart
    pub end_datetime: DateTime<FixedOffset>,       // forecastEnd
    pub condition_code: Option<String>,
    pub conditions: Option<String>,
    pub icon: String,
    pub max_uv_index: Option<f64>,                 // maxUvIndex
    pub moon_phase: Option<String>,                // moonPhase
    pub precip_amount_mm: Option<f64>,
    pub precip_amount_in: Option<f64>,
    pub precip_chance: Option<f64>,
    pub precip_type: Option<String>,
    pub snowfall_amount_mm: Option<f64>,
    pub snowfall_amount_in: Option<f64>,
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
    pub temperature_max_c: Option<f64>,            // temperatureMax
    pub temperature_max_f: Option<f64>,
    pub temperature_min_c: Option<f64>,            // temperatureMin
    pub temperature_min_f: Option<f64>,
    pub daytime: Option<DayPartForecast>,          // daytimeForecast, 7:00 to 19:00
    pub overnight: Option<DayPartForecast>,        // overnightForecast, 19:00 to 7:00
    pub rest_of_day: Option<DayPartForecast>,      // restOfDayForecast, now to midnight
}

/// The forecast for part of a day, embedded in a [`DailyForecast`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DayPartForecast {
    pub cloud_cover: Option<f64>,
    pub condition_code: Option<String>,
    pub conditions: Option<String>,
    pub icon: String,
    pub humidity: Option<f64>,
    pub precip_amount_mm: Option<f64>,
    pub precip_amount_in: Option<f64>,
    pub precip_chance: Option<f64>,
    pub precip_type: Option<String>,
    pub snowfall_amount_mm: Option<f64>,
    pub snowfall_amount_in: Option<f64>,
    pub wind_degrees: Option<f64>,
    pub wind_direction: Option<String>,
    pub wind_speed_avg_kmh: Option<f64>,           // windSpeed
    pub wind_speed_avg_mph: Option<f64>,
}
