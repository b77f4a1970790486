//! The aggregate result of a single WeatherKit request.

use crate::types::weather_data::current::CurrentConditions;
use crate::types::weather_data::daily::DailyForecast;
use crate::types::weather_data::hourly::HourlyForecast;
use crate::types::weather_data::next_hour::NextHourForecast;
use serde::{Deserialize, Serialize};

/// Holds every dataset returned by one call to [`crate::WeatherKit::fetch`].
///
/// A field is `Some` only when the corresponding [`crate::DataSet`] was requested
/// *and* present in the WeatherKit response. The hourly and daily sequences keep
/// the order in which WeatherKit returned them.
///
/// # Examples
///
/// ```
/// use weatherkit::WeatherKitResponse;
///
/// let response = WeatherKitResponse::default();
/// assert!(response.current_weather.is_none());
/// assert_eq!(
///     response.as_json().unwrap(),
///     r#"{"current_weather":null,"forecast_next_hour":null,"forecast_hourly":null,"forecast_daily":null}"#
/// );
/// ```
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherKitResponse {
    pub current_weather: Option<CurrentConditions>,
    pub forecast_next_hour: Option<NextHourForecast>,
    pub forecast_hourly: Option<Vec<HourlyForecast>>,
    pub forecast_daily: Option<Vec<DailyForecast>>,
}

impl WeatherKitResponse {
    /// Serializes the response to compact JSON, one JSON field per struct field.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn as_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Like [`WeatherKitResponse::as_json`], but indented for humans.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherkit::WeatherKitResponse;
    ///
    /// let pretty = WeatherKitResponse::default().as_json_pretty().unwrap();
    /// assert!(pretty.starts_with("{\n  \"current_weather\": null,"));
    /// let reparsed: WeatherKitResponse = serde_json::from_str(&pretty).unwrap();
    /// assert_eq!(reparsed, WeatherKitResponse::default());
    /// ```
    pub fn as_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
