//! Combines the per-dataset builders into one [`WeatherKitResponse`].

use crate::forecast_data::error::ForecastDataError;
use crate::forecast_data::extractor::{
    build_current_conditions, build_daily_forecast, build_hourly_forecast,
    build_next_hour_forecast,
};
use crate::forecast_data::record::{json_type_name, RawRecord};
use crate::types::data_set::DataSet;
use crate::types::response::WeatherKitResponse;
use chrono_tz::Tz;
use log::debug;
use serde_json::Value;

/// Builds a [`WeatherKitResponse`] from a decoded WeatherKit weather response.
///
/// Each of the four dataset keys present in `raw` is handed to its builder; the
/// hourly and daily builders are mapped over the `hours` and `days` arrays. Datasets
/// missing from `raw` leave their field `None`, even if they were `requested`.
///
/// # Errors
///
/// Returns [`ForecastDataError::UnexpectedShape`] if `raw` is not a JSON object,
/// or the first error raised by any builder. No partial response is returned.
///
/// # Examples
///
/// ```
/// use weatherkit::{assemble_response, DataSet};
/// use serde_json::json;
///
/// let raw = json!({
///     "currentWeather": { "asOf": "2022-11-18T16:34:14Z", "temperature": 20.0 }
/// });
/// let response = assemble_response(
///     &raw,
///     &[DataSet::CurrentWeather, DataSet::ForecastDaily],
///     chrono_tz::Europe::Amsterdam,
/// ).unwrap();
///
/// let current = response.current_weather.unwrap();
/// assert_eq!(current.temperature_f, Some(68.0));
/// assert!(response.forecast_daily.is_none());
/// ```
pub fn assemble_response(
    raw: &Value,
    requested: &[DataSet],
    timezone: Tz,
) -> Result<WeatherKitResponse, ForecastDataError> {
    let data = RawRecord::new(raw);
    if !data.is_object() {
        return Err(ForecastDataError::UnexpectedShape {
            context: "the weather response",
            found: json_type_name(raw),
        });
    }

    for data_set in requested {
        if !data.contains(data_set.as_str()) {
            debug!("Requested dataset {} is missing from the response", data_set);
        }
    }

    let mut response = WeatherKitResponse::default();

    if let Some(current) = raw.get(DataSet::CurrentWeather.as_str()) {
        response.current_weather = Some(build_current_conditions(current, timezone)?);
    }

    if let Some(next_hour) = raw.get(DataSet::ForecastNextHour.as_str()) {
        response.forecast_next_hour = Some(build_next_hour_forecast(next_hour, timezone)?);
    }

    if let Some(hourly) = raw.get(DataSet::ForecastHourly.as_str()) {
        let hours = RawRecord::new(hourly)
            .list("hours")
            .iter()
            .map(|hour| build_hourly_forecast(hour, timezone))
            .collect::<Result<Vec<_>, _>>()?;
        response.forecast_hourly = Some(hours);
    }

    if let Some(daily) = raw.get(DataSet::ForecastDaily.as_str()) {
        let days = RawRecord::new(daily)
            .list("days")
            .iter()
            .map(|day| build_daily_forecast(day, timezone))
            .collect::<Result<Vec<_>, _>>()?;
        response.forecast_daily = Some(days);
    }

    debug!(
        "Assembled response: current={}, next_hour={}, hours={}, days={}",
        response.current_weather.is_some(),
        response.forecast_next_hour.is_some(),
        response.forecast_hourly.as_ref().map_or(0, Vec::len),
        response.forecast_daily.as_ref().map_or(0, Vec::len),
    );

    Ok(response)
}
