//! Builders turning raw WeatherKit records into forecast entities.
//!
//! Every builder takes the raw JSON record and the timezone the caller asked for.
//! Builders never fail on a missing optional field; only a missing or malformed
//! primary timestamp is an error.

use crate::forecast_data::conversions::{
    celsius_to_fahrenheit, conditions_for_code, degrees_to_cardinal, icon_for_condition_code,
    kmh_to_mph, meters_to_miles, millimeters_to_inches,
};
use crate::forecast_data::error::ForecastDataError;
use crate::forecast_data::record::{localize, RawRecord};
use crate::types::weather_data::current::CurrentConditions;
use crate::types::weather_data::daily::{DailyForecast, DayPartForecast};
use crate::types::weather_data::hourly::HourlyForecast;
use crate::types::weather_data::next_hour::{MinuteForecast, NextHourForecast};
use chrono::{Duration, Utc};
use chrono_tz::Tz;
use serde_json::Value;

// --- Builder for CURRENT conditions ---
pub fn build_current_conditions(
    raw: &Value,
    timezone: Tz,
) -> Result<CurrentConditions, ForecastDataError> {
    let data = RawRecord::new(raw);
    let condition_code = data.string("conditionCode");
    let temperature_c = data.f64("temperature");
    let temperature_feels_like_c = data.f64("temperatureApparent");
    let temperature_dew_point_c = data.f64("temperatureDewPoint");
    let visibility_meters = data.f64("visibility");
    let wind_degrees = data.f64("windDirection");
    let wind_gust_kmh = data.f64("windGust");
    let wind_speed_kmh = data.f64("windSpeed");

    Ok(CurrentConditions {
        current_datetime: data.datetime("asOf", timezone)?,
        cloud_cover: data.f64("cloudCover"),
        conditions: conditions_for_code(condition_code.as_deref()),
        icon: icon_for_condition_code(condition_code.as_deref()),
        condition_code,
        is_daylight: data.bool("daylight"),
        humidity: data.f64("humidity"),
        precip_intensity: data.f64("precipitationIntensity"),
        pressure_mb: data.f64("pressure"),
        pressure_trend: data.string("pressureTrend"),
        temperature_c,
        temperature_f: celsius_to_fahrenheit(temperature_c),
        temperature_feels_like_c,
        temperature_feels_like_f: celsius_to_fahrenheit(temperature_feels_like_c),
        temperature_dew_point_c,
        temperature_dew_point_f: celsius_to_fahrenheit(temperature_dew_point_c),
        uv_index: data.f64("uvIndex"),
        visibility_meters,
        visibility_miles: meters_to_miles(visibility_meters),
        wind_degrees,
        wind_direction: degrees_to_cardinal(wind_degrees),
        wind_gust_kmh,
        wind_gust_mph: kmh_to_mph(wind_gust_kmh),
        wind_speed_kmh,
        wind_speed_mph: kmh_to_mph(wind_speed_kmh),
    })
}

// --- Builder for HOURLY forecasts ---
pub fn build_hourly_forecast(raw: &Value, timezone: Tz) -> Result<HourlyForecast, ForecastDataError> {
    let data = RawRecord::new(raw);
    let start_datetime = data.datetime("forecastStart", timezone)?;
    // Shift the instant, then localize: the hour may cross a DST change.
    let end_datetime = localize(start_datetime.with_timezone(&Utc) + Duration::hours(1), timezone);

    let condition_code = data.string("conditionCode");
    let precip_amount_mm = data.f64("precipitationAmount");
    let snowfall_amount_mm = data.f64("snowfallAmount");
    let temperature_c = data.f64("temperature");
    let temperature_feels_like_c = data.f64("temperatureApparent");
    let temperature_dew_point_c = data.f64("temperatureDewPoint");
    let visibility_meters = data.f64("visibility");
    let wind_degrees = data.f64("windDirection");
    let wind_gust_kmh = data.f64("windGust");
    let wind_speed_kmh = data.f64("windSpeed");

    Ok(HourlyForecast {
        start_datetime,
        end_datetime,
        cloud_cover: data.f64("cloudCover"),
        conditions: conditions_for_code(condition_code.as_deref()),
        icon: icon_for_condition_code(condition_code.as_deref()),
        condition_code,
        is_daylight: data.bool("daylight"),
        humidity: data.f64("humidity"),
        precip_amount_mm,
        precip_amount_inches: millimeters_to_inches(precip_amount_mm),
        precip_intensity: data.f64("precipitationIntensity"),
        precip_chance: data.f64("precipitationChance"),
        precip_type: data.string("precipitationType"),
        pressure_mb: data.f64("pressure"),
        pressure_trend: data.string("pressureTrend"),
        snowfall_intensity: data.f64("snowfallIntensity"),
        snowfall_amount_mm,
        snowfall_amount_inches: millimeters_to_inches(snowfall_amount_mm),
        temperature_c,
        temperature_f: celsius_to_fahrenheit(temperature_c),
        temperature_feels_like_c,
        temperature_feels_like_f: celsius_to_fahrenheit(temperature_feels_like_c),
        temperature_dew_point_c,
        temperature_dew_point_f: celsius_to_fahrenheit(temperature_dew_point_c),
        uv_index: data.f64("uvIndex"),
        visibility_meters,
        visibility_miles: meters_to_miles(visibility_meters),
        wind_degrees,
        wind_direction: degrees_to_cardinal(wind_degrees),
        wind_gust_kmh,
        wind_gust_mph: kmh_to_mph(wind_gust_kmh),
        wind_speed_kmh,
        wind_speed_mph: kmh_to_mph(wind_speed_kmh),
    })
}

// --- Builders for DAILY forecasts ---
pub fn build_daily_forecast(raw: &Value, timezone: Tz) -> Result<DailyForecast, ForecastDataError> {
    let data = RawRecord::new(raw);
    let condition_code = data.string("conditionCode");
    let precip_amount_mm = data.f64("precipitationAmount");
    let snowfall_amount_mm = data.f64("snowfallAmount");
    let temperature_max_c = data.f64("temperatureMax");
    let temperature_min_c = data.f64("temperatureMin");

    Ok(DailyForecast {
        start_datetime: data.datetime("forecastStart", timezone)?,
        end_datetime: data.datetime("forecastEnd", timezone)?,
        conditions: conditions_for_code(condition_code.as_deref()),
        icon: icon_for_condition_code(condition_code.as_deref()),
        condition_code,
        max_uv_index: data.f64("maxUvIndex"),
        moon_phase: data.string("moonPhase"),
        precip_amount_mm,
        precip_amount_in: millimeters_to_inches(precip_amount_mm),
        precip_chance: data.f64("precipitationChance"),
        precip_type: data.string("precipitationType"),
        snowfall_amount_mm,
        snowfall_amount_in: millimeters_to_inches(snowfall_amount_mm),
        sunrise: data.opt_datetime("sunrise", timezone)?,
        sunset: data.opt_datetime("sunset", timezone)?,
        temperature_max_c,
        temperature_max_f: celsius_to_fahrenheit(temperature_max_c),
        temperature_min_c,
        temperature_min_f: celsius_to_fahrenheit(temperature_min_c),
        daytime: data.record("daytimeForecast").map(build_day_part),
        overnight: data.record("overnightForecast").map(build_day_part),
        rest_of_day: data.record("restOfDayForecast").map(build_day_part),
    })
}

fn build_day_part(data: RawRecord<'_>) -> DayPartForecast {
    let condition_code = data.string("conditionCode");
    let precip_amount_mm = data.f64("precipitationAmount");
    let snowfall_amount_mm = data.f64("snowfallAmount");
    let wind_degrees = data.f64("windDirection");
    let wind_speed_avg_kmh = data.f64("windSpeed");

    DayPartForecast {
        cloud_cover: data.f64("cloudCover"),
        conditions: conditions_for_code(condition_code.as_deref()),
        icon: icon_for_condition_code(condition_code.as_deref()),
        condition_code,
        humidity: data.f64("humidity"),
        precip_amount_mm,
        precip_amount_in: millimeters_to_inches(precip_amount_mm),
        precip_chance: data.f64("precipitationChance"),
        precip_type: data.string("precipitationType"),
        snowfall_amount_mm,
        snowfall_amount_in: millimeters_to_inches(snowfall_amount_mm),
        wind_degrees,
        wind_direction: degrees_to_cardinal(wind_degrees),
        wind_speed_avg_kmh,
        wind_speed_avg_mph: kmh_to_mph(wind_speed_avg_kmh),
    }
}

// --- Builders for NEXT HOUR forecasts ---
pub fn build_next_hour_forecast(
    raw: &Value,
    timezone: Tz,
) -> Result<NextHourForecast, ForecastDataError> {
    let data = RawRecord::new(raw);
    let minutes = data
        .list("minutes")
        .iter()
        .map(|minute| build_minute_forecast(minute, timezone))
        .collect::<Result<Vec<_>, _>>()?;

    let Some(summary) = data.list("summary").first().map(RawRecord::new) else {
        return Ok(NextHourForecast {
            start_datetime: None,
            precip_type: None,
            conditions: None,
            precip_chance: None,
            precip_intensity: None,
            minutes,
        });
    };

    // WeatherKit calls the precipitation type "condition" here. It is also run
    // through the condition-code lookup, so values like "clear" label as "Unknown".
    let precip_type = summary.string("condition");
    Ok(NextHourForecast {
        start_datetime: Some(summary.datetime("startTime", timezone)?),
        conditions: conditions_for_code(precip_type.as_deref()),
        precip_type,
        precip_chance: summary.f64("precipitationChance"),
        precip_intensity: summary.f64("precipitationIntensity"),
        minutes,
    })
}

pub fn build_minute_forecast(raw: &Value, timezone: Tz) -> Result<MinuteForecast, ForecastDataError> {
    let data = RawRecord::new(raw);
    Ok(MinuteForecast {
        start_datetime: data.datetime("startTime", timezone)?,
        precip_chance: data.f64("precipitationChance"),
        precip_intensity: data.f64("precipitationIntensity"),
    })
}
