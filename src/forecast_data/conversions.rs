//! Unit conversions and lookups shared by every forecast builder.
//!
//! Each function maps an absent input to an absent output and never substitutes a
//! default, except [`icon_for_condition_code`] which always names an icon file.

use crate::types::weather_condition::ConditionCode;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const ICON_EXTENSION: &str = ".svg";
const UNKNOWN_ICON: &str = "unknown.svg";
const UNKNOWN_CONDITIONS: &str = "Unknown";

pub fn millimeters_to_inches(mm: Option<f64>) -> Option<f64> {
    mm.map(|mm| mm / 25.4)
}

pub fn celsius_to_fahrenheit(celsius: Option<f64>) -> Option<f64> {
    celsius.map(|c| (c * 9.0 / 5.0) + 32.0)
}

pub fn kmh_to_mph(kmh: Option<f64>) -> Option<f64> {
    kmh.map(|kmh| 0.6214 * kmh)
}

pub fn meters_to_miles(meters: Option<f64>) -> Option<f64> {
    meters.map(|m| m * 0.000621371192)
}

/// Converts a bearing in degrees to one of the 16 compass points.
///
/// Sectors are 22.5° wide and centered on their point, so 348.75° up to (but not
/// including) 11.25° is `"N"`. Exact sector boundaries round half to even.
/// Bearings outside `0..360` wrap around.
///
/// # Examples
///
/// ```
/// use weatherkit::conversions::degrees_to_cardinal;
///
/// assert_eq!(degrees_to_cardinal(Some(161.0)).as_deref(), Some("SSE"));
/// assert_eq!(degrees_to_cardinal(Some(360.0)).as_deref(), Some("N"));
/// assert_eq!(degrees_to_cardinal(None), None);
/// ```
pub fn degrees_to_cardinal(degrees: Option<f64>) -> Option<String> {
    let degrees = degrees?;
    let sector_width = 360.0 / COMPASS_POINTS.len() as f64;
    let index = (degrees / sector_width).round_ties_even() as i64;
    let index = index.rem_euclid(COMPASS_POINTS.len() as i64) as usize;
    Some(COMPASS_POINTS[index].to_string())
}

/// Looks up the display label for a WeatherKit condition code.
///
/// A missing or empty code has no label. Any other code that is not one of the
/// known [`ConditionCode`]s is labelled `"Unknown"`.
pub fn conditions_for_code(code: Option<&str>) -> Option<String> {
    let code = code.filter(|code| !code.is_empty())?;
    let label = ConditionCode::from_code(code)
        .map(|condition| condition.label())
        .unwrap_or(UNKNOWN_CONDITIONS);
    Some(label.to_string())
}

/// Names the icon file for a condition code: the lowercased code plus `.svg`.
///
/// Only a missing or empty code falls back to `unknown.svg`; unrecognized codes
/// still produce their own file name, even though [`conditions_for_code`] labels
/// them `"Unknown"`.
pub fn icon_for_condition_code(code: Option<&str>) -> String {
    match code {
        Some(code) if !code.is_empty() => format!("{}{}", code.to_lowercase(), ICON_EXTENSION),
        _ => UNKNOWN_ICON.to_string(),
    }
}
