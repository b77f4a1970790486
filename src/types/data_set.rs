//! Defines the `DataSet` enum naming the forecast categories WeatherKit can return
//! in a single weather request.

use crate::error::WeatherKitError;
use std::fmt;
use std::str::FromStr;

/// One of the forecast categories that can be requested from WeatherKit.
///
/// Each variant corresponds to a top-level key of the WeatherKit weather response,
/// and to one entry of the comma-separated `dataSets` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSet {
    /// The conditions observed at the time of the request (`currentWeather`).
    CurrentWeather,
    /// A forecast in one-hour intervals (`forecastHourly`).
    ForecastHourly,
    /// A forecast in one-day intervals, including day parts (`forecastDaily`).
    ForecastDaily,
    /// Minute-by-minute precipitation for the next hour (`forecastNextHour`).
    ForecastNextHour,
}

impl DataSet {
    /// The name WeatherKit uses for this dataset, both in the query string and
    /// as the key of the response object.
    ///
    /// # Examples
    ///
    /// ```
    /// use weatherkit::DataSet;
    ///
    /// assert_eq!(DataSet::ForecastDaily.as_str(), "forecastDaily");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSet::CurrentWeather => "currentWeather",
            DataSet::ForecastHourly => "forecastHourly",
            DataSet::ForecastDaily => "forecastDaily",
            DataSet::ForecastNextHour => "forecastNextHour",
        }
    }

    /// All datasets, in the order they are usually requested.
    pub const fn all() -> &'static [DataSet] {
        &[
            DataSet::ForecastHourly,
            DataSet::ForecastDaily,
            DataSet::CurrentWeather,
            DataSet::ForecastNextHour,
        ]
    }

    /// Joins the given datasets into the value of the `dataSets` query parameter.
    pub(crate) fn join(data_sets: &[DataSet]) -> String {
        data_sets
            .iter()
            .map(DataSet::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Allows formatting a `DataSet` using its wire name.
///
/// # Examples
///
/// ```
/// use weatherkit::DataSet;
///
/// assert_eq!(DataSet::CurrentWeather.to_string(), "currentWeather");
/// ```
impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSet {
    type Err = WeatherKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataSet::all()
            .iter()
            .copied()
            .find(|data_set| data_set.as_str() == s)
            .ok_or_else(|| WeatherKitError::UnknownDataSet(s.to_string()))
    }
}
