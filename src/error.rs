use crate::auth::error::TokenError;
use crate::forecast_data::error::ForecastDataError;
use crate::transport::error::TransportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherKitError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    ForecastData(#[from] ForecastDataError),

    #[error("Unknown IANA timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Unknown dataset '{0}'. Supported datasets: currentWeather, forecastHourly, forecastDaily, forecastNextHour")]
    UnknownDataSet(String),

    #[error("Environment variable '{0}' is not set")]
    MissingEnvVar(&'static str),

    #[error("Failed to read private key file '{}'", .0.display())]
    KeyFileRead(PathBuf, #[source] std::io::Error),
}
