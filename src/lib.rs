mod auth;
mod error;
mod forecast_data;
mod transport;
mod types;
mod utils;
mod weatherkit;

pub use error::WeatherKitError;
pub use weatherkit::*;

pub use auth::error::TokenError;
pub use auth::token::{issue_credential, Credential, DEFAULT_TOKEN_LIFETIME_SECS};
pub use transport::error::TransportError;
pub use transport::fetcher::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE};

pub use forecast_data::assembler::assemble_response;
pub use forecast_data::conversions;
pub use forecast_data::error::ForecastDataError;
pub use forecast_data::extractor::{
    build_current_conditions, build_daily_forecast, build_hourly_forecast,
    build_minute_forecast, build_next_hour_forecast,
};

pub use types::data_set::DataSet;
pub use types::response::WeatherKitResponse;
pub use types::weather_condition::ConditionCode;
pub use types::weather_data::current::CurrentConditions;
pub use types::weather_data::daily::{DailyForecast, DayPartForecast};
pub use types::weather_data::hourly::HourlyForecast;
pub use types::weather_data::next_hour::{MinuteForecast, NextHourForecast};

pub use utils::{
    read_private_key, KEY_ID_VAR, PRIVATE_KEY_PATH_VAR, PRIVATE_KEY_VAR, SERVICE_ID_VAR,
    TEAM_ID_VAR,
};
