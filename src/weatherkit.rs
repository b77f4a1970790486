//! This module provides the main entry point for the WeatherKit client.
//! It signs the developer token once, then fetches and maps forecasts for a
//! location and timezone.

use crate::auth::token::{issue_credential, Credential};
use crate::error::WeatherKitError;
use crate::forecast_data::assembler::assemble_response;
use crate::transport::fetcher::{WeatherFetcher, WeatherQuery, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
use crate::types::data_set::DataSet;
use crate::types::response::WeatherKitResponse;
use crate::utils::load_env_config;
use bon::bon;
use chrono::Duration;
use chrono_tz::Tz;
use log::{info, warn};
use serde_json::Value;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use weatherkit::LatLon;
///
/// let denver = LatLon(39.59, -104.726763);
/// assert_eq!(denver.0, 39.59); // Latitude
/// assert_eq!(denver.1, -104.726763); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The main client struct for accessing WeatherKit.
///
/// A `WeatherKit` owns a signed [`Credential`] created when the client is built.
/// The credential is reused for every request and never renewed: once it expires
/// (one hour after construction by default), build a new client.
///
/// Every call to [`WeatherKit::fetch`] performs exactly one blocking HTTPS request.
///
/// # Examples
///
/// ```no_run
/// use weatherkit::{DataSet, LatLon, WeatherKit, WeatherKitError};
///
/// # fn main() -> Result<(), WeatherKitError> {
/// let private_key = std::fs::read_to_string("AuthKey_KEY7890.p8").unwrap();
/// let client = WeatherKit::builder()
///     .team_id("TEAM123456")
///     .key_id("KEY7890")
///     .service_id("com.example.weather")
///     .private_key(private_key)
///     .build()?;
///
/// let forecast = client
///     .fetch()
///     .data_sets(&[DataSet::CurrentWeather, DataSet::ForecastDaily])
///     .location(LatLon(39.59, -104.726763))
///     .country_code("US")
///     .timezone("US/Mountain")
///     .call()?;
///
/// if let Some(current) = forecast.current_weather {
///     println!("{:?}°F, {:?}", current.temperature_f, current.conditions);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WeatherKit {
    fetcher: WeatherFetcher,
    credential: Credential,
}

#[bon]
impl WeatherKit {
    /// Creates a new client and signs its credential.
    ///
    /// # Arguments
    ///
    /// * `.team_id(String)`: **Required.** The Apple developer team identifier.
    /// * `.key_id(String)`: **Required.** The identifier of the WeatherKit key.
    /// * `.service_id(String)`: **Required.** The registered service identifier.
    /// * `.private_key(String)`: **Required.** PEM contents of the `.p8` key file.
    /// * `.language(String)`: Optional. Language segment of the request path. Defaults to `"en"`.
    /// * `.base_url(String)`: Optional. Defaults to `https://weatherkit.apple.com/api/v1`.
    /// * `.token_lifetime(Duration)`: Optional. Defaults to one hour.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherKitError::Token`] if the private key is invalid, or
    /// [`WeatherKitError::Transport`] if the HTTP client cannot be created.
    #[builder]
    pub fn new(
        #[builder(into)] team_id: String,
        #[builder(into)] key_id: String,
        #[builder(into)] service_id: String,
        #[builder(into)] private_key: String,
        #[builder(into)] language: Option<String>,
        #[builder(into)] base_url: Option<String>,
        token_lifetime: Option<Duration>,
    ) -> Result<Self, WeatherKitError> {
        let credential = issue_credential()
            .team_id(&team_id)
            .key_id(&key_id)
            .service_id(&service_id)
            .private_key(&private_key)
            .maybe_lifetime(token_lifetime)
            .call()?;
        let fetcher = WeatherFetcher::new(
            base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
        )?;
        Ok(Self {
            fetcher,
            credential,
        })
    }

    /// Creates a client from the `APPLE_TEAM_ID`, `APPLE_KEY_ID` and
    /// `APPLE_SERVICE_ID` environment variables, plus either `APPLE_PRIVATE_KEY`
    /// (PEM text) or `APPLE_PRIVATE_KEY_PATH` (path to the `.p8` file).
    ///
    /// # Errors
    ///
    /// Returns [`WeatherKitError::MissingEnvVar`] or [`WeatherKitError::KeyFileRead`]
    /// if the configuration is incomplete, and otherwise the errors of
    /// [`WeatherKit::builder`].
    pub fn from_env() -> Result<Self, WeatherKitError> {
        let config = load_env_config(|name| std::env::var(name).ok())?;
        Self::builder()
            .team_id(config.team_id)
            .key_id(config.key_id)
            .service_id(config.service_id)
            .private_key(config.private_key)
            .build()
    }

    /// The credential sent with every request of this client.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Fetches the requested datasets and maps them into a [`WeatherKitResponse`].
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.data_sets(&[DataSet])`: **Required.** Which datasets to request.
    /// * `.location(LatLon)`: **Required.** The location to forecast.
    /// * `.country_code(&str)`: **Required.** ISO 3166 country code of the location, e.g. `"US"`.
    /// * `.timezone(&str)`: **Required.** IANA timezone name. All timestamps of the
    ///   result are expressed in this zone.
    ///
    /// # Errors
    ///
    /// * [`WeatherKitError::InvalidTimezone`] if `timezone` is not a known IANA name.
    ///   Nothing is sent in that case.
    /// * [`WeatherKitError::Transport`] on network failures or a non-success status.
    /// * [`WeatherKitError::ForecastData`] if the response holds a malformed record.
    #[builder]
    pub fn fetch(
        &self,
        data_sets: &[DataSet],
        location: LatLon,
        country_code: &str,
        timezone: &str,
    ) -> Result<WeatherKitResponse, WeatherKitError> {
        let tz = parse_timezone(timezone)?;
        let raw = self
            .fetch_raw()
            .data_sets(data_sets)
            .location(location)
            .country_code(country_code)
            .timezone(timezone)
            .call()?;
        Ok(assemble_response(&raw, data_sets, tz)?)
    }

    /// Like [`WeatherKit::fetch`], but returns WeatherKit's JSON without mapping it.
    #[builder]
    pub fn fetch_raw(
        &self,
        data_sets: &[DataSet],
        location: LatLon,
        country_code: &str,
        timezone: &str,
    ) -> Result<Value, WeatherKitError> {
        parse_timezone(timezone)?;
        if self.credential.is_expired() {
            warn!(
                "WeatherKit credential expired at {}; build a new client",
                self.credential.expires_at()
            );
        }

        let query = WeatherQuery {
            latitude: location.0,
            longitude: location.1,
            country_code,
            timezone,
            data_sets,
        };
        let raw = self.fetcher.get_weather(&self.credential, &query)?;
        info!("Received weather for {:?}", location);
        Ok(raw)
    }
}

fn parse_timezone(name: &str) -> Result<Tz, WeatherKitError> {
    name.parse::<Tz>()
        .map_err(|_| WeatherKitError::InvalidTimezone(name.to_string()))
}
