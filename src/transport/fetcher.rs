use crate::auth::token::Credential;
use crate::transport::error::TransportError;
use crate::types::data_set::DataSet;
use log::info;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://weatherkit.apple.com/api/v1";
pub const DEFAULT_LANGUAGE: &str = "en";

/// The location and datasets of one weather request.
#[derive(Debug, Clone, Copy)]
pub struct WeatherQuery<'a> {
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: &'a str,
    pub timezone: &'a str,
    pub data_sets: &'a [DataSet],
}

/// Performs the single authenticated GET behind every fetch.
#[derive(Debug)]
pub struct WeatherFetcher {
    http: Client,
    base_url: String,
    language: String,
}

impl WeatherFetcher {
    pub fn new(base_url: &str, language: &str) -> Result<Self, TransportError> {
        let http = Client::builder()
            .build()
            .map_err(TransportError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
        })
    }

    pub fn weather_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/weather/{}/{}/{}",
            self.base_url, self.language, latitude, longitude
        )
    }

    /// Fetches the raw weather JSON for `query`.
    ///
    /// Any non-success status aborts the request; the body is not inspected.
    pub fn get_weather(
        &self,
        credential: &Credential,
        query: &WeatherQuery<'_>,
    ) -> Result<Value, TransportError> {
        let url = self.weather_url(query.latitude, query.longitude);
        let data_sets = DataSet::join(query.data_sets);
        info!("Requesting [{}] from {}", data_sets, url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, credential.authorization_header())
            .query(&[
                ("countryCode", query.country_code),
                ("timezone", query.timezone),
                ("dataSets", data_sets.as_str()),
            ])
            .send()
            .map_err(|e| TransportError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(|source| TransportError::HttpStatus {
                url: url.clone(),
                status,
                source,
            })?;

        response
            .json::<Value>()
            .map_err(|e| TransportError::JsonParse(url, e))
    }
}
