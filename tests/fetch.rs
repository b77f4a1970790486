use serde_json::{json, Value};
use weatherkit::{
    DataSet, ForecastDataError, LatLon, TransportError, WeatherKit, WeatherKitError,
    WeatherKitResponse,
};
use wiremock::matchers::{header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRIVATE_KEY: &str = include_str!("data/test_key.p8");
const SAMPLE: &str = include_str!("data/sample_data.json");
const WEATHER_PATH: &str = "/api/v1/weather/en/39.59/-104.726763";

fn denver() -> LatLon {
    LatLon(39.59, -104.726763)
}

fn client_for(server_uri: &str) -> Result<WeatherKit, WeatherKitError> {
    WeatherKit::builder()
        .team_id("TEAM123456")
        .key_id("KEY7890")
        .service_id("com.example.weather")
        .private_key(PRIVATE_KEY)
        .base_url(format!("{}/api/v1", server_uri))
        .build()
}

// The client is blocking, so it runs off the runtime that serves the mock.
async fn fetch_from(
    server: &MockServer,
    data_sets: &'static [DataSet],
) -> Result<Result<WeatherKitResponse, WeatherKitError>, tokio::task::JoinError> {
    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let client = client_for(&uri)?;
        client
            .fetch()
            .data_sets(data_sets)
            .location(denver())
            .country_code("US")
            .timezone("US/Mountain")
            .call()
    })
    .await
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_sends_query_and_maps_response() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let body: Value = serde_json::from_str(SAMPLE)?;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("countryCode", "US"))
        .and(query_param("timezone", "US/Mountain"))
        .and(query_param(
            "dataSets",
            "forecastHourly,forecastDaily,currentWeather,forecastNextHour",
        ))
        .and(header_regex(
            "authorization",
            r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let response = fetch_from(&server, DataSet::all()).await??;

    let current = response.current_weather.expect("current weather");
    assert_eq!(current.current_datetime.to_rfc3339(), "2022-11-18T09:34:14-07:00");
    assert_eq!(current.temperature_f, Some(14.774000000000001));
    assert_eq!(current.wind_speed_mph, Some(3.7718979999999998));
    assert_eq!(current.wind_direction.as_deref(), Some("SSE"));

    let days = response.forecast_daily.expect("daily forecast");
    assert_eq!(days[0].conditions.as_deref(), Some("Partly Cloudy"));
    assert_eq!(days[0].icon, "partlycloudy.svg");
    assert_eq!(days[0].max_uv_index, Some(2.0));
    assert_eq!(days[0].temperature_max_f, Some(25.592));

    let hours = response.forecast_hourly.expect("hourly forecast");
    assert_eq!(hours.len(), 2);
    let next_hour = response.forecast_next_hour.expect("next hour forecast");
    assert_eq!(next_hour.minutes.len(), 3);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dataset_missing_upstream_stays_unset() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let body: Value = serde_json::from_str(SAMPLE)?;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("dataSets", "currentWeather,forecastNextHour"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "currentWeather": body["currentWeather"],
        })))
        .mount(&server)
        .await;

    let response = fetch_from(
        &server,
        &[DataSet::CurrentWeather, DataSet::ForecastNextHour],
    )
    .await??;
    assert!(response.current_weather.is_some());
    assert!(response.forecast_next_hour.is_none());
    assert!(response.forecast_hourly.is_none());
    assert!(response.forecast_daily.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_is_a_transport_failure() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = fetch_from(&server, DataSet::all()).await?.unwrap_err();
    assert!(matches!(
        err,
        WeatherKitError::Transport(TransportError::HttpStatus { status, .. }) if status.as_u16() == 401
    ));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_json_body_is_a_transport_failure() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = fetch_from(&server, DataSet::all()).await?.unwrap_err();
    assert!(matches!(err, WeatherKitError::Transport(TransportError::JsonParse(..))));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_record_aborts_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let mut body: Value = serde_json::from_str(SAMPLE)?;
    body["forecastDaily"]["days"][1]["forecastEnd"] = json!("tomorrow");
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = fetch_from(&server, DataSet::all()).await?.unwrap_err();
    assert!(matches!(
        err,
        WeatherKitError::ForecastData(ForecastDataError::InvalidTimestamp { field: "forecastEnd", .. })
    ));
    Ok(())
}
