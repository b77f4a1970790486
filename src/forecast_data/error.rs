use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastDataError {
    #[error("Expected a JSON object for {context}, found {found}")]
    UnexpectedShape {
        context: &'static str,
        found: &'static str,
    },

    #[error("Required timestamp '{field}' is missing")]
    MissingTimestamp { field: &'static str },

    #[error("Timestamp '{field}' has unparseable value '{value}'")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
