//! Absence-tolerant read access to the JSON objects WeatherKit returns.

use crate::forecast_data::error::ForecastDataError;
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use serde_json::{Map, Value};

/// A read-only view over one raw WeatherKit record.
///
/// Every accessor returns `None` when the key is missing, when its value is JSON
/// `null`, or when the value has a different JSON type than requested. A view over
/// something that is not a JSON object behaves as if every key were missing, so
/// nested lookups never fail.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Whether the underlying value is a JSON object.
    pub fn is_object(&self) -> bool {
        self.fields.is_some()
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.is_some_and(|fields| fields.contains_key(key))
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key)?.as_str()
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.str(key).map(str::to_owned)
    }

    /// The nested object stored under `key`, if there is one.
    pub fn record(&self, key: &str) -> Option<RawRecord<'a>> {
        self.get(key)?
            .as_object()
            .map(|fields| RawRecord { fields: Some(fields) })
    }

    /// The array stored under `key`, or an empty slice if there is none.
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Reads a required RFC 3339 timestamp and moves it into `timezone`.
    ///
    /// # Errors
    ///
    /// * [`ForecastDataError::MissingTimestamp`] if the key is absent or not a string.
    /// * [`ForecastDataError::InvalidTimestamp`] if the string does not parse.
    pub fn datetime(
        &self,
        key: &'static str,
        timezone: Tz,
    ) -> Result<DateTime<FixedOffset>, ForecastDataError> {
        self.opt_datetime(key, timezone)?
            .ok_or(ForecastDataError::MissingTimestamp { field: key })
    }

    /// Like [`RawRecord::datetime`], but a missing timestamp yields `Ok(None)`.
    /// A present but unparseable one is still an error.
    pub fn opt_datetime(
        &self,
        key: &'static str,
        timezone: Tz,
    ) -> Result<Option<DateTime<FixedOffset>>, ForecastDataError> {
        let Some(raw) = self.str(key) else {
            return Ok(None);
        };
        let parsed = DateTime::parse_from_rfc3339(raw).map_err(|source| {
            ForecastDataError::InvalidTimestamp {
                field: key,
                value: raw.to_string(),
                source,
            }
        })?;
        Ok(Some(localize(parsed.with_timezone(&Utc), timezone)))
    }
}

/// Expresses an instant in `timezone`, keeping only the resulting UTC offset.
pub(crate) fn localize(instant: DateTime<Utc>, timezone: Tz) -> DateTime<FixedOffset> {
    instant.with_timezone(&timezone).fixed_offset()
}

/// A short name for the JSON type of `value`, used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
