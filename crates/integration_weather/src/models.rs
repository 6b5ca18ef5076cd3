//! Backend payload models
//!
//! Decoding is deliberately lenient: payloads that do not have the expected
//! shape degrade to empty values instead of failing the request.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Current conditions as returned by `/api/weather/current`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Condition label
    pub condition: Option<String>,
}

/// Alert object as returned by the alert endpoints
///
/// Unknown fields are ignored. Text fields that are missing, `null` or not a
/// string default to empty, so one bad field never drops the whole alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub alert_type: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub city: Option<String>,
}

/// Strings pass through, numbers are rendered, anything else is empty
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_optional_text(deserializer).map(Option::unwrap_or_default)
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Decode a conditions body
///
/// A body that is not a JSON object yields all-absent conditions, and a field
/// of the wrong type is treated as absent.
#[must_use]
pub fn decode_conditions(value: &Value) -> CurrentConditions {
    let Some(object) = value.as_object() else {
        if !value.is_null() {
            warn!(kind = json_kind(value), "Conditions payload is not an object");
        }
        return CurrentConditions::default();
    };

    CurrentConditions {
        temperature: object.get("temperature").and_then(Value::as_f64),
        condition: object
            .get("condition")
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

/// Decode an alerts body
///
/// `null` and non-array bodies yield an empty list; array entries that are not
/// objects are skipped.
#[must_use]
pub fn decode_alerts(value: Value) -> Vec<WeatherAlert> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                if !item.is_object() {
                    warn!(index, kind = json_kind(&item), "Skipping non-object alert entry");
                    return None;
                }
                match serde_json::from_value(item) {
                    Ok(alert) => Some(alert),
                    Err(e) => {
                        warn!(index, error = %e, "Skipping malformed alert entry");
                        None
                    },
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            warn!(kind = json_kind(&other), "Alerts payload is not an array, treating as empty");
            Vec::new()
        },
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
