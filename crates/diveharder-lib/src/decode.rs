//! Field-level access to wire objects.
//!
//! Entity decoders read fields through [`WireObject`] using the wire
//! (lowerCamelCase) name and assign them to the semantic field. Every failure
//! becomes [`Error::Decode`] naming the entity and the wire field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::enums::Faction;
use crate::error::{Error, Result};

/// Entities that decode from one JSON value without cross-references.
pub trait FromWire: Sized {
    /// Entity name used in decode errors.
    const ENTITY: &'static str;

    fn from_wire(value: &Value) -> Result<Self>;

    /// Decode a JSON array of entities.
    fn list_from_wire(value: &Value) -> Result<Vec<Self>> {
        decode_list(Self::ENTITY, value, Self::from_wire)
    }
}

/// Decode each element of a JSON array with `decode`.
pub fn decode_list<T, F>(entity: &'static str, value: &Value, mut decode: F) -> Result<Vec<T>>
where
    F: FnMut(&Value) -> Result<T>,
{
    let items = value
        .as_array()
        .ok_or_else(|| Error::decode(entity, "[]", format!("expected array, got {}", kind(value))))?;
    items.iter().map(&mut decode).collect()
}

/// Decode a plain value object through its `Deserialize` impl.
pub(crate) fn deserialize<T: DeserializeOwned>(entity: &'static str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|err| Error::decode(entity, "{}", err.to_string()))
}

/// Borrowed view of a JSON object being decoded as `entity`.
pub(crate) struct WireObject<'a> {
    entity: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> WireObject<'a> {
    pub(crate) fn new(entity: &'static str, value: &'a Value) -> Result<Self> {
        let fields = value.as_object().ok_or_else(|| {
            Error::decode(entity, "{}", format!("expected object, got {}", kind(value)))
        })?;
        Ok(Self { entity, fields })
    }

    /// Raw value of a required field. `null` counts as missing.
    pub(crate) fn value(&self, field: &str) -> Result<&'a Value> {
        match self.fields.get(field) {
            Some(Value::Null) | None => Err(self.error(field, "missing required field")),
            Some(value) => Ok(value),
        }
    }

    /// Raw value of an optional field; missing and `null` are both `None`.
    pub(crate) fn optional_value(&self, field: &str) -> Option<&'a Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    pub(crate) fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T> {
        let value = self.value(field)?;
        self.convert(field, value)
    }

    pub(crate) fn optional<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>> {
        self.optional_value(field)
            .map(|value| self.convert(field, value))
            .transpose()
    }

    pub(crate) fn timestamp(&self, field: &str) -> Result<DateTime<Utc>> {
        let raw = self.value(field)?;
        let text = raw
            .as_str()
            .ok_or_else(|| self.error(field, format!("expected timestamp string, got {}", kind(raw))))?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(parsed.with_timezone(&Utc));
        }
        // Offset-less timestamps are UTC.
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|err| self.error(field, format!("invalid timestamp {text:?}: {err}")))
    }

    /// Faction given either as a name or a numeric code.
    pub(crate) fn faction(&self, field: &str) -> Result<Faction> {
        let raw = self.value(field)?;
        Faction::from_wire(raw).ok_or_else(|| {
            self.error(field, format!("expected faction name or code, got {}", kind(raw)))
        })
    }

    pub(crate) fn nested<T: FromWire>(&self, field: &str) -> Result<T> {
        T::from_wire(self.value(field)?)
    }

    pub(crate) fn nested_list<T: FromWire>(&self, field: &str) -> Result<Vec<T>> {
        T::list_from_wire(self.value(field)?)
    }

    pub(crate) fn error(&self, field: &str, message: impl Into<String>) -> Error {
        Error::decode(self.entity, field, message)
    }

    fn convert<T: DeserializeOwned>(&self, field: &str, value: &Value) -> Result<T> {
        T::deserialize(value).map_err(|err| self.error(field, err.to_string()))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn required_reports_entity_and_field() {
        let raw = json!({ "name": "Malevelon Creek" });
        let obj = WireObject::new("Planet", &raw).expect("object");
        let err = obj.required::<i64>("maxHealth").expect_err("missing");
        match err {
            Error::Decode { entity, field, .. } => {
                assert_eq!(entity, "Planet");
                assert_eq!(field, "maxHealth");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        let raw = json!({ "health": "lots" });
        let obj = WireObject::new("Planet", &raw).expect("object");
        assert!(matches!(
            obj.required::<i64>("health"),
            Err(Error::Decode { .. })
        ));
        assert!(WireObject::new("Planet", &json!([1, 2])).is_err());
    }

    #[test]
    fn optional_treats_null_as_absent() {
        let raw = json!({ "title": null, "briefing": "Hold the line" });
        let obj = WireObject::new("Assignment", &raw).expect("object");
        assert_eq!(obj.optional::<String>("title").expect("ok"), None);
        assert_eq!(obj.optional::<String>("description").expect("ok"), None);
        assert_eq!(
            obj.optional::<String>("briefing").expect("ok").as_deref(),
            Some("Hold the line")
        );
    }

    #[test]
    fn timestamps_accept_fractional_seconds_and_offsets() {
        let raw = json!({
            "a": "2024-03-01T10:15:00.1234567Z",
            "b": "2024-03-01T12:15:00+02:00",
            "c": "yesterday",
            "d": "2024-03-01T10:15:00"
        });
        let obj = WireObject::new("WarInfo", &raw).expect("object");
        let a = obj.timestamp("a").expect("a");
        let b = obj.timestamp("b").expect("b");
        assert_eq!(a.timestamp(), b.timestamp());
        assert!(obj.timestamp("c").is_err());
        assert_eq!(obj.timestamp("d").expect("d").timestamp(), a.timestamp());
    }
}
