//! SenML measurements and their compact JSON form

use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{MalformedInputError, Result};
use crate::value::Value;

/// Compact JSON keys of a SenML record
pub mod keys {
    pub const NAME: &str = "n";
    pub const TIME: &str = "t";
    pub const ISOTIME: &str = "iso8601";
    pub const UNIT: &str = "u";
    pub const VALUE: &str = "v";
    pub const STRING_VALUE: &str = "vs";
    pub const BOOL_VALUE: &str = "vb";
    pub const DATA_VALUE: &str = "vd";
    pub const SUM: &str = "s";

    pub const BASE_NAME: &str = "bn";
    pub const BASE_TIME: &str = "bt";
    pub const BASE_ISOTIME: &str = "biso8601";
    pub const BASE_UNIT: &str = "bu";
    pub const BASE_VALUE: &str = "bv";
    pub const BASE_VERSION: &str = "bver";

    /// Value keys in the order they are honoured when parsing
    pub const VALUE_KEYS: [&str; 4] = [VALUE, STRING_VALUE, BOOL_VALUE, DATA_VALUE];
}

/// A single SenML reading
///
/// Every field is optional; an unset field is distinct from zero or an empty
/// string. Inside a document a measurement may be relative to the document's
/// base, see [`Measurement::to_absolute`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measurement {
    /// Name, or name suffix when a base name applies
    pub name: Option<String>,
    /// Time in seconds, relative to the base time when one applies
    pub time: Option<f64>,
    /// ISO-8601 timestamp, carried as text
    pub isotime: Option<String>,
    /// Unit label
    pub unit: Option<String>,
    /// Measured value
    pub value: Option<Value>,
    /// Integrated sum of the value over time
    pub sum: Option<f64>,
}

impl Measurement {
    /// Create a measurement from a full set of fields
    pub fn new(
        name: Option<String>,
        time: Option<f64>,
        isotime: Option<String>,
        unit: Option<String>,
        value: Option<Value>,
        sum: Option<f64>,
    ) -> Self {
        Self {
            name,
            time,
            isotime,
            unit,
            value,
            sum,
        }
    }

    /// Set the name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the time
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Set the ISO-8601 timestamp
    pub fn with_isotime<S: Into<String>>(mut self, isotime: S) -> Self {
        self.isotime = Some(isotime.into());
        self
    }

    /// Set the unit
    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the value
    pub fn with_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the sum
    pub fn with_sum(mut self, sum: f64) -> Self {
        self.sum = Some(sum);
        self
    }

    /// Read the base fields (`bn`, `bt`, `biso8601`, `bu`, `bv`) of a record
    ///
    /// Record fields of the same object are ignored, as is `bver`.
    pub fn base_from_json(data: &JsonValue) -> Result<Self> {
        let fields = data
            .as_object()
            .ok_or_else(|| MalformedInputError::not_an_object(data))?;

        Ok(Self {
            name: text_field(fields, keys::BASE_NAME),
            time: number_field(fields, keys::BASE_TIME)?,
            isotime: text_field(fields, keys::BASE_ISOTIME),
            unit: text_field(fields, keys::BASE_UNIT),
            value: number_field(fields, keys::BASE_VALUE)?.map(Value::Numeric),
            sum: None,
        })
    }

    /// Parse a record object
    ///
    /// Only one value key is honoured, in priority `v`, `vs`, `vb`, `vd`.
    /// Numeric fields must hold JSON numbers. Text fields take any scalar in
    /// its JSON text form, and `vb` follows JSON truthiness.
    pub fn from_json(data: &JsonValue) -> Result<Self> {
        let fields = data
            .as_object()
            .ok_or_else(|| MalformedInputError::not_an_object(data))?;

        let present = keys::VALUE_KEYS
            .iter()
            .filter(|key| fields.get(**key).is_some_and(|v| !v.is_null()))
            .count();
        if present > 1 {
            tracing::warn!(
                value_keys = present,
                "record carries more than one value key, using the highest priority one"
            );
        }

        let value = if let Some(v) = number_field(fields, keys::VALUE)? {
            Some(Value::Numeric(v))
        } else if let Some(vs) = text_field(fields, keys::STRING_VALUE) {
            Some(Value::Text(vs))
        } else if let Some(vb) = bool_field(fields, keys::BOOL_VALUE) {
            Some(Value::Boolean(vb))
        } else {
            text_field(fields, keys::DATA_VALUE).map(Value::RawText)
        };

        Ok(Self {
            name: text_field(fields, keys::NAME),
            time: number_field(fields, keys::TIME)?,
            isotime: text_field(fields, keys::ISOTIME),
            unit: text_field(fields, keys::UNIT),
            value,
            sum: number_field(fields, keys::SUM)?,
        })
    }

    /// Write the measurement as a compact record object
    ///
    /// Unset fields are left out rather than written as `null`. JSON has no
    /// form for NaN or infinity, so non-finite numbers are left out as well.
    pub fn to_json(&self) -> Map<String, JsonValue> {
        let mut ret = Map::new();

        if let Some(name) = &self.name {
            ret.insert(keys::NAME.into(), JsonValue::String(name.clone()));
        }
        if let Some(time) = self.time.and_then(Number::from_f64) {
            ret.insert(keys::TIME.into(), JsonValue::Number(time));
        }
        if let Some(isotime) = &self.isotime {
            ret.insert(keys::ISOTIME.into(), JsonValue::String(isotime.clone()));
        }
        if let Some(unit) = &self.unit {
            ret.insert(keys::UNIT.into(), JsonValue::String(unit.clone()));
        }
        if let Some(sum) = self.sum.and_then(Number::from_f64) {
            ret.insert(keys::SUM.into(), JsonValue::Number(sum));
        }
        if let Some(value) = &self.value
            && let Some(json) = value.to_json()
        {
            ret.insert(value.key().into(), json);
        }

        ret
    }

    /// Resolve this measurement against a base into a self-contained one
    ///
    /// Names concatenate and times add. Unit and ISO time fall back to the
    /// base when unset. Numeric values add to the base value, other value
    /// kinds are kept as they are. The sum is never combined with the base.
    ///
    /// The result always has a name and a time, the empty string and `0.0`
    /// when neither side sets them.
    pub fn to_absolute(&self, base: &Measurement) -> Measurement {
        let name = format!(
            "{}{}",
            base.name.as_deref().unwrap_or_default(),
            self.name.as_deref().unwrap_or_default()
        );
        let time = base.time.unwrap_or(0.0) + self.time.unwrap_or(0.0);

        let value = match &self.value {
            Some(value) if !value.is_additive() => Some(value.clone()),
            own => {
                let own = own.as_ref().and_then(Value::as_f64);
                let base_value = base.value.as_ref().and_then(Value::as_f64);
                match (base_value, own) {
                    (None, None) => None,
                    (b, v) => Some(Value::Numeric(b.unwrap_or(0.0) + v.unwrap_or(0.0))),
                }
            }
        };

        Measurement {
            name: Some(name),
            time: Some(time),
            isotime: self.isotime.clone().or_else(|| base.isotime.clone()),
            unit: self.unit.clone().or_else(|| base.unit.clone()),
            value,
            sum: self.sum,
        }
    }
}

/// Look up a key, treating an explicit `null` as absent
fn field<'a>(fields: &'a Map<String, JsonValue>, key: &str) -> Option<&'a JsonValue> {
    fields.get(key).filter(|v| !v.is_null())
}

/// Text fields accept any value; non-strings are kept in their JSON text form
fn text_field(fields: &Map<String, JsonValue>, key: &str) -> Option<String> {
    field(fields, key).map(|v| match v {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn number_field(fields: &Map<String, JsonValue>, key: &str) -> Result<Option<f64>> {
    match field(fields, key) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| MalformedInputError::invalid_field(key, "a number", v)),
    }
}

/// JSON truthiness: `false`, zero and empty strings, arrays or objects are false
fn bool_field(fields: &Map<String, JsonValue>, key: &str) -> Option<bool> {
    field(fields, key).map(|v| match v {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(a) => !a.is_empty(),
        JsonValue::Object(o) => !o.is_empty(),
        JsonValue::Null => false,
    })
}
