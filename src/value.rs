//! SenML measurement values

/// The value carried by a measurement
///
/// The variant decides the compact JSON key a record is written with:
/// `v` for [`Value::Numeric`], `vb` for [`Value::Boolean`], `vs` for
/// [`Value::Text`] and `vd` for [`Value::RawText`].
///
/// `Text` and `RawText` hold the same kind of string. They only differ in the
/// key they round-trip through, which keeps `vs` and `vd` records apart when a
/// document is re-serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric value (`v`)
    Numeric(f64),
    /// Boolean value (`vb`)
    Boolean(bool),
    /// Text value (`vs`)
    Text(String),
    /// Raw data value (`vd`), kept as the string found on the wire
    RawText(String),
}

impl Value {
    /// Create a numeric value
    pub fn numeric(value: f64) -> Self {
        Self::Numeric(value)
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create a text value
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw data value
    pub fn raw_text<S: Into<String>>(data: S) -> Self {
        Self::RawText(data.into())
    }

    /// The numeric payload, if this is a numeric value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The string payload of either text kind
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::RawText(s) => Some(s),
            _ => None,
        }
    }

    /// Whether base values are added to this value when resolving
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// The compact JSON key this value is written under
    pub fn key(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "vb",
            Self::RawText(_) => "vd",
            Self::Text(_) => "vs",
            Self::Numeric(_) => "v",
        }
    }

    /// JSON form of the payload; `None` for a non-finite number
    pub(crate) fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            Self::RawText(s) | Self::Text(s) => Some(serde_json::Value::String(s.clone())),
            Self::Numeric(v) => serde_json::Number::from_f64(*v).map(serde_json::Value::Number),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_per_kind() {
        assert_eq!(Value::from(1.5).key(), "v");
        assert_eq!(Value::from(true).key(), "vb");
        assert_eq!(Value::from("on").key(), "vs");
        assert_eq!(Value::raw_text("aGVq").key(), "vd");
    }

    #[test]
    fn test_only_numeric_is_additive() {
        assert!(Value::Numeric(0.0).is_additive());
        assert!(!Value::Boolean(false).is_additive());
        assert!(!Value::Text("1".into()).is_additive());
        assert!(!Value::RawText("1".into()).is_additive());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Numeric(2.0).as_f64(), Some(2.0));
        assert_eq!(Value::Boolean(true).as_f64(), None);
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::raw_text("abc").as_str(), Some("abc"));
        assert_eq!(Value::Numeric(1.0).as_str(), None);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Value::numeric(2.5), Value::Numeric(2.5));
        assert_eq!(Value::boolean(true), Value::Boolean(true));
        assert_eq!(Value::text("hej"), Value::Text("hej".into()));
        assert_eq!(Value::text(String::from("a")), Value::from("a"));
        assert_eq!(Value::raw_text("aGVq"), Value::RawText("aGVq".into()));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Value::Numeric(2.5).to_json(), Some(json!(2.5)));
        assert_eq!(Value::Boolean(false).to_json(), Some(json!(false)));
        assert_eq!(Value::Text("hej".into()).to_json(), Some(json!("hej")));
        assert_eq!(Value::Numeric(f64::NAN).to_json(), None);
        assert_eq!(Value::Numeric(f64::INFINITY).to_json(), None);
    }
}
